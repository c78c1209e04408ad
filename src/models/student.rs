use serde::{Deserialize, Serialize};

use super::de::{opt_text, text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub student_id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub program: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub semester: Option<String>,
}
