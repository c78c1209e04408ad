use serde::{Deserialize, Serialize};

use super::de::{opt_text, text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub email: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub expertise: Option<String>,
}
