use serde::{Deserialize, Serialize};

use super::de::{opt_text, text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub code: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub credits: String,
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub course_type: String,
    #[serde(default, deserialize_with = "text")]
    pub program: String,
    /// Weak reference into the faculty collection.
    #[serde(default, deserialize_with = "opt_text")]
    pub faculty_id: Option<String>,
}
