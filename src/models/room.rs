use serde::{Deserialize, Serialize};

use super::de::{opt_text, text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub number: String,
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub room_type: String,
    #[serde(default, deserialize_with = "text")]
    pub capacity: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub building: Option<String>,
}
