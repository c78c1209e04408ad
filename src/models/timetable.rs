use serde::{Deserialize, Serialize};

use super::de::{opt_text, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// One scheduled session. `time` is zero-padded `HH:MM` (optionally a
/// `HH:MM-HH:MM` range), so string order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    #[serde(default, deserialize_with = "text")]
    pub day: String,
    #[serde(default, deserialize_with = "text")]
    pub time: String,
    #[serde(default, deserialize_with = "text")]
    pub course_code: String,
    #[serde(default, deserialize_with = "text")]
    pub course_name: String,
    #[serde(default, deserialize_with = "text")]
    pub faculty_name: String,
    #[serde(default, deserialize_with = "text")]
    pub room_number: String,
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub session_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// `faculty_conflict` or `room_conflict`.
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub kind: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub day: String,
    #[serde(default, deserialize_with = "text")]
    pub time: String,
    #[serde(default)]
    pub courses: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub program: String,
    #[serde(default, deserialize_with = "text")]
    pub semester: String,
    #[serde(default, deserialize_with = "text")]
    pub created_at: String,
    #[serde(rename = "timetable", default)]
    pub sessions: Vec<SessionEntry>,
    #[serde(default)]
    pub validation: ValidationResult,
}

impl Timetable {
    /// Sessions held on `day`, in chronological order.
    pub fn sessions_on(&self, day: Weekday) -> Vec<&SessionEntry> {
        let mut entries: Vec<&SessionEntry> = self
            .sessions
            .iter()
            .filter(|entry| entry.day == day.as_str())
            .collect();
        entries.sort_by(|a, b| a.time.cmp(&b.time));
        entries
    }
}
