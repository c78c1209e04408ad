pub mod course;
pub mod de;
pub mod faculty;
pub mod kind;
pub mod room;
pub mod student;
pub mod timetable;

use std::collections::BTreeMap;

pub use course::Course;
pub use faculty::Faculty;
pub use kind::EntityKind;
pub use room::Room;
pub use student::Student;
pub use timetable::{Conflict, SessionEntry, Timetable, ValidationResult, Weekday};

/// A serialized "add" form: field name to raw input value.
pub type FormFields = BTreeMap<String, String>;
