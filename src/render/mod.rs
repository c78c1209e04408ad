//! HTML fragments for the console's regions. Renderers only read state.

pub mod generation;
pub mod html;
pub mod tables;
pub mod timetable;

pub use generation::{
    format_created_at, generation_failure, generation_summary, saved_list, validation_report,
};
pub use tables::{NOT_ASSIGNED, entity_table, faculty_options};
pub use timetable::{grid, viewer_title};
