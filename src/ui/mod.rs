//! The document boundary. Element ids are a fixed contract with the page.

pub mod memory;
pub mod terminal;

use std::time::Duration;

use crate::models::{EntityKind, FormFields};

pub use memory::{MemorySurface, SurfaceEvent};
pub use terminal::TerminalSurface;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TableBody(EntityKind),
    StatCount(EntityKind),
    AddForm(EntityKind),
    FacultySelect,
    ValidationResult,
    GenerationProgress,
    GenerationResult,
    TimetablesList,
    TimetableViewer,
    ViewerTitle,
    TimetableContent,
    LoadingOverlay,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::TableBody(EntityKind::Courses) => "courses-tbody",
            Region::TableBody(EntityKind::Faculty) => "faculty-tbody",
            Region::TableBody(EntityKind::Rooms) => "rooms-tbody",
            Region::TableBody(EntityKind::Students) => "students-tbody",
            Region::StatCount(EntityKind::Courses) => "total-courses",
            Region::StatCount(EntityKind::Faculty) => "total-faculty",
            Region::StatCount(EntityKind::Rooms) => "total-rooms",
            Region::StatCount(EntityKind::Students) => "total-students",
            Region::AddForm(EntityKind::Courses) => "add-course-form",
            Region::AddForm(EntityKind::Faculty) => "add-faculty-form",
            Region::AddForm(EntityKind::Rooms) => "add-room-form",
            Region::AddForm(EntityKind::Students) => "add-student-form",
            Region::FacultySelect => "course-faculty-select",
            Region::ValidationResult => "validation-result",
            Region::GenerationProgress => "generation-progress",
            Region::GenerationResult => "generation-result",
            Region::TimetablesList => "timetables-list",
            Region::TimetableViewer => "timetable-viewer",
            Region::ViewerTitle => "viewer-title",
            Region::TimetableContent => "timetable-content",
            Region::LoadingOverlay => "loading-overlay",
        }
    }
}

/// Mutually exclusive panes of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Courses,
    Faculty,
    Rooms,
    Students,
    Generate,
    View,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Courses,
        Tab::Faculty,
        Tab::Rooms,
        Tab::Students,
        Tab::Generate,
        Tab::View,
    ];

    /// Pane id, also the `data-tab` value of its button.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Courses => "courses",
            Tab::Faculty => "faculty",
            Tab::Rooms => "rooms",
            Tab::Students => "students",
            Tab::Generate => "generate",
            Tab::View => "view",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Warning => "warning",
            ToastLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    /// How long the surface should keep it on screen.
    pub duration: Duration,
}

/// Everything the controller may do to the page.
pub trait Surface: Send + Sync {
    fn set_html(&self, region: Region, html: String);
    fn set_text(&self, region: Region, text: String);
    fn set_visible(&self, region: Region, visible: bool);
    fn set_class(&self, region: Region, class: &str);
    /// Marks both the tab button and its pane.
    fn set_active(&self, tab: Tab, active: bool);
    fn toast(&self, toast: Toast);
    fn open_in_new_context(&self, url: &str);
    fn form_values(&self, kind: EntityKind) -> FormFields;
    fn reset_form(&self, kind: EntityKind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_are_distinct() {
        let mut ids: Vec<&str> = Tab::ALL.into_iter().map(Tab::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Tab::ALL.len());
    }

    #[test]
    fn region_ids_follow_page_contract() {
        assert_eq!(Region::TableBody(EntityKind::Rooms).id(), "rooms-tbody");
        assert_eq!(Region::StatCount(EntityKind::Faculty).id(), "total-faculty");
        assert_eq!(Region::AddForm(EntityKind::Students).id(), "add-student-form");
    }
}
