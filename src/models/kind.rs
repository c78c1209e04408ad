use std::fmt;

/// The four reference collections managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Courses,
    Faculty,
    Rooms,
    Students,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Courses,
        EntityKind::Faculty,
        EntityKind::Rooms,
        EntityKind::Students,
    ];

    /// Collection endpoint, relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Courses => "courses",
            EntityKind::Faculty => "faculty",
            EntityKind::Rooms => "rooms",
            EntityKind::Students => "students",
        }
    }

    /// Singular noun used in notifications ("Failed to add room").
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Courses => "course",
            EntityKind::Faculty => "faculty",
            EntityKind::Rooms => "room",
            EntityKind::Students => "student",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Courses => "Course",
            EntityKind::Faculty => "Faculty",
            EntityKind::Rooms => "Room",
            EntityKind::Students => "Student",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
