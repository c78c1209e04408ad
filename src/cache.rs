use std::collections::HashMap;

use serde_json::Value;

use crate::error::AppError;
use crate::models::{Course, EntityKind, Faculty, Room, Student};

/// Last successful server snapshot of each reference collection.
#[derive(Debug, Default, Clone)]
pub struct EntityCache {
    courses: Vec<Course>,
    faculty: Vec<Faculty>,
    faculty_index: HashMap<String, usize>,
    rooms: Vec<Room>,
    students: Vec<Student>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Courses => self.courses.len(),
            EntityKind::Faculty => self.faculty.len(),
            EntityKind::Rooms => self.rooms.len(),
            EntityKind::Students => self.students.len(),
        }
    }

    /// First faculty member whose id equals `id`.
    pub fn faculty_by_id(&self, id: &str) -> Option<&Faculty> {
        self.faculty_index.get(id).map(|&pos| &self.faculty[pos])
    }

    /// Swaps in a fresh snapshot for `kind`. Every row is decoded before the
    /// slot is touched, so a malformed payload leaves the old snapshot in place.
    pub fn replace(&mut self, kind: EntityKind, rows: Vec<Value>) -> Result<(), AppError> {
        let rows = Value::Array(rows);
        match kind {
            EntityKind::Courses => self.courses = serde_json::from_value(rows)?,
            EntityKind::Faculty => {
                let faculty: Vec<Faculty> = serde_json::from_value(rows)?;
                self.set_faculty(faculty);
            }
            EntityKind::Rooms => self.rooms = serde_json::from_value(rows)?,
            EntityKind::Students => self.students = serde_json::from_value(rows)?,
        }
        Ok(())
    }

    fn set_faculty(&mut self, faculty: Vec<Faculty>) {
        let mut index = HashMap::with_capacity(faculty.len());
        for (pos, member) in faculty.iter().enumerate() {
            index.entry(member.id.clone()).or_insert(pos);
        }
        self.faculty = faculty;
        self.faculty_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replace_swaps_whole_snapshot() {
        let mut cache = EntityCache::new();
        cache
            .replace(EntityKind::Rooms, vec![json!({"id": "r1", "number": "101"})])
            .unwrap();
        cache
            .replace(EntityKind::Rooms, vec![json!({"id": "r2", "number": "202"})])
            .unwrap();

        assert_eq!(cache.rooms().len(), 1);
        assert_eq!(cache.rooms()[0].number, "202");
    }

    #[test]
    fn malformed_rows_keep_previous_snapshot() {
        let mut cache = EntityCache::new();
        cache
            .replace(EntityKind::Students, vec![json!({"id": "s1", "name": "Asha"})])
            .unwrap();

        let err = cache
            .replace(EntityKind::Students, vec![json!("not an object")])
            .unwrap_err();

        assert!(matches!(err, AppError::Decode(_)));
        assert_eq!(cache.students()[0].name, "Asha");
    }

    #[test]
    fn faculty_index_follows_latest_snapshot() {
        let mut cache = EntityCache::new();
        cache
            .replace(
                EntityKind::Faculty,
                vec![
                    json!({"id": "f1", "name": "Dr. Rao"}),
                    json!({"id": "f1", "name": "Duplicate"}),
                ],
            )
            .unwrap();
        assert_eq!(cache.faculty_by_id("f1").map(|f| f.name.as_str()), Some("Dr. Rao"));

        cache
            .replace(EntityKind::Faculty, vec![json!({"id": "f2", "name": "Dr. Iyer"})])
            .unwrap();
        assert!(cache.faculty_by_id("f1").is_none());
        assert_eq!(cache.len(EntityKind::Faculty), 1);
    }
}
