use super::html::{escape, or_na};
use crate::cache::EntityCache;
use crate::models::EntityKind;

pub const NOT_ASSIGNED: &str = "Not Assigned";

fn placeholder_row(columns: usize, message: &str) -> String {
    format!(
        "<tr><td colspan=\"{}\" class=\"loading\">{}</td></tr>",
        columns, message
    )
}

fn badge(kind: &str) -> String {
    let kind = escape(kind);
    format!("<span class=\"type {kind}\">{kind}</span>")
}

pub fn courses(cache: &EntityCache) -> String {
    if cache.courses().is_empty() {
        return placeholder_row(6, "No courses found. Add your first course!");
    }

    cache
        .courses()
        .iter()
        .map(|course| {
            // Joined on every render so the name tracks the latest faculty snapshot.
            let faculty = course
                .faculty_id
                .as_deref()
                .and_then(|id| cache.faculty_by_id(id))
                .map(|f| f.name.as_str())
                .unwrap_or(NOT_ASSIGNED);

            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&course.code),
                escape(&course.name),
                escape(&course.credits),
                badge(&course.course_type),
                escape(&course.program),
                escape(faculty),
            )
        })
        .collect()
}

pub fn faculty(cache: &EntityCache) -> String {
    if cache.faculty().is_empty() {
        return placeholder_row(4, "No faculty found. Add your first faculty member!");
    }

    cache
        .faculty()
        .iter()
        .map(|member| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&member.name),
                escape(&member.email),
                or_na(member.department.as_deref()),
                or_na(member.expertise.as_deref()),
            )
        })
        .collect()
}

pub fn rooms(cache: &EntityCache) -> String {
    if cache.rooms().is_empty() {
        return placeholder_row(4, "No rooms found. Add your first room!");
    }

    cache
        .rooms()
        .iter()
        .map(|room| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&room.number),
                badge(&room.room_type),
                escape(&room.capacity),
                or_na(room.building.as_deref()),
            )
        })
        .collect()
}

pub fn students(cache: &EntityCache) -> String {
    if cache.students().is_empty() {
        return placeholder_row(4, "No students found. Add your first student!");
    }

    cache
        .students()
        .iter()
        .map(|student| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&student.student_id),
                escape(&student.name),
                escape(&student.program),
                or_na(student.semester.as_deref()),
            )
        })
        .collect()
}

pub fn entity_table(kind: EntityKind, cache: &EntityCache) -> String {
    match kind {
        EntityKind::Courses => courses(cache),
        EntityKind::Faculty => faculty(cache),
        EntityKind::Rooms => rooms(cache),
        EntityKind::Students => students(cache),
    }
}

/// Options for the course form's faculty picker.
pub fn faculty_options(cache: &EntityCache) -> String {
    let options: String = cache
        .faculty()
        .iter()
        .map(|member| {
            format!(
                "<option value=\"{}\">{}</option>",
                escape(&member.id),
                escape(&member.name)
            )
        })
        .collect();
    format!("<option value=\"\">Select Faculty</option>{}", options)
}
