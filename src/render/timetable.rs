use super::html::escape;
use crate::models::{SessionEntry, Timetable, Weekday};

pub fn viewer_title(timetable: &Timetable) -> String {
    format!("{} - {}", timetable.program, timetable.semester)
}

fn schedule_item(entry: &SessionEntry) -> String {
    let kind = escape(&entry.session_type);
    format!(
        "<div class=\"schedule-item\">\
         <div class=\"time\">{}</div>\
         <div class=\"course-code\">{}</div>\
         <div class=\"course-name\">{}</div>\
         <div class=\"faculty\">{}</div>\
         <div class=\"room\">{}</div>\
         <div class=\"type {kind}\">{kind}</div>\
         </div>\n",
        escape(&entry.time),
        escape(&entry.course_code),
        escape(&entry.course_name),
        escape(&entry.faculty_name),
        escape(&entry.room_number),
    )
}

/// Day sections in Monday..Friday order, each listing its sessions by time.
/// Days without sessions produce no section.
pub fn grid(timetable: &Timetable) -> String {
    let mut out = String::new();

    for day in Weekday::ALL {
        let entries = timetable.sessions_on(day);
        if entries.is_empty() {
            continue;
        }

        out.push_str("<div class=\"day-section\">\n");
        out.push_str(&format!(
            "<div class=\"day-header\">{}</div>\n",
            day.as_str()
        ));
        out.push_str("<div class=\"day-schedule\">\n");
        for entry in entries {
            out.push_str(&schedule_item(entry));
        }
        out.push_str("</div>\n</div>\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: &str, time: &str, code: &str) -> SessionEntry {
        SessionEntry {
            day: day.into(),
            time: time.into(),
            course_code: code.into(),
            course_name: format!("{code} name"),
            faculty_name: "Dr. Rao".into(),
            room_number: "101".into(),
            session_type: "theory".into(),
        }
    }

    fn sample() -> Timetable {
        Timetable {
            id: "tt-1".into(),
            program: "B.Ed.".into(),
            semester: "Semester 1".into(),
            sessions: vec![
                session("Wednesday", "14:00", "WED"),
                session("Monday", "09:00", "MON9"),
                session("Monday", "08:00", "MON8"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn days_in_weekday_order_and_sessions_by_time() {
        let html = grid(&sample());

        let monday = html.find("Monday").unwrap();
        let wednesday = html.find("Wednesday").unwrap();
        assert!(monday < wednesday);

        let eight = html.find("MON8").unwrap();
        let nine = html.find("MON9").unwrap();
        assert!(eight < nine);
        assert!(nine < wednesday);

        for absent in ["Tuesday", "Thursday", "Friday"] {
            assert!(!html.contains(absent), "{absent} should be omitted");
        }
        assert_eq!(html.matches("class=\"day-section\"").count(), 2);
        assert_eq!(html.matches("class=\"schedule-item\"").count(), 3);
    }

    #[test]
    fn rendering_is_idempotent() {
        let tt = sample();
        assert_eq!(grid(&tt), grid(&tt));
    }

    #[test]
    fn sessions_on_unknown_days_are_dropped() {
        let tt = Timetable {
            sessions: vec![session("Saturday", "10:00", "SAT")],
            ..Default::default()
        };
        assert_eq!(grid(&tt), "");
    }

    #[test]
    fn title_joins_program_and_semester() {
        assert_eq!(viewer_title(&sample()), "B.Ed. - Semester 1");
    }
}
