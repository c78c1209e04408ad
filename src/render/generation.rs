//! Panels of the generate and view tabs.

use chrono::{DateTime, Local, NaiveDateTime};

use super::html::escape;
use crate::api::{GenerateResponse, ValidateDataResponse};
use crate::models::Timetable;

const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const NO_TIMETABLES: &str =
    "No timetables generated yet. Go to Generate Timetable tab to create one.";

pub fn generation_summary(result: &GenerateResponse) -> String {
    let conflicts = result.validation.conflicts.len();
    let status = if result.validation.is_valid {
        "<span class=\"status-ok\">✅ No conflicts detected</span>".to_string()
    } else {
        format!("<span class=\"status-error\">⚠️ {} conflicts found</span>", conflicts)
    };
    let id = result.timetable_id.as_deref().unwrap_or("Not saved");

    format!(
        "<h3>✅ Timetable Generated Successfully!</h3>\n\
         <p><strong>Timetable ID:</strong> {}</p>\n\
         <p><strong>Program:</strong> {}</p>\n\
         <p><strong>Semester:</strong> {}</p>\n\
         <p><strong>Total Sessions:</strong> {}</p>\n\
         <p><strong>Validation Status:</strong> {}</p>\n\
         <div class=\"result-actions\">\
         <button class=\"btn btn-primary\" data-action=\"view-timetable\">View Timetable</button>\
         <button class=\"btn btn-secondary\" data-action=\"export-pdf\">📄 Export PDF</button>\
         <button class=\"btn btn-secondary\" data-action=\"export-excel\">📊 Export Excel</button>\
         </div>\n",
        escape(id),
        escape(&result.metadata.program),
        escape(&result.metadata.semester),
        result.session_count(),
        status,
    )
}

pub fn generation_failure(message: &str) -> String {
    format!(
        "<h3>❌ Timetable Generation Failed</h3>\n\
         <p>{}</p>\n\
         <p>Please check your data and try again, or use a different algorithm.</p>\n",
        escape(message)
    )
}

fn list_items(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul>{}</ul>", items)
}

pub fn validation_report(result: &ValidateDataResponse) -> String {
    if result.success {
        let mut out = String::from(
            "<h4>✅ Validation Successful</h4>\n\
             <p>All required data is present. You can proceed with timetable generation.</p>\n",
        );
        if !result.warnings.is_empty() {
            out.push_str("<h4>⚠️ Warnings:</h4>\n");
            out.push_str(&list_items(&result.warnings));
            out.push('\n');
        }
        out
    } else {
        let errors: Vec<String> = if result.errors.is_empty() {
            result.message.iter().cloned().collect()
        } else {
            result.errors.clone()
        };
        format!("<h4>❌ Validation Failed</h4>\n{}\n", list_items(&errors))
    }
}

/// Renders a server timestamp the way a browser's `toLocaleString` would.
/// Offset-less timestamps are already local; unparseable ones pass through.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format(LOCAL_FORMAT).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(ts) => ts.format(LOCAL_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn saved_list(timetables: &[Timetable]) -> String {
    if timetables.is_empty() {
        return format!("<p class=\"loading\">{}</p>", NO_TIMETABLES);
    }

    timetables
        .iter()
        .map(|tt| {
            let badge = if tt.validation.is_valid { "Valid" } else { "Has Conflicts" };
            format!(
                "<div class=\"timetable-card\" data-timetable-id=\"{}\">\
                 <h3>{} - {}</h3>\
                 <p><strong>Generated:</strong> {}</p>\
                 <p><strong>Sessions:</strong> {}</p>\
                 <span class=\"badge\">{}</span>\
                 </div>\n",
                escape(&tt.id),
                escape(&tt.program),
                escape(&tt.semester),
                escape(&format_created_at(&tt.created_at)),
                tt.sessions.len(),
                badge,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_reports_conflict_count_and_session_fallback() {
        let result: GenerateResponse = serde_json::from_value(json!({
            "success": true,
            "timetable_id": "tt-9",
            "metadata": {"program": "B.Ed.", "semester": "Semester 1"},
            "validation": {"is_valid": false, "conflicts": [{"type": "room_conflict"}, {"type": "faculty_conflict"}]},
            "timetable": [{"day": "Monday", "time": "09:00"}]
        }))
        .unwrap();

        let html = generation_summary(&result);
        assert!(html.contains("<strong>Timetable ID:</strong> tt-9"));
        assert!(html.contains("<strong>Total Sessions:</strong> 1"));
        assert!(html.contains("2 conflicts found"));
        assert!(html.contains("data-action=\"export-excel\""));
    }

    #[test]
    fn failure_message_is_shown_verbatim() {
        let html = generation_failure("No courses found");
        assert!(html.contains("<p>No courses found</p>"));
    }

    #[test]
    fn validation_failure_lists_server_errors() {
        let result: ValidateDataResponse = serde_json::from_value(json!({
            "success": false,
            "errors": ["No rooms found. Please add rooms first."],
            "warnings": []
        }))
        .unwrap();
        let html = validation_report(&result);
        assert!(html.contains("Validation Failed"));
        assert!(html.contains("<li>No rooms found. Please add rooms first.</li>"));
    }

    #[test]
    fn validation_success_lists_warnings_only_when_present() {
        let clean: ValidateDataResponse =
            serde_json::from_value(json!({"success": true, "errors": [], "warnings": []})).unwrap();
        assert!(!validation_report(&clean).contains("Warnings"));

        let warned: ValidateDataResponse = serde_json::from_value(json!({
            "success": true,
            "warnings": ["Course 'Seminar' has no assigned faculty"]
        }))
        .unwrap();
        let html = validation_report(&warned);
        assert!(html.contains("Validation Successful"));
        assert!(html.contains("<li>Course &#39;Seminar&#39; has no assigned faculty</li>"));
    }

    #[test]
    fn naive_timestamps_format_like_a_browser() {
        assert_eq!(format_created_at("2024-03-01T14:05:09.123456"), "3/1/2024, 2:05:09 PM");
        assert_eq!(format_created_at("2024-11-20T09:00:00"), "11/20/2024, 9:00:00 AM");
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }

    #[test]
    fn saved_list_cards_and_placeholder() {
        assert!(saved_list(&[]).contains(NO_TIMETABLES));

        let tt: Timetable = serde_json::from_value(json!({
            "id": "tt-1", "program": "B.Ed.", "semester": "Semester 2",
            "created_at": "2024-03-01T14:05:09",
            "timetable": [{"day": "Monday"}, {"day": "Friday"}],
            "validation": {"is_valid": true, "conflicts": []}
        }))
        .unwrap();
        let html = saved_list(&[tt]);
        assert!(html.contains("<h3>B.Ed. - Semester 2</h3>"));
        assert!(html.contains("<strong>Sessions:</strong> 2"));
        assert!(html.contains("<span class=\"badge\">Valid</span>"));
        assert!(html.contains("data-timetable-id=\"tt-1\""));
    }
}
