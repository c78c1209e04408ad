/// Escapes text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn or_na(value: Option<&str>) -> String {
    escape(value.unwrap_or("N/A"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"R&D" 'lab'</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;lab&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Room 101"), "Room 101");
    }
}
