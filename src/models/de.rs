//! Lenient field decoding: the server stores form input verbatim, so a field
//! may arrive as a string, a number, or not at all.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(display).unwrap_or_default())
}

/// Empty strings count as absent.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(display)
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::text")]
        a: String,
        #[serde(default, deserialize_with = "super::opt_text")]
        b: Option<String>,
    }

    #[test]
    fn numbers_and_nulls_become_text() {
        let p: Probe = serde_json::from_value(json!({ "a": 3, "b": null })).unwrap();
        assert_eq!(p.a, "3");
        assert_eq!(p.b, None);
    }

    #[test]
    fn missing_and_empty_fields() {
        let p: Probe = serde_json::from_value(json!({ "b": "" })).unwrap();
        assert_eq!(p.a, "");
        assert_eq!(p.b, None);

        let p: Probe = serde_json::from_value(json!({ "b": 12 })).unwrap();
        assert_eq!(p.b.as_deref(), Some("12"));
    }
}
