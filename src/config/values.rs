use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

/// Load a flat map of placeholder values from a YAML (or JSON) file
pub fn load_values(path: &str) -> Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read values file {}", path))?;
    parse_values(&text).with_context(|| format!("In {}", path))
}

pub fn parse_values(text: &str) -> Result<Map<String, Value>> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: Value = serde_yaml::from_str(text).context("Invalid values yaml")?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => bail!("Values file must be a mapping, found {}", kind(&other)),
    }
}

/// Parse `key=value` overrides given on the command line
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => bail!("Invalid assignment '{}': expected key=value", raw),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::ValueSource;

    #[test]
    fn test_parse_yaml_values() {
        let values = parse_values("name: foo\nversion: 2\n").unwrap();
        assert_eq!(values.get_string("name"), Some("foo".to_string()));
        assert_eq!(values.get_string("version"), Some("2".to_string()));
    }

    #[test]
    fn test_parse_json_values() {
        let values = parse_values(r#"{"name": "foo"}"#).unwrap();
        assert_eq!(values.get_string("name"), Some("foo".to_string()));
    }

    #[test]
    fn test_empty_values_file() {
        assert!(parse_values("").unwrap().is_empty());
    }

    #[test]
    fn test_non_mapping_values_fails() {
        let err = parse_values("- a\n- b\n").unwrap_err();
        assert_eq!(err.to_string(), "Values file must be a mapping, found a list");
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("=foo").is_err());
    }
}
