// Endpoint templates. Rows describe tenant- or region-scoped endpoints
// as `https://{subdomain}.example.com/...`; placeholders resolve from
// the runtime input config before any request is made.

use serde_json::Value;
use syncline_core::{Result, SynclineError};

/// Substitute every `{key}` placeholder in `template` with the matching
/// value from the input config.
///
/// Fails with a `Configuration` error naming the first missing key, and
/// with a `Template` error when the braces themselves are malformed.
pub fn resolve_template(template: &str, config: &Value) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            SynclineError::Template(format!("unterminated placeholder in '{template}'"))
        })?;
        let key = &after[..end];
        if key.is_empty() {
            return Err(SynclineError::Template(format!(
                "empty placeholder in '{template}'"
            )));
        }
        out.push_str(&config_value(config, key)?);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Scalar config lookup. Numbers and booleans are stringified; anything
/// else is treated as absent.
fn config_value(config: &Value, key: &str) -> Result<String> {
    match config.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        _ => Err(SynclineError::Configuration(format!(
            "input config is missing required value '{key}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_placeholders_passes_through() {
        let resolved = resolve_template("https://api.hubapi.com/oauth/v1/token", &json!({}));
        assert_eq!(resolved.unwrap(), "https://api.hubapi.com/oauth/v1/token");
    }

    #[test]
    fn test_substitutes_placeholder() {
        let config = json!({ "subdomain": "acme" });
        let resolved =
            resolve_template("https://{subdomain}.zendesk.com/oauth/tokens", &config).unwrap();
        assert_eq!(resolved, "https://acme.zendesk.com/oauth/tokens");
    }

    #[test]
    fn test_substitutes_multiple_placeholders() {
        let config = json!({ "host": "acme.snowflakecomputing.com", "role": "SYNC" });
        let resolved = resolve_template("https://{host}/oauth/authorize?r={role}", &config);
        assert_eq!(
            resolved.unwrap(),
            "https://acme.snowflakecomputing.com/oauth/authorize?r=SYNC"
        );
    }

    #[test]
    fn test_numeric_value_is_stringified() {
        let config = json!({ "port": 8443 });
        let resolved = resolve_template("https://db.example.com:{port}/token", &config).unwrap();
        assert_eq!(resolved, "https://db.example.com:8443/token");
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let err = resolve_template("https://{host}/oauth/token", &json!({})).unwrap_err();
        match err {
            SynclineError::Configuration(msg) => assert!(msg.contains("'host'")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_placeholder_is_template_error() {
        let err = resolve_template("https://{host/oauth", &json!({"host": "x"})).unwrap_err();
        assert!(matches!(err, SynclineError::Template(_)));
    }

    #[test]
    fn test_empty_placeholder_is_template_error() {
        let err = resolve_template("https://{}/oauth", &json!({})).unwrap_err();
        assert!(matches!(err, SynclineError::Template(_)));
    }
}
