// Credential extraction: walk the row's output fields through the
// token response and normalize what comes out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use syncline_core::{Clock, Result, SynclineError};

use crate::exchange::ProviderResponse;
use crate::provider::ProviderOAuthSpec;

/// Key under which the computed absolute expiry timestamp is stored.
pub const TOKEN_EXPIRY_KEY: &str = "token_expiry_date";

/// Normalized credentials produced by a completed flow: a flat map of
/// string values, ready to persist. Either fully populated or never
/// returned at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialResult {
    values: BTreeMap<String, String>,
}

impl CredentialResult {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }
}

/// Pull the row's declared fields out of a token response.
///
/// Mandatory fields abort with `MissingTokenField` naming the field and
/// the endpoint; optional fields are skipped when absent. When the row
/// declares an `expires_in` location, the relative seconds are turned
/// into an absolute `token_expiry_date` using the injected clock.
pub fn extract_output(
    spec: &ProviderOAuthSpec,
    response: &ProviderResponse,
    clock: &dyn Clock,
) -> Result<CredentialResult> {
    let mut result = CredentialResult::default();

    for field in spec.output_fields {
        match lookup_path(&response.json, field.path) {
            Some(value) => result.insert(field.key, value),
            None if field.required => {
                return Err(SynclineError::MissingTokenField {
                    field: field.key.to_string(),
                    endpoint: response.endpoint.clone(),
                })
            }
            None => {}
        }
    }

    if let Some(path) = spec.expires_in_path {
        append_expiry(&mut result, &response.json, path, &response.endpoint, clock)?;
    }

    Ok(result)
}

/// Convert a relative `expires_in` at `path` into an absolute RFC 3339
/// `token_expiry_date`. Absent values are fine; malformed ones are not.
pub(crate) fn append_expiry(
    result: &mut CredentialResult,
    json: &Value,
    path: &str,
    endpoint: &str,
    clock: &dyn Clock,
) -> Result<()> {
    if let Some(raw) = lookup_path(json, path) {
        let seconds: i64 = raw.parse().map_err(|_| {
            SynclineError::Response(format!(
                "expires_in value '{raw}' from {endpoint} is not a whole number of seconds"
            ))
        })?;
        let expiry = clock.now() + chrono::Duration::seconds(seconds);
        result.insert(
            TOKEN_EXPIRY_KEY,
            expiry.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        );
    }
    Ok(())
}

/// Walk a dot-separated path ("data.access_token") through nested JSON.
/// Scalars are stringified; objects and arrays do not count as values.
pub(crate) fn lookup_path(data: &Value, path: &str) -> Option<String> {
    let mut current = data;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
