// Provider redirect handling: ignorable-error detection, state
// validation, and code extraction, strictly in that order.

use std::collections::HashMap;

use syncline_core::{Result, SynclineError};

use crate::provider::ProviderOAuthSpec;
use crate::session::OAuthSession;

/// Check the redirect for a provider error code the row declares
/// ignorable. Returns the code and the optional human-readable
/// description; an unlisted error code returns `None` and falls through
/// to normal validation, which will fail loudly on the missing code.
pub fn ignorable_error(
    spec: &ProviderOAuthSpec,
    query: &HashMap<String, String>,
) -> Option<(String, Option<String>)> {
    let code = query.get("error")?;
    if spec.ignorable_errors.contains(&code.as_str()) {
        Some((code.clone(), query.get("error_description").cloned()))
    } else {
        None
    }
}

/// Validate the anti-forgery state round-trip. The redirect must carry
/// a `state` equal to the one minted for this session.
pub fn validate_state(session: &OAuthSession, query: &HashMap<String, String>) -> Result<()> {
    match query.get("state") {
        Some(state) if *state == session.state => Ok(()),
        Some(_) => Err(SynclineError::InvalidState(
            "state returned by the provider does not match this authorization attempt".into(),
        )),
        None => Err(SynclineError::InvalidState(
            "provider redirect carries no state parameter".into(),
        )),
    }
}

/// Pull the authorization code out of the redirect query, under the
/// row's parameter name.
pub fn extract_code<'a>(
    spec: &ProviderOAuthSpec,
    query: &'a HashMap<String, String>,
) -> Result<&'a str> {
    query
        .get(spec.code_param)
        .map(String::as_str)
        .ok_or_else(|| SynclineError::MissingCallbackParameter(spec.code_param.to_string()))
}
