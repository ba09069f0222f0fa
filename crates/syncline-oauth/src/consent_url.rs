// Consent URL assembly. The query is built by hand rather than through
// a URL builder: scope separators and their encoding are provider law,
// and a generic serializer would normalize them away.

use syncline_core::{Result, SynclineError};
use urlencoding::encode;

use crate::pkce::generate_code_challenge;
use crate::provider::{ProviderOAuthSpec, ScopeStyle};
use crate::session::OAuthSession;
use crate::template::resolve_template;

/// Inputs for building a consent URL.
pub struct ConsentUrlParams<'a> {
    pub spec: &'a ProviderOAuthSpec,
    pub client_id: &'a str,
    pub redirect_url: &'a str,
    pub input_config: &'a serde_json::Value,
    pub session: &'a OAuthSession,
}

/// Build the consent URL the user is redirected to.
///
/// Always carries the client id (under the row's key), `redirect_uri`,
/// `state` and `response_type=code`; scopes, extra parameters and the
/// PKCE challenge follow when the row declares them.
pub fn build_consent_url(params: ConsentUrlParams<'_>) -> Result<String> {
    let ConsentUrlParams {
        spec,
        client_id,
        redirect_url,
        input_config,
        session,
    } = params;

    let endpoint = resolve_template(spec.consent_endpoint, input_config)?;
    let separator = if endpoint.contains('?') { '&' } else { '?' };

    let mut url = format!(
        "{endpoint}{separator}{}={}&redirect_uri={}&state={}&response_type=code",
        spec.client_id_key,
        encode(client_id),
        encode(redirect_url),
        encode(&session.state),
    );

    if !spec.scopes.is_empty() {
        url.push_str("&scope=");
        url.push_str(&scope_value(spec));
    }

    for (key, value) in spec.extra_consent_params {
        let resolved = resolve_template(value, input_config)?;
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(&resolved));
    }

    if spec.requires_pkce {
        let verifier = session.code_verifier.as_deref().ok_or_else(|| {
            SynclineError::Configuration(format!(
                "provider '{}' requires PKCE but the session has no code verifier",
                spec.id
            ))
        })?;
        url.push_str("&code_challenge=");
        url.push_str(&generate_code_challenge(verifier));
        url.push_str("&code_challenge_method=S256");
    }

    // Parse for validation only; the hand-assembled string is returned
    // untouched so scope encoding survives exactly as declared.
    url::Url::parse(&url).map_err(|e| {
        SynclineError::Template(format!("consent URL for '{}' is invalid: {e}", spec.id))
    })?;

    Ok(url)
}

/// Join and encode the row's scopes per its declared style.
fn scope_value(spec: &ProviderOAuthSpec) -> String {
    match spec.scope_style {
        ScopeStyle::SpaceEncoded => encode(&spec.scopes.join(" ")).into_owned(),
        ScopeStyle::SpaceRaw => spec.scopes.join("%20"),
        ScopeStyle::PlusSeparated => spec.scopes.join("+"),
        ScopeStyle::CommaSeparated => spec
            .scopes
            .iter()
            .map(|s| encode(s).into_owned())
            .collect::<Vec<_>>()
            .join(","),
    }
}
