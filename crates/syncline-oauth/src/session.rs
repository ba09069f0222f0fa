// Per-attempt session state, created when a flow starts and consumed
// when the provider redirects back.

use serde::{Deserialize, Serialize};
use syncline_core::generate_random_string;

use crate::pkce::generate_code_verifier;
use crate::provider::ProviderOAuthSpec;

/// Length of the anti-forgery state value.
pub const STATE_LENGTH: usize = 32;

/// Secrets tied to a single authorization attempt.
///
/// The caller persists the session (keyed by `state`) between the
/// consent redirect and the provider callback, then discards it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthSession {
    /// Anti-forgery value round-tripped through the provider redirect.
    pub state: String,
    /// PKCE verifier, present only for providers that require PKCE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<String>,
    /// OAuth 1.0a temporary credential token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_token: Option<String>,
    /// OAuth 1.0a temporary credential secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_token_secret: Option<String>,
}

impl OAuthSession {
    /// New session for an OAuth 2.0 attempt: a fresh state, plus a PKCE
    /// verifier when the row requires one. Rows with `verifier_as_state`
    /// round-trip the verifier itself as the state value.
    pub fn for_spec(spec: &ProviderOAuthSpec) -> Self {
        if spec.requires_pkce {
            let verifier = generate_code_verifier();
            let state = if spec.verifier_as_state {
                verifier.clone()
            } else {
                generate_random_string(STATE_LENGTH)
            };
            Self {
                state,
                code_verifier: Some(verifier),
                temporary_token: None,
                temporary_token_secret: None,
            }
        } else {
            Self {
                state: generate_random_string(STATE_LENGTH),
                code_verifier: None,
                temporary_token: None,
                temporary_token_secret: None,
            }
        }
    }

    /// New session for an OAuth 1.0a attempt. The temporary token doubles
    /// as the correlation key, so it is mirrored into `state`.
    pub fn for_temporary_credentials(
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        let token = token.into();
        Self {
            state: token.clone(),
            code_verifier: None,
            temporary_token: Some(token),
            temporary_token_secret: Some(secret.into()),
        }
    }
}
