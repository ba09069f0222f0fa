// Engine facade: runs any provider's flow from its static row, with
// the HTTP transport and clock injected at construction.

use std::collections::HashMap;
use std::sync::Arc;

use syncline_core::{Clock, Result, SystemClock};

use crate::callback;
use crate::consent_url::{build_consent_url, ConsentUrlParams};
use crate::exchange::{exchange_authorization_code, TokenExchangeParams};
use crate::oauth1::{exchange_verifier, request_temporary_credentials, OAuth1Spec};
use crate::output::{extract_output, CredentialResult};
use crate::provider::ProviderOAuthSpec;
use crate::refresh::{refresh_access_token, RefreshTokenParams};
use crate::revoke::{revoke_token, RevokeTokenParams};
use crate::session::OAuthSession;
use crate::transport::{HttpTransport, ReqwestTransport};

/// How a completed callback ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The exchange succeeded; credentials are ready to persist.
    Success(CredentialResult),
    /// The provider answered with an error code the row declares
    /// benign, typically because the user declined consent. The flow
    /// ends without credentials, but this is not a failure.
    IgnorableProviderError {
        code: String,
        description: Option<String>,
    },
}

impl FlowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FlowOutcome::Success(_))
    }

    /// The credentials, when the flow produced any.
    pub fn credentials(&self) -> Option<&CredentialResult> {
        match self {
            FlowOutcome::Success(result) => Some(result),
            FlowOutcome::IgnorableProviderError { .. } => None,
        }
    }
}

/// Where to send the user, plus the session to persist (keyed by its
/// state) until the provider redirects back.
#[derive(Debug, Clone)]
pub struct ConsentRedirect {
    pub url: String,
    pub session: OAuthSession,
}

/// Inputs for starting an OAuth 2.0 flow.
pub struct StartFlowParams<'a> {
    pub spec: &'a ProviderOAuthSpec,
    pub client_id: &'a str,
    pub redirect_url: &'a str,
    pub input_config: &'a serde_json::Value,
}

/// Inputs for completing an OAuth 2.0 flow from the provider redirect.
pub struct CompleteFlowParams<'a> {
    pub spec: &'a ProviderOAuthSpec,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_url: &'a str,
    pub input_config: &'a serde_json::Value,
    pub session: &'a OAuthSession,
    pub query: &'a HashMap<String, String>,
}

/// Inputs for starting an OAuth 1.0a flow.
pub struct OAuth1StartParams<'a> {
    pub spec: &'a OAuth1Spec,
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub redirect_url: &'a str,
}

/// Inputs for completing an OAuth 1.0a flow.
pub struct OAuth1CompleteParams<'a> {
    pub spec: &'a OAuth1Spec,
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub session: &'a OAuthSession,
    pub query: &'a HashMap<String, String>,
}

/// The delegated-authorization engine. One instance serves every
/// registered provider; rows carry all per-provider behavior.
pub struct OAuthEngine {
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
}

impl OAuthEngine {
    /// Engine with the production transport and wall clock.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Engine over a custom transport; tests pass an in-memory one.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock, usually with a fixed instant under test.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start an OAuth 2.0 flow: mint a session and build the consent
    /// URL to redirect the user to. No network traffic happens here.
    pub fn start_flow(&self, params: StartFlowParams<'_>) -> Result<ConsentRedirect> {
        let session = OAuthSession::for_spec(params.spec);
        let url = build_consent_url(ConsentUrlParams {
            spec: params.spec,
            client_id: params.client_id,
            redirect_url: params.redirect_url,
            input_config: params.input_config,
            session: &session,
        })?;
        tracing::debug!(provider = %params.spec.id, "consent redirect prepared");
        Ok(ConsentRedirect { url, session })
    }

    /// Complete an OAuth 2.0 flow from the provider redirect: detect
    /// ignorable errors, validate state, exchange the code, and extract
    /// the row's declared outputs.
    pub async fn complete_flow(&self, params: CompleteFlowParams<'_>) -> Result<FlowOutcome> {
        let CompleteFlowParams {
            spec,
            client_id,
            client_secret,
            redirect_url,
            input_config,
            session,
            query,
        } = params;

        if let Some((code, description)) = callback::ignorable_error(spec, query) {
            tracing::info!(
                provider = %spec.id,
                error = %code,
                "flow ended by an ignorable provider error"
            );
            return Ok(FlowOutcome::IgnorableProviderError { code, description });
        }

        callback::validate_state(session, query)?;
        let code = callback::extract_code(spec, query)?;

        let response = exchange_authorization_code(
            self.transport.as_ref(),
            TokenExchangeParams {
                spec,
                client_id,
                client_secret,
                code,
                redirect_url,
                input_config,
                session,
            },
        )
        .await?;

        let mut credentials = extract_output(spec, &response, self.clock.as_ref())?;
        for param in spec.callback_output_params {
            if let Some(value) = query.get(*param) {
                credentials.insert(*param, value.as_str());
            }
        }

        tracing::info!(
            provider = %spec.id,
            fields = credentials.len(),
            "authorization flow completed"
        );
        Ok(FlowOutcome::Success(credentials))
    }

    /// Run the refresh grant for a stored refresh token.
    pub async fn refresh_token(&self, params: RefreshTokenParams<'_>) -> Result<CredentialResult> {
        refresh_access_token(self.transport.as_ref(), self.clock.as_ref(), params).await
    }

    /// Revoke a refresh token, for rows that declare an endpoint.
    pub async fn revoke_token(&self, params: RevokeTokenParams<'_>) -> Result<()> {
        revoke_token(self.transport.as_ref(), params).await
    }

    /// Start an OAuth 1.0a flow: obtain temporary credentials and build
    /// the authorize URL. Unlike the 2.0 variant this already talks to
    /// the provider.
    pub async fn start_oauth1_flow(
        &self,
        params: OAuth1StartParams<'_>,
    ) -> Result<ConsentRedirect> {
        let (url, session) = request_temporary_credentials(
            self.transport.as_ref(),
            self.clock.as_ref(),
            params.spec,
            params.consumer_key,
            params.consumer_secret,
            params.redirect_url,
        )
        .await?;
        Ok(ConsentRedirect { url, session })
    }

    /// Complete an OAuth 1.0a flow from the provider redirect.
    pub async fn complete_oauth1_flow(
        &self,
        params: OAuth1CompleteParams<'_>,
    ) -> Result<FlowOutcome> {
        let credentials = exchange_verifier(
            self.transport.as_ref(),
            self.clock.as_ref(),
            params.spec,
            params.consumer_key,
            params.consumer_secret,
            params.session,
            params.query,
        )
        .await?;
        tracing::info!(provider = %params.spec.id, "authorization flow completed");
        Ok(FlowOutcome::Success(credentials))
    }
}

impl Default for OAuthEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let mut result = CredentialResult::default();
        result.insert("access_token", "at");
        let success = FlowOutcome::Success(result);
        assert!(success.is_success());
        assert_eq!(
            success.credentials().and_then(|c| c.get("access_token")),
            Some("at")
        );

        let declined = FlowOutcome::IgnorableProviderError {
            code: "access_denied".to_string(),
            description: None,
        };
        assert!(!declined.is_success());
        assert!(declined.credentials().is_none());
    }
}
