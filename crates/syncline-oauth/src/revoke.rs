// Token revocation, for the rows that declare an endpoint for it.

use syncline_core::{Result, SynclineError, TransportError};

use crate::exchange::{base_headers, basic_auth_header, encode_body};
use crate::provider::ProviderOAuthSpec;
use crate::template::resolve_template;
use crate::transport::{body_snippet, HttpRequest, HttpTransport};

/// Inputs for token revocation.
pub struct RevokeTokenParams<'a> {
    pub spec: &'a ProviderOAuthSpec,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub refresh_token: &'a str,
    pub input_config: &'a serde_json::Value,
}

/// Resolve the row's revocation endpoint, failing when it declares none.
pub(crate) fn revocation_endpoint(
    spec: &ProviderOAuthSpec,
    config: &serde_json::Value,
) -> Result<String> {
    let template = spec.revocation_endpoint.ok_or_else(|| {
        SynclineError::Configuration(format!(
            "provider '{}' does not define a revocation endpoint",
            spec.id
        ))
    })?;
    resolve_template(template, config)
}

/// Revoke a refresh token: POST `token=<refresh_token>` with Basic-auth
/// credentials, encoded per the row's token-request content type. A
/// non-2xx answer surfaces as a Transport error for the caller to log
/// or retry.
pub async fn revoke_token(
    transport: &dyn HttpTransport,
    params: RevokeTokenParams<'_>,
) -> Result<()> {
    let spec = params.spec;
    let endpoint = revocation_endpoint(spec, params.input_config)?;

    let fields = vec![("token".to_string(), params.refresh_token.to_string())];
    let mut headers = base_headers(spec.token_content_type);
    headers.push(basic_auth_header(params.client_id, params.client_secret));

    let request = HttpRequest {
        url: endpoint.clone(),
        headers,
        body: Some(encode_body(spec.token_content_type, &fields)),
    };

    tracing::debug!(provider = %spec.id, endpoint = %endpoint, "revoking refresh token");
    let response = transport.send(request).await?;
    if !response.is_success() {
        tracing::warn!(provider = %spec.id, status = response.status, "revocation rejected");
        return Err(TransportError::new(
            &endpoint,
            format!("HTTP {}: {}", response.status, body_snippet(&response.body)),
        )
        .into());
    }
    Ok(())
}
