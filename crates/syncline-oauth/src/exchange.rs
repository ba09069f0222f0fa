// Authorization-code exchange: build the token request exactly as the
// row dictates, send it, and parse the JSON that comes back.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use syncline_core::{Result, SynclineError, TransportError};

use crate::provider::{CredentialInjection, ProviderOAuthSpec, TokenRequestContentType};
use crate::session::OAuthSession;
use crate::template::resolve_template;
use crate::transport::{body_snippet, HttpRequest, HttpResponse, HttpTransport};

/// Inputs for the code-for-token exchange.
pub struct TokenExchangeParams<'a> {
    pub spec: &'a ProviderOAuthSpec,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_url: &'a str,
    pub input_config: &'a serde_json::Value,
    pub session: &'a OAuthSession,
}

/// A parsed token response, tagged with the endpoint that produced it
/// so extraction errors can name their source.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub endpoint: String,
    pub json: Value,
}

/// Exchange an authorization code for the provider's token payload.
pub async fn exchange_authorization_code(
    transport: &dyn HttpTransport,
    params: TokenExchangeParams<'_>,
) -> Result<ProviderResponse> {
    let endpoint = resolve_template(params.spec.token_endpoint, params.input_config)?;
    let request = build_token_request(&endpoint, &params)?;

    tracing::debug!(
        provider = %params.spec.id,
        endpoint = %endpoint,
        "exchanging authorization code"
    );
    let response = transport.send(request).await?;
    parse_token_response(endpoint, response)
}

/// Assemble the token request for a row: grant fields first, then the
/// PKCE verifier, then credentials wherever the row injects them.
pub(crate) fn build_token_request(
    endpoint: &str,
    params: &TokenExchangeParams<'_>,
) -> Result<HttpRequest> {
    let spec = params.spec;

    let mut fields: Vec<(String, String)> = vec![
        ("grant_type".into(), "authorization_code".into()),
        (spec.token_code_key.into(), params.code.into()),
        ("redirect_uri".into(), params.redirect_url.into()),
    ];

    if spec.requires_pkce {
        let verifier = params.session.code_verifier.as_deref().ok_or_else(|| {
            SynclineError::Configuration(format!(
                "provider '{}' requires PKCE but the session has no code verifier",
                spec.id
            ))
        })?;
        fields.push(("code_verifier".into(), verifier.into()));
    }

    let mut headers = base_headers(spec.token_content_type);
    match spec.credential_injection {
        CredentialInjection::Body => {
            fields.push((spec.client_id_key.into(), params.client_id.into()));
            fields.push((spec.client_secret_key.into(), params.client_secret.into()));
        }
        CredentialInjection::BasicAuthHeader => {
            headers.push(basic_auth_header(params.client_id, params.client_secret));
        }
    }

    Ok(HttpRequest {
        url: endpoint.to_string(),
        headers,
        body: Some(encode_body(spec.token_content_type, &fields)),
    })
}

pub(crate) fn base_headers(content_type: TokenRequestContentType) -> Vec<(String, String)> {
    vec![
        ("Content-Type".into(), content_type.header_value().into()),
        ("Accept".into(), "application/json".into()),
    ]
}

pub(crate) fn basic_auth_header(client_id: &str, client_secret: &str) -> (String, String) {
    let credentials = format!("{client_id}:{client_secret}");
    let encoded = STANDARD.encode(credentials.as_bytes());
    ("Authorization".into(), format!("Basic {encoded}"))
}

pub(crate) fn encode_body(
    content_type: TokenRequestContentType,
    fields: &[(String, String)],
) -> String {
    match content_type {
        TokenRequestContentType::UrlEncoded => fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&"),
        TokenRequestContentType::Json => {
            let map: serde_json::Map<String, Value> = fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            Value::Object(map).to_string()
        }
    }
}

/// Reject non-2xx statuses and parse the body as JSON.
pub(crate) fn parse_token_response(
    endpoint: String,
    response: HttpResponse,
) -> Result<ProviderResponse> {
    if !response.is_success() {
        return Err(TransportError::new(
            &endpoint,
            format!("HTTP {}: {}", response.status, body_snippet(&response.body)),
        )
        .into());
    }
    let json: Value = serde_json::from_str(&response.body).map_err(|e| {
        SynclineError::Response(format!(
            "token response from {endpoint} is not valid JSON: {e}"
        ))
    })?;
    Ok(ProviderResponse { endpoint, json })
}
