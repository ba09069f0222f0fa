// Refresh grant: trade a stored refresh token for a fresh access token.

use syncline_core::{Clock, Result, SynclineError};

use crate::exchange::{base_headers, basic_auth_header, encode_body, parse_token_response};
use crate::output::{append_expiry, lookup_path, CredentialResult};
use crate::provider::{CredentialInjection, ProviderOAuthSpec};
use crate::template::resolve_template;
use crate::transport::{HttpRequest, HttpTransport};

/// Inputs for the refresh-token grant.
pub struct RefreshTokenParams<'a> {
    pub spec: &'a ProviderOAuthSpec,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub refresh_token: &'a str,
    pub input_config: &'a serde_json::Value,
}

/// Run the refresh grant against the row's token endpoint.
///
/// The response must carry `access_token`. A rotated `refresh_token`
/// and a computed `token_expiry_date` are included when present, so
/// callers can persist the result as-is.
pub async fn refresh_access_token(
    transport: &dyn HttpTransport,
    clock: &dyn Clock,
    params: RefreshTokenParams<'_>,
) -> Result<CredentialResult> {
    let spec = params.spec;
    let endpoint = resolve_template(spec.token_endpoint, params.input_config)?;

    let mut fields: Vec<(String, String)> = vec![
        ("grant_type".into(), "refresh_token".into()),
        ("refresh_token".into(), params.refresh_token.into()),
    ];
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

    let request = HttpRequest {
        url: endpoint.clone(),
        headers,
        body: Some(encode_body(spec.token_content_type, &fields)),
    };

    tracing::debug!(provider = %spec.id, endpoint = %endpoint, "refreshing access token");
    let response = transport.send(request).await?;
    let parsed = parse_token_response(endpoint, response)?;

    let mut result = CredentialResult::default();
    match lookup_path(&parsed.json, "access_token") {
        Some(token) => result.insert("access_token", token),
        None => {
            return Err(SynclineError::MissingTokenField {
                field: "access_token".to_string(),
                endpoint: parsed.endpoint,
            })
        }
    }
    if let Some(rotated) = lookup_path(&parsed.json, "refresh_token") {
        result.insert("refresh_token", rotated);
    }
    let expires_path = spec.expires_in_path.unwrap_or("expires_in");
    append_expiry(
        &mut result,
        &parsed.json,
        expires_path,
        &parsed.endpoint,
        clock,
    )?;

    Ok(result)
}
