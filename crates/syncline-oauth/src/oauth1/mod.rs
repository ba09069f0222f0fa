// OAuth 1.0a three-legged flow (RFC 5849): temporary credentials,
// resource-owner authorization, then token credentials. Every request
// is HMAC-SHA1 signed; responses are form-encoded rather than JSON.

use std::collections::HashMap;

use syncline_core::{generate_random_string, Clock, Result, SynclineError, TransportError};

use crate::output::CredentialResult;
use crate::session::OAuthSession;
use crate::transport::{body_snippet, HttpRequest, HttpTransport};

mod signature;

use signature::{authorization_header, sign};

/// Declarative description of one provider's OAuth 1.0a endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OAuth1Spec {
    pub id: &'static str,
    pub name: &'static str,
    /// Step 1: POST here for temporary credentials.
    pub request_token_endpoint: &'static str,
    /// Step 2: the user authorizes here.
    pub authorize_endpoint: &'static str,
    /// Step 3: POST here to trade the verifier for token credentials.
    pub access_token_endpoint: &'static str,
    /// Extra query parameters appended to the authorize URL.
    pub extra_authorize_params: &'static [(&'static str, &'static str)],
}

const NONCE_LENGTH: usize = 32;

/// Protocol parameters common to both signed requests.
fn protocol_params(consumer_key: &str, clock: &dyn Clock) -> Vec<(String, String)> {
    vec![
        ("oauth_consumer_key".into(), consumer_key.into()),
        ("oauth_nonce".into(), generate_random_string(NONCE_LENGTH)),
        ("oauth_signature_method".into(), "HMAC-SHA1".into()),
        ("oauth_timestamp".into(), clock.now().timestamp().to_string()),
        ("oauth_version".into(), "1.0".into()),
    ]
}

/// Parse an `application/x-www-form-urlencoded` response body.
fn parse_form_body(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

fn signed_post(endpoint: &str, params: &[(String, String)]) -> HttpRequest {
    HttpRequest {
        url: endpoint.to_string(),
        headers: vec![("Authorization".into(), authorization_header(params))],
        body: None,
    }
}

async fn send_signed(
    transport: &dyn HttpTransport,
    endpoint: &str,
    params: &[(String, String)],
) -> Result<HashMap<String, String>> {
    let response = transport.send(signed_post(endpoint, params)).await?;
    if !response.is_success() {
        return Err(TransportError::new(
            endpoint,
            format!("HTTP {}: {}", response.status, body_snippet(&response.body)),
        )
        .into());
    }
    Ok(parse_form_body(&response.body))
}

/// Steps 1 and 2: obtain temporary credentials, then build the URL the
/// user authorizes at. The returned session carries the temporary
/// token and secret needed to finish the flow.
pub(crate) async fn request_temporary_credentials(
    transport: &dyn HttpTransport,
    clock: &dyn Clock,
    spec: &OAuth1Spec,
    consumer_key: &str,
    consumer_secret: &str,
    redirect_url: &str,
) -> Result<(String, OAuthSession)> {
    let mut params = protocol_params(consumer_key, clock);
    params.push(("oauth_callback".into(), redirect_url.into()));
    let sig = sign(
        "POST",
        spec.request_token_endpoint,
        &params,
        consumer_secret,
        "",
    )?;
    params.push(("oauth_signature".into(), sig));

    tracing::debug!(provider = %spec.id, "requesting temporary credentials");
    let form = send_signed(transport, spec.request_token_endpoint, &params).await?;

    let token = form.get("oauth_token").ok_or_else(|| {
        SynclineError::Response("temporary credential response lacks oauth_token".into())
    })?;
    let secret = form.get("oauth_token_secret").ok_or_else(|| {
        SynclineError::Response("temporary credential response lacks oauth_token_secret".into())
    })?;
    if form.get("oauth_callback_confirmed").map(String::as_str) != Some("true") {
        return Err(SynclineError::Response(
            "provider did not confirm the oauth_callback".into(),
        ));
    }

    let mut authorize_url = format!(
        "{}?oauth_token={}",
        spec.authorize_endpoint,
        urlencoding::encode(token)
    );
    for (key, value) in spec.extra_authorize_params {
        authorize_url.push('&');
        authorize_url.push_str(key);
        authorize_url.push('=');
        authorize_url.push_str(&urlencoding::encode(value));
    }

    let session = OAuthSession::for_temporary_credentials(token.as_str(), secret.as_str());
    Ok((authorize_url, session))
}

/// Step 3: validate the callback against the session and trade the
/// verifier for token credentials, signed with the temporary secret.
pub(crate) async fn exchange_verifier(
    transport: &dyn HttpTransport,
    clock: &dyn Clock,
    spec: &OAuth1Spec,
    consumer_key: &str,
    consumer_secret: &str,
    session: &OAuthSession,
    query: &HashMap<String, String>,
) -> Result<CredentialResult> {
    let temporary_token = session.temporary_token.as_deref().ok_or_else(|| {
        SynclineError::Configuration("session carries no temporary credentials".into())
    })?;
    let temporary_secret = session.temporary_token_secret.as_deref().ok_or_else(|| {
        SynclineError::Configuration("session carries no temporary credential secret".into())
    })?;

    match query.get("oauth_token").map(String::as_str) {
        Some(token) if token == temporary_token => {}
        Some(_) => {
            return Err(SynclineError::InvalidState(
                "oauth_token in the redirect does not match this authorization attempt".into(),
            ))
        }
        None => {
            return Err(SynclineError::MissingCallbackParameter(
                "oauth_token".to_string(),
            ))
        }
    }
    let verifier = query.get("oauth_verifier").ok_or_else(|| {
        SynclineError::MissingCallbackParameter("oauth_verifier".to_string())
    })?;

    let mut params = protocol_params(consumer_key, clock);
    params.push(("oauth_token".into(), temporary_token.into()));
    params.push(("oauth_verifier".into(), verifier.clone()));
    let sig = sign(
        "POST",
        spec.access_token_endpoint,
        &params,
        consumer_secret,
        temporary_secret,
    )?;
    params.push(("oauth_signature".into(), sig));

    tracing::debug!(provider = %spec.id, "exchanging verifier for token credentials");
    let form = send_signed(transport, spec.access_token_endpoint, &params).await?;

    let token = form.get("oauth_token").ok_or_else(|| {
        SynclineError::Response("token credential response lacks oauth_token".into())
    })?;
    let secret = form.get("oauth_token_secret").ok_or_else(|| {
        SynclineError::Response("token credential response lacks oauth_token_secret".into())
    })?;

    let mut result = CredentialResult::default();
    result.insert("access_token", token.as_str());
    result.insert("token_secret", secret.as_str());
    Ok(result)
}
