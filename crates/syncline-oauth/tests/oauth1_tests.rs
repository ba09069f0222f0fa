// OAuth 1.0a handshake against a fake provider that actually verifies
// HMAC-SHA1 signatures with its own independent implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use syncline_core::{SynclineError, TransportError};
use syncline_oauth::engine::{OAuth1CompleteParams, OAuth1StartParams, OAuthEngine};
use syncline_oauth::providers::registry::TRELLO;
use syncline_oauth::{HttpRequest, HttpResponse, HttpTransport, OAuthSession};

const CONSUMER_KEY: &str = "consumer-key-1";
const CONSUMER_SECRET: &str = "consumer-secret-1";
const REDIRECT_URL: &str = "https://app.example.com/oauth/callback";

const TEMP_TOKEN: &str = "temp-token";
const TEMP_SECRET: &str = "temp-secret";
const FINAL_TOKEN: &str = "final-token";
const FINAL_SECRET: &str = "final-secret";

/// Fake OAuth 1.0a provider. Recomputes every signature with the
/// secrets it issued and answers 401 on any mismatch.
struct FakeOAuth1Provider {
    consumer_secret: String,
    confirm_callback: bool,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeOAuth1Provider {
    fn new() -> Self {
        Self {
            consumer_secret: CONSUMER_SECRET.to_string(),
            confirm_callback: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn verify(&self, request: &HttpRequest, token_secret: &str) -> bool {
        let auth = request
            .headers
            .iter()
            .find(|(k, _)| k == "Authorization")
            .map(|(_, v)| v.as_str());
        let Some(auth) = auth else { return false };
        let mut params = parse_auth_header(auth);
        let Some(pos) = params.iter().position(|(k, _)| k == "oauth_signature") else {
            return false;
        };
        let (_, signature) = params.remove(pos);
        signature == expected_signature(&request.url, &params, &self.consumer_secret, token_secret)
    }
}

#[async_trait]
impl HttpTransport for FakeOAuth1Provider {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        if request.url == TRELLO.request_token_endpoint {
            if !self.verify(&request, "") {
                return Ok(HttpResponse {
                    status: 401,
                    body: "invalid signature".to_string(),
                });
            }
            let confirmed = if self.confirm_callback {
                "&oauth_callback_confirmed=true"
            } else {
                ""
            };
            return Ok(HttpResponse {
                status: 200,
                body: format!(
                    "oauth_token={TEMP_TOKEN}&oauth_token_secret={TEMP_SECRET}{confirmed}"
                ),
            });
        }

        if request.url == TRELLO.access_token_endpoint {
            let auth_params = request
                .headers
                .iter()
                .find(|(k, _)| k == "Authorization")
                .map(|(_, v)| parse_auth_header(v))
                .unwrap_or_default();
            let sent_token = auth_params
                .iter()
                .find(|(k, _)| k == "oauth_token")
                .map(|(_, v)| v.as_str());
            let has_verifier = auth_params.iter().any(|(k, _)| k == "oauth_verifier");
            if sent_token != Some(TEMP_TOKEN) || !has_verifier || !self.verify(&request, TEMP_SECRET)
            {
                return Ok(HttpResponse {
                    status: 401,
                    body: "invalid signature".to_string(),
                });
            }
            return Ok(HttpResponse {
                status: 200,
                body: format!("oauth_token={FINAL_TOKEN}&oauth_token_secret={FINAL_SECRET}"),
            });
        }

        Ok(HttpResponse {
            status: 404,
            body: "unknown endpoint".to_string(),
        })
    }
}

fn parse_auth_header(header: &str) -> Vec<(String, String)> {
    header
        .strip_prefix("OAuth ")
        .unwrap_or_default()
        .split(", ")
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            let v = v.trim_matches('"');
            Some((
                urlencoding::decode(k).ok()?.into_owned(),
                urlencoding::decode(v).ok()?.into_owned(),
            ))
        })
        .collect()
}

fn expected_signature(
    url: &str,
    params: &[(String, String)],
    consumer_secret: &str,
    token_secret: &str,
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| {
            (
                urlencoding::encode(k).into_owned(),
                urlencoding::encode(v).into_owned(),
            )
        })
        .collect();
    encoded.sort();
    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let base = format!(
        "POST&{}&{}",
        urlencoding::encode(url),
        urlencoding::encode(&normalized)
    );
    let key = format!(
        "{}&{}",
        urlencoding::encode(consumer_secret),
        urlencoding::encode(token_secret)
    );
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes()).unwrap();
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_trello_handshake_round_trip() {
    let provider = Arc::new(FakeOAuth1Provider::new());
    let engine = OAuthEngine::with_transport(provider.clone());

    let redirect = engine
        .start_oauth1_flow(OAuth1StartParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            redirect_url: REDIRECT_URL,
        })
        .await
        .unwrap();

    assert!(redirect.url.starts_with(&format!(
        "{}?oauth_token={TEMP_TOKEN}",
        TRELLO.authorize_endpoint
    )));
    assert!(redirect.url.contains("expiration=never"));
    assert!(redirect.url.contains("scope=read%2Cwrite"));
    assert_eq!(redirect.session.temporary_token.as_deref(), Some(TEMP_TOKEN));
    assert_eq!(
        redirect.session.temporary_token_secret.as_deref(),
        Some(TEMP_SECRET)
    );
    assert_eq!(redirect.session.state, TEMP_TOKEN);

    let callback = query(&[("oauth_token", TEMP_TOKEN), ("oauth_verifier", "verifier-1")]);
    let outcome = engine
        .complete_oauth1_flow(OAuth1CompleteParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            session: &redirect.session,
            query: &callback,
        })
        .await
        .unwrap();

    let credentials = outcome.credentials().unwrap();
    assert_eq!(credentials.get("access_token"), Some(FINAL_TOKEN));
    assert_eq!(credentials.get("token_secret"), Some(FINAL_SECRET));
    assert_eq!(provider.request_count(), 2);
}

#[tokio::test]
async fn test_tampered_session_secret_fails_signature() {
    let provider = Arc::new(FakeOAuth1Provider::new());
    let engine = OAuthEngine::with_transport(provider.clone());

    let redirect = engine
        .start_oauth1_flow(OAuth1StartParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            redirect_url: REDIRECT_URL,
        })
        .await
        .unwrap();

    // Second leg signed with the wrong temporary secret must be
    // rejected by the provider, not silently accepted.
    let mut session = redirect.session.clone();
    session.temporary_token_secret = Some("wrong-secret".to_string());

    let callback = query(&[("oauth_token", TEMP_TOKEN), ("oauth_verifier", "verifier-1")]);
    let err = engine
        .complete_oauth1_flow(OAuth1CompleteParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            session: &session,
            query: &callback,
        })
        .await
        .unwrap_err();
    match err {
        SynclineError::Transport(e) => assert!(e.message.contains("HTTP 401")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_consumer_secret_rejected_at_first_leg() {
    let provider = Arc::new(FakeOAuth1Provider::new());
    let engine = OAuthEngine::with_transport(provider.clone());

    let err = engine
        .start_oauth1_flow(OAuth1StartParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: "not-the-consumer-secret",
            redirect_url: REDIRECT_URL,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SynclineError::Transport(_)));
}

#[tokio::test]
async fn test_callback_token_mismatch_is_invalid_state() {
    let provider = Arc::new(FakeOAuth1Provider::new());
    let engine = OAuthEngine::with_transport(provider.clone());
    let session = OAuthSession::for_temporary_credentials(TEMP_TOKEN, TEMP_SECRET);

    let callback = query(&[("oauth_token", "some-other-token"), ("oauth_verifier", "v")]);
    let err = engine
        .complete_oauth1_flow(OAuth1CompleteParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            session: &session,
            query: &callback,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SynclineError::InvalidState(_)));
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_missing_verifier_is_missing_parameter() {
    let provider = Arc::new(FakeOAuth1Provider::new());
    let engine = OAuthEngine::with_transport(provider.clone());
    let session = OAuthSession::for_temporary_credentials(TEMP_TOKEN, TEMP_SECRET);

    let callback = query(&[("oauth_token", TEMP_TOKEN)]);
    let err = engine
        .complete_oauth1_flow(OAuth1CompleteParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            session: &session,
            query: &callback,
        })
        .await
        .unwrap_err();
    assert!(
        matches!(err, SynclineError::MissingCallbackParameter(p) if p == "oauth_verifier")
    );
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_unconfirmed_callback_is_rejected() {
    let mut provider = FakeOAuth1Provider::new();
    provider.confirm_callback = false;
    let provider = Arc::new(provider);
    let engine = OAuthEngine::with_transport(provider.clone());

    let err = engine
        .start_oauth1_flow(OAuth1StartParams {
            spec: &TRELLO,
            consumer_key: CONSUMER_KEY,
            consumer_secret: CONSUMER_SECRET,
            redirect_url: REDIRECT_URL,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SynclineError::Response(_)));
}
