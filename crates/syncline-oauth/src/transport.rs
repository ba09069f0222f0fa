// HTTP transport seam. Every outbound call the engine makes goes
// through this trait, so tests swap in an in-memory double and never
// open a socket.

use async_trait::async_trait;
use syncline_core::TransportError;

/// One outbound POST, fully encoded. Every call the engine makes is a
/// POST; bodies are already serialized and headers already assembled by
/// the time a request reaches a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
///
/// Connection pooling, TLS and timeouts live on the underlying client;
/// callers that need custom timeouts pass their own via
/// [`ReqwestTransport::with_client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.post(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(&request.url, e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(&request.url, e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Truncate a response body for error messages and logs.
pub(crate) fn body_snippet(body: &str) -> String {
    const MAX: usize = 256;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(MAX).collect();
        format!("{truncated}...(truncated)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_bounds() {
        assert!(HttpResponse { status: 200, body: String::new() }.is_success());
        assert!(HttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 199, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 403, body: String::new() }.is_success());
    }

    #[test]
    fn test_body_snippet_truncates() {
        let long = "x".repeat(1000);
        let snippet = body_snippet(&long);
        assert!(snippet.chars().count() < 300);
        assert!(snippet.ends_with("(truncated)"));
        assert_eq!(body_snippet("short"), "short");
    }
}
