#![allow(dead_code)]

// In-memory transport double: answers with queued responses and records
// every request for assertion. No test in this crate opens a socket.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use syncline_core::TransportError;
use syncline_oauth::{HttpRequest, HttpResponse, HttpTransport};

pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Transport pre-loaded with a single canned response.
    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        let transport = Self::new();
        transport.push_response(status, body);
        transport
    }

    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.into(),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::new(&request.url, "no canned response left"))
    }
}

/// First header with the given name, if any.
pub fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}
