//! HTTP Transport
//!
//! Sends one [`RequestDescriptor`] and normalizes the reply into a
//! [`ResponseEnvelope`].

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::core::request::{HttpMethod, RequestDescriptor, CONTENT_LENGTH};
use crate::error::{GabError, GabResult, NetworkError, ProtocolError};
use crate::telemetry::redact_url;
use crate::types::ResponseEnvelope;

/// Raw HTTP response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Status text.
    pub status_text: String,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
    /// Response body decoded as UTF-8.
    pub body: String,
}

impl HttpResponse {
    /// Create a response with a canonical status text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string();

        Self {
            status,
            status_text,
            headers: HashMap::new(),
            body: body.into(),
        }
    }
}

/// HTTP transport interface (for dependency injection).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one request and read the whole response body.
    async fn send(&self, request: &RequestDescriptor) -> GabResult<HttpResponse>;
}

/// Send a request and normalize the reply.
///
/// HTTP-level failures (4xx/5xx) resolve with `success == false`; only connection
/// failures and unparseable bodies are errors.
pub async fn dispatch<T: HttpTransport + ?Sized>(
    transport: &T,
    request: &RequestDescriptor,
) -> GabResult<ResponseEnvelope> {
    debug!(
        method = %request.method,
        url = %redact_url(&request.url()),
        "sending Gab API request"
    );

    let response = transport.send(request).await?;
    let envelope = normalize_response(response)?;

    debug!(
        status = envelope.code,
        success = envelope.success,
        "received Gab API response"
    );
    Ok(envelope)
}

const NO_CONTENT: u16 = 204;

/// Turn a raw response into a [`ResponseEnvelope`].
pub fn normalize_response(response: HttpResponse) -> GabResult<ResponseEnvelope> {
    let text = response.body.trim_start();

    if is_html_document(text) {
        warn!(
            status = response.status,
            "Gab returned an HTML page instead of JSON; request parameters are missing or incorrect"
        );
        return Err(ProtocolError::HtmlErrorPage {
            status: response.status,
        }
        .into());
    }

    // 204 carries no body by definition; any other empty body fails to parse.
    let data = if response.status == NO_CONTENT && text.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(text).map_err(|e| ProtocolError::InvalidJson {
            status: response.status,
            message: e.to_string(),
        })?
    };

    Ok(ResponseEnvelope::new(
        response.status,
        response.status_text,
        data,
    ))
}

fn is_html_document(text: &str) -> bool {
    const DOCTYPE: &str = "<!doctype html";
    text.get(..DOCTYPE.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(DOCTYPE))
        .unwrap_or(false)
}

/// Default reqwest-based HTTP transport.
#[derive(Clone)]
pub struct ReqwestHttpTransport {
    client: reqwest::Client,
}

impl ReqwestHttpTransport {
    /// Create a transport with no timeout and no redirect following.
    pub fn new() -> GabResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| NetworkError::RequestFailed {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Wrap a caller-configured client, e.g. one with its own socket timeout.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> GabResult<HttpResponse> {
        let url = request.url();
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &request.headers {
            // reqwest derives Content-Length from the body itself.
            if key.eq_ignore_ascii_case(CONTENT_LENGTH) {
                continue;
            }
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string().to_lowercase(), v.to_string());
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NetworkError::BodyRead {
                message: e.to_string(),
            })?;

        Ok(HttpResponse {
            status,
            status_text,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> GabError {
    let message = e.to_string();
    let error = if e.is_timeout() {
        NetworkError::Timeout { message }
    } else if e.is_connect() {
        NetworkError::ConnectionFailed { message }
    } else {
        NetworkError::RequestFailed { message }
    };
    GabError::Network(error)
}

/// Mock HTTP transport for testing.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    request_history: Mutex<Vec<RequestDescriptor>>,
    default_response: Mutex<Option<HttpResponse>>,
}

impl MockHttpTransport {
    /// Create new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response; responses are returned in the order queued.
    pub fn queue_response(&self, response: HttpResponse) -> &Self {
        lock(&self.responses).push_back(response);
        self
    }

    /// Queue a JSON response.
    pub fn queue_json_response<T: serde::Serialize>(&self, status: u16, body: &T) -> &Self {
        let body = serde_json::to_string(body).unwrap_or_default();
        let mut response = HttpResponse::new(status, body);
        response
            .headers
            .insert("content-type".to_string(), "application/json".to_string());
        self.queue_response(response)
    }

    /// Set default response when queue is empty.
    pub fn set_default_response(&self, response: HttpResponse) -> &Self {
        *lock(&self.default_response) = Some(response);
        self
    }

    /// Get request history.
    pub fn get_requests(&self) -> Vec<RequestDescriptor> {
        lock(&self.request_history).clone()
    }

    /// Get last request.
    pub fn get_last_request(&self) -> Option<RequestDescriptor> {
        lock(&self.request_history).last().cloned()
    }

    /// Clear request history.
    pub fn clear_history(&self) {
        lock(&self.request_history).clear();
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> GabResult<HttpResponse> {
        lock(&self.request_history).push(request.clone());

        let response = lock(&self.responses)
            .pop_front()
            .or_else(|| lock(&self.default_response).clone());

        response.ok_or_else(|| {
            GabError::Network(NetworkError::ConnectionFailed {
                message: "No mock response available".to_string(),
            })
        })
    }
}

// A poisoned lock only means another test thread panicked mid-update.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
