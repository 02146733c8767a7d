//! HTTP access log
//!
//! One `HTTP_REQUEST` event per request with method, url, status, response
//! length, response time and the request body as sent.

use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body, Bytes, HttpBody};
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::logger::Logger;

/// Largest request body the access log will buffer
pub const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// One completed request
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLogEntry {
    pub method: String,
    pub url: String,
    pub status: u16,
    pub content_length: Option<String>,
    pub elapsed: Duration,
    pub body: String,
}

impl AccessLogEntry {
    /// Response time in milliseconds, three decimals
    pub fn response_time_ms(&self) -> String {
        format!("{:.3}", self.elapsed.as_secs_f64() * 1000.0)
    }

    pub fn log(&self) {
        let status = self.status.to_string();
        let response_time = self.response_time_ms();
        Logger::info(
            "HTTP_REQUEST",
            &[
                ("method", self.method.as_str()),
                ("url", self.url.as_str()),
                ("status", status.as_str()),
                ("content_length", self.content_length.as_deref().unwrap_or("-")),
                ("response_time_ms", response_time.as_str()),
                ("body", self.body.as_str()),
            ],
        );
    }
}

/// Compact JSON rendering of a request body; anything else logs as `{}`
pub fn body_summary(bytes: &Bytes) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| "{}".to_string())
}

/// Response length as sent: the header when a handler set one, otherwise
/// the exact size of a fully buffered body
pub fn response_length(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            HttpBody::size_hint(response.body())
                .exact()
                .map(|n| n.to_string())
        })
}

/// Run the request through `next` and describe the exchange
///
/// A body larger than [`MAX_LOGGED_BODY`] is answered with 413 without
/// reaching the router.
pub async fn record(req: Request, next: Next) -> (AccessLogEntry, Response) {
    let started = Instant::now();
    let method = req.method().to_string();
    let url = req.uri().to_string();

    let (parts, body) = req.into_parts();
    let (body, response) = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => {
            let summary = body_summary(&bytes);
            let response = next
                .run(Request::from_parts(parts, Body::from(bytes)))
                .await;
            (summary, response)
        }
        Err(_) => ("{}".to_string(), StatusCode::PAYLOAD_TOO_LARGE.into_response()),
    };

    let entry = AccessLogEntry {
        method,
        url,
        status: response.status().as_u16(),
        content_length: response_length(&response),
        elapsed: started.elapsed(),
        body,
    };
    (entry, response)
}

/// Axum middleware writing an access log entry for each request
pub async fn access_log(req: Request, next: Next) -> Response {
    let (entry, response) = record(req, next).await;
    entry.log();
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_summary() {
        let json = Bytes::from_static(br#"{ "name": "Arto Hellas" }"#);
        assert_eq!(body_summary(&json), r#"{"name":"Arto Hellas"}"#);
        assert_eq!(body_summary(&Bytes::new()), "{}");
        assert_eq!(body_summary(&Bytes::from_static(b"name=x")), "{}");
    }

    #[test]
    fn test_response_length_without_header() {
        let response = (StatusCode::OK, "[]").into_response();
        assert_eq!(response_length(&response), Some("2".to_string()));

        let empty = StatusCode::NOT_FOUND.into_response();
        assert_eq!(response_length(&empty), Some("0".to_string()));
    }

    #[test]
    fn test_response_length_prefers_header() {
        let response = ([(header::CONTENT_LENGTH, "7")], "").into_response();
        assert_eq!(response_length(&response), Some("7".to_string()));
    }

    #[test]
    fn test_response_time_format() {
        let entry = AccessLogEntry {
            method: "GET".to_string(),
            url: "/api/persons".to_string(),
            status: 200,
            content_length: Some("2".to_string()),
            elapsed: Duration::from_micros(1500),
            body: "{}".to_string(),
        };
        assert_eq!(entry.response_time_ms(), "1.500");
    }
}
