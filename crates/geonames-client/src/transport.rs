//! HTTP transport
//!
//! [`Transport`] is the single-shot "send GET, receive status and body"
//! capability the client consumes. [`HttpTransport`] implements it on top of
//! `reqwest`; tests substitute their own.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::{GeonamesError, Result, TransportFailure};
use crate::request::BuiltRequest;

/// Outcome of one dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResponse {
    /// No usable response: network failure or undecodable body
    Transport(TransportFailure),
    /// Completed response with a status other than 200
    Http { status: u16 },
    /// Decoded JSON body of a 200 response
    Body(serde_json::Value),
}

pub trait Transport: Send + Sync {
    /// Perform a GET of `request.uri` with `request.params` as the query string
    fn send(&self, request: &BuiltRequest) -> impl Future<Output = RemoteResponse> + Send;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                GeonamesError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &BuiltRequest) -> RemoteResponse {
        let url = match url::Url::parse_with_params(&request.uri, request.params.iter()) {
            Ok(url) => url,
            Err(e) => return RemoteResponse::Transport(TransportFailure::Other(e.to_string())),
        };

        debug!(uri = %request.uri, params = request.params.len(), "Sending GeoNames request");

        let response = match self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return RemoteResponse::Transport(classify_reqwest_error(&e)),
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return RemoteResponse::Http {
                status: status.as_u16(),
            };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return RemoteResponse::Transport(classify_reqwest_error(&e)),
        };

        match serde_json::from_str(&body) {
            Ok(json) => RemoteResponse::Body(json),
            Err(e) => RemoteResponse::Transport(TransportFailure::Malformed(e.to_string())),
        }
    }
}

const NAME_RESOLUTION_MARKERS: [&str; 5] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host",
];

fn classify_reqwest_error(err: &reqwest::Error) -> TransportFailure {
    let message = error_chain(err);

    if err.is_timeout() {
        TransportFailure::Timeout(message)
    } else if err.is_connect() {
        if is_name_resolution_message(&message) {
            TransportFailure::Dns(message)
        } else {
            TransportFailure::Connect(message)
        }
    } else if err.is_decode() {
        TransportFailure::Malformed(message)
    } else {
        TransportFailure::Other(message)
    }
}

fn is_name_resolution_message(message: &str) -> bool {
    let lowered = message.to_ascii_lowercase();
    NAME_RESOLUTION_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Render an error and all of its sources as one line
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_resolution_messages() {
        assert!(is_name_resolution_message(
            "error sending request: client error (Connect): dns error: failed to lookup address information: Name or service not known"
        ));
        assert!(is_name_resolution_message("No such host is known. (os error 11001)"));
        assert!(!is_name_resolution_message("tcp connect error: Connection refused (os error 111)"));
    }

    #[test]
    fn test_error_chain_without_sources() {
        let parse = "x".parse::<u8>().unwrap_err();
        assert_eq!(error_chain(&parse), parse.to_string());
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_dns_failure() {
        let transport = HttpTransport::new(Duration::from_secs(5), "geonames-client-test").unwrap();
        let request = BuiltRequest {
            uri: "http://geonames-client.invalid/searchJSON".to_string(),
            params: crate::RequestOptions::new().with("q", "Gent"),
        };

        match transport.send(&request).await {
            RemoteResponse::Transport(failure) => assert!(failure.is_name_resolution(), "{failure}"),
            other => panic!("Expected transport failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_uri_is_transport_failure() {
        let transport = HttpTransport::new(Duration::from_secs(5), "geonames-client-test").unwrap();
        let request = BuiltRequest {
            uri: "not a uri".to_string(),
            params: crate::RequestOptions::new(),
        };
        assert!(matches!(
            transport.send(&request).await,
            RemoteResponse::Transport(TransportFailure::Other(_))
        ));
    }
}
