//! Error types for the GeoNames client

use std::fmt;

use crate::status::StatusError;

/// Coarse classification of a [`GeonamesError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Connection,
    Transport,
    Http,
    Application,
}

/// Failure reported by a [`Transport`](crate::Transport) before any JSON body was available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// Host name could not be resolved
    Dns(String),
    /// TCP/TLS connection could not be established
    Connect(String),
    Timeout(String),
    /// Response body was not valid JSON
    Malformed(String),
    Other(String),
}

impl TransportFailure {
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, Self::Dns(_))
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns(msg) => write!(f, "name resolution failed: {msg}"),
            Self::Connect(msg) => write!(f, "connection failed: {msg}"),
            Self::Timeout(msg) => write!(f, "request timed out: {msg}"),
            Self::Malformed(msg) => write!(f, "malformed response body: {msg}"),
            Self::Other(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for TransportFailure {}

/// Errors from the GeoNames client
#[derive(Debug)]
pub enum GeonamesError {
    /// Caller input coerced to an empty sentinel; no request was sent
    Validation(String),
    /// Base URI or endpoint mapping is missing
    Configuration(String),
    /// Service host could not be reached by name
    Connection(String),
    Transport(TransportFailure),
    /// Service answered with a status other than 200
    Http(u16),
    /// Service embedded a `status` object in its response
    Application(StatusError),
}

impl GeonamesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Connection(_) => ErrorKind::Connection,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Http(_) => ErrorKind::Http,
            Self::Application(_) => ErrorKind::Application,
        }
    }

    /// The embedded service status, for application errors
    pub fn status(&self) -> Option<&StatusError> {
        match self {
            Self::Application(status) => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for GeonamesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::Connection(msg) => write!(f, "{msg}"),
            Self::Transport(failure) => write!(f, "{failure}"),
            Self::Http(status) => write!(f, "Response status code is '{status}'"),
            Self::Application(status) => write!(f, "{status}"),
        }
    }
}

impl std::error::Error for GeonamesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<TransportFailure> for GeonamesError {
    fn from(failure: TransportFailure) -> Self {
        Self::Transport(failure)
    }
}

impl From<StatusError> for GeonamesError {
    fn from(status: StatusError) -> Self {
        Self::Application(status)
    }
}

impl From<url::ParseError> for GeonamesError {
    fn from(err: url::ParseError) -> Self {
        Self::Configuration(format!("Uri is not valid. ({err})"))
    }
}

pub type Result<T> = std::result::Result<T, GeonamesError>;
