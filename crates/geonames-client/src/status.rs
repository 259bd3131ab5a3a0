//! Application status codes embedded in GeoNames responses
//!
//! The service reports semantic failures inside an HTTP 200 response:
//!
//! ```json
//! {"status": {"message": "no result found", "value": 15}}
//! ```
//!
//! See <http://www.geonames.org/export/webservice-exception.html>.

use std::fmt;

use serde::Deserialize;

/// One of the documented GeoNames exception codes (10-23)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusCode {
    AuthorizationException,
    RecordDoesNotExist,
    OtherError,
    DatabaseTimeout,
    InvalidParameter,
    NoResultFound,
    DuplicateException,
    PostalCodeNotFound,
    DailyLimitExceeded,
    HourlyLimitExceeded,
    WeeklyLimitExceeded,
    InvalidInput,
    ServerOverloaded,
    ServiceNotImplemented,
    /// A value outside the documented table, kept verbatim
    Unrecognized(String),
}

impl StatusCode {
    pub const ALL: [StatusCode; 14] = [
        Self::AuthorizationException,
        Self::RecordDoesNotExist,
        Self::OtherError,
        Self::DatabaseTimeout,
        Self::InvalidParameter,
        Self::NoResultFound,
        Self::DuplicateException,
        Self::PostalCodeNotFound,
        Self::DailyLimitExceeded,
        Self::HourlyLimitExceeded,
        Self::WeeklyLimitExceeded,
        Self::InvalidInput,
        Self::ServerOverloaded,
        Self::ServiceNotImplemented,
    ];

    /// Parse a wire code such as `"15"` or `" 15 "`
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "10" => Self::AuthorizationException,
            "11" => Self::RecordDoesNotExist,
            "12" => Self::OtherError,
            "13" => Self::DatabaseTimeout,
            "14" => Self::InvalidParameter,
            "15" => Self::NoResultFound,
            "16" => Self::DuplicateException,
            "17" => Self::PostalCodeNotFound,
            "18" => Self::DailyLimitExceeded,
            "19" => Self::HourlyLimitExceeded,
            "20" => Self::WeeklyLimitExceeded,
            "21" => Self::InvalidInput,
            "22" => Self::ServerOverloaded,
            "23" => Self::ServiceNotImplemented,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::AuthorizationException => "10",
            Self::RecordDoesNotExist => "11",
            Self::OtherError => "12",
            Self::DatabaseTimeout => "13",
            Self::InvalidParameter => "14",
            Self::NoResultFound => "15",
            Self::DuplicateException => "16",
            Self::PostalCodeNotFound => "17",
            Self::DailyLimitExceeded => "18",
            Self::HourlyLimitExceeded => "19",
            Self::WeeklyLimitExceeded => "20",
            Self::InvalidInput => "21",
            Self::ServerOverloaded => "22",
            Self::ServiceNotImplemented => "23",
            Self::Unrecognized(code) => code,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AuthorizationException => "authorization exception",
            Self::RecordDoesNotExist => "record does not exist",
            Self::OtherError => "other error",
            Self::DatabaseTimeout => "database timeout",
            Self::InvalidParameter => "invalid parameter",
            Self::NoResultFound => "no result found",
            Self::DuplicateException => "duplicate exception",
            Self::PostalCodeNotFound => "postal code not found",
            Self::DailyLimitExceeded => "daily limit of credits exceeded",
            Self::HourlyLimitExceeded => "hourly limit of credits exceeded",
            Self::WeeklyLimitExceeded => "weekly limit of credits exceeded",
            Self::InvalidInput => "invalid input",
            Self::ServerOverloaded => "server overloaded exception",
            Self::ServiceNotImplemented => "service not implemented",
            Self::Unrecognized(_) => "unrecognized status",
        }
    }

    /// Credit limit codes (18-20)
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self,
            Self::DailyLimitExceeded | Self::HourlyLimitExceeded | Self::WeeklyLimitExceeded
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded `status` object of an application-level failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub code: StatusCode,
    pub message: String,
}

impl StatusError {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Decode the `status` member of a response body
    pub(crate) fn from_value(value: &serde_json::Value) -> Self {
        let raw = RawStatus::deserialize(value).unwrap_or_default();
        let code = StatusCode::from_code(raw.value.as_deref().unwrap_or_default());
        let message = raw
            .message
            .unwrap_or_else(|| code.description().to_string());
        Self { code, message }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoNames status {}: {}", self.code, self.message)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawStatus {
    #[serde(default, deserialize_with = "crate::normalize::lenient::text")]
    value: Option<String>,
    #[serde(default, deserialize_with = "crate::normalize::lenient::text")]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_documented_code_round_trips() {
        for (offset, code) in StatusCode::ALL.iter().enumerate() {
            let wire = (10 + offset).to_string();
            assert_eq!(code.as_str(), wire);
            assert_eq!(&StatusCode::from_code(&wire), code);
        }
    }

    #[test]
    fn test_rate_limit_codes() {
        let all = StatusCode::ALL;
        let limited: Vec<&str> = all
            .iter()
            .filter(|c| c.is_rate_limit())
            .map(|c| c.as_str())
            .collect();
        assert_eq!(limited, vec!["18", "19", "20"]);
    }

    #[test]
    fn test_status_from_string_value() {
        let status = StatusError::from_value(&json!({"value": "15", "message": "no result found"}));
        assert_eq!(status.code, StatusCode::NoResultFound);
        assert_eq!(status.message, "no result found");
    }

    #[test]
    fn test_status_from_numeric_value() {
        let status = StatusError::from_value(&json!({
            "message": "we are afraid we could not find a administrative country subdivision",
            "value": 15
        }));
        assert_eq!(status.code, StatusCode::NoResultFound);
    }

    #[test]
    fn test_status_outside_table_is_kept() {
        let status = StatusError::from_value(&json!({"value": 42}));
        assert_eq!(status.code, StatusCode::Unrecognized("42".to_string()));
        assert_eq!(status.message, "unrecognized status");
    }

    #[test]
    fn test_status_display() {
        let status = StatusError::new(StatusCode::HourlyLimitExceeded, "slow down");
        assert_eq!(format!("{}", status), "GeoNames status 19: slow down");
    }
}
