//! Request and response bodies for the filter API.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Filter, FilterError};

/// Body of `PATCH /filters/{id}`.
///
/// `date` is kept as raw JSON: any truthy value is accepted and stored as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateFilterDateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
}

impl UpdateFilterDateRequest {
    /// Create a request carrying the given date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: Some(Value::String(date.into())),
        }
    }

    /// Decode a raw request body sent with the given `Content-Type`.
    ///
    /// Bodies that are not declared as JSON, or that are not a JSON object,
    /// decode to a request without a date, which [`Self::into_date`] then rejects.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        if !content_type.is_some_and(is_json_content_type) {
            return Self::default();
        }
        match serde_json::from_slice(body) {
            Ok(Value::Object(mut fields)) => Self {
                date: fields.remove("date"),
            },
            _ => Self::default(),
        }
    }

    /// Returns the new cycle-start date as text.
    ///
    /// `null`, `false`, `0` and `""` count as missing. Strings are kept
    /// verbatim; any other value is stored in its JSON text form.
    pub fn into_date(self) -> Result<String, FilterError> {
        match self.date {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Err(FilterError::MissingDate),
            Some(Value::String(date)) if date.is_empty() => Err(FilterError::MissingDate),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(FilterError::MissingDate),
            Some(Value::String(date)) => Ok(date),
            Some(Value::Bool(true)) => Ok("1".to_string()),
            Some(other) => Ok(other.to_string()),
        }
    }
}

/// Whether a `Content-Type` header value names `application/json`.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Response of `GET /filters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterList {
    pub filters: Vec<Filter>,
}

/// Response of `GET /filters/{id}` and `PATCH /filters/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEnvelope {
    pub filter: Filter,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
