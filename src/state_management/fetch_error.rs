use serde_json::Value;

use crate::utils::CCStr;

/// Why a fetch of the output definition failed
///
/// The API may answer with several error shapes. The known ones are decoded into
/// their own variant, anything else is kept verbatim in [FetchError::Raw] and shown
/// as its JSON dump.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Message(CCStr),
    #[error("{0}")]
    Detail(CCStr),
    #[error("{0}")]
    Msg(CCStr),
    #[error("{0}")]
    Raw(Value),
}

/// Fields tried in order when decoding an error payload, first truthy one wins
const ERROR_SHAPES: [(&str, fn(CCStr) -> FetchError); 3] = [
    ("message", FetchError::Message),
    ("detail", FetchError::Detail),
    ("Msg", FetchError::Msg),
];

impl FetchError {
    pub fn from_payload(payload: Value) -> Self {
        ERROR_SHAPES
            .iter()
            .find_map(|&(field, shape)| payload.get(field).and_then(truthy_text).map(shape))
            .unwrap_or(FetchError::Raw(payload))
    }

    /// Any failure of the HTTP client itself (connection, TLS, body read...)
    pub fn transport(error: impl core::fmt::Display) -> Self {
        FetchError::Message(CCStr::from(error.to_string()))
    }
}

/// Text of a JSON value if it is truthy: `null`, `false`, `0` and `""` are not
fn truthy_text(value: &Value) -> Option<CCStr> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(CCStr::from(s)),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(CCStr::from(other.to_string())),
    }
}
