//! Success payloads returned by the Partner API client.

use std::fmt;

/// The decoded body of a 2xx response.
///
/// Business payloads are opaque: the client never interprets order,
/// product, or user schemas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// The response had no body (or only whitespace).
    Empty,
    /// The response body decoded as JSON.
    Json(serde_json::Value),
    /// The response body was not JSON; kept verbatim.
    Text(String),
}

impl Payload {
    /// Decodes a 2xx response body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use partner_api::Payload;
    /// use serde_json::json;
    ///
    /// assert_eq!(Payload::from_body(""), Payload::Empty);
    /// assert_eq!(Payload::from_body(r#"{"id":"1"}"#), Payload::Json(json!({"id": "1"})));
    /// ```
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Empty;
        }
        serde_json::from_str(body).map_or_else(|_| Self::Text(body.to_string()), Self::Json)
    }

    /// Returns `true` if the response had no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the decoded JSON, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Empty | Self::Text(_) => None,
        }
    }

    /// Consumes the payload, returning the decoded JSON if any.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Empty | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("{}"),
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_and_blank_bodies_are_empty() {
        assert!(Payload::from_body("").is_empty());
        assert!(Payload::from_body("  \n").is_empty());
    }

    #[test]
    fn test_json_body_is_decoded() {
        let payload = Payload::from_body(r#"[{"id":"1"},{"id":"2"}]"#);
        assert_eq!(payload.as_json(), Some(&json!([{"id": "1"}, {"id": "2"}])));
    }

    #[test]
    fn test_non_json_body_is_kept_as_text() {
        let payload = Payload::from_body("OK");
        assert_eq!(payload, Payload::Text("OK".to_string()));
        assert!(payload.as_json().is_none());
    }

    #[test]
    fn test_into_json() {
        assert_eq!(
            Payload::from_body(r#"{"id":"1"}"#).into_json(),
            Some(json!({"id": "1"}))
        );
        assert_eq!(Payload::Empty.into_json(), None);
    }
}
