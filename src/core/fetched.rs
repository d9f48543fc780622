use serde::Serialize;
use std::fmt;

/// Why an operation served fallback data instead of remote data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Endpoint or key missing at startup.
    NotConfigured,
    /// Transport, query or decoding error.
    Unavailable(String),
    /// The query succeeded but returned no rows.
    Empty,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NotConfigured => write!(f, "remote store not configured"),
            FallbackReason::Unavailable(message) => write!(f, "remote store unavailable: {}", message),
            FallbackReason::Empty => write!(f, "remote store returned no rows"),
        }
    }
}

/// Result of a read that always yields usable data.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T, FallbackReason),
}

impl<T> Fetched<T> {
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data, _) => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data, _) => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(..))
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback(_, reason) => Some(reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Live(data) => Fetched::Live(f(data)),
            Fetched::Fallback(data, reason) => Fetched::Fallback(f(data), reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_accessors() {
        let fetched = Fetched::Live(vec![1, 2, 3]);
        assert!(!fetched.is_fallback());
        assert!(fetched.reason().is_none());
        assert_eq!(fetched.data().len(), 3);
        assert_eq!(fetched.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fallback_map_keeps_reason() {
        let fetched = Fetched::Fallback(vec![1, 2], FallbackReason::Empty);
        let mapped = fetched.map(|v| v.len());

        assert!(mapped.is_fallback());
        assert_eq!(mapped.reason(), Some(&FallbackReason::Empty));
        assert_eq!(*mapped.data(), 2);
    }

    #[test]
    fn test_reason_serialization() {
        let value = serde_json::to_value(FallbackReason::Unavailable("boom".into())).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "unavailable", "detail": "boom"}));

        let value = serde_json::to_value(FallbackReason::NotConfigured).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "not_configured"}));
    }
}
