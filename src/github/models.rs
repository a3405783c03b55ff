//! GitHub REST API wire types.

use serde::Deserialize;
use serde_json::Value;

/// A repository as returned by the organization listing endpoint.
///
/// Only the name is needed downstream; everything else in the response is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
}

/// A repository webhook.
///
/// `config` is kept as raw JSON: GitHub does not guarantee a `url` key in a
/// hook's configuration, and a malformed entry must not fail the whole fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct Hook {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub config: Value,
}

impl Hook {
    /// The configured delivery URL, if the hook carries a string-typed `url`.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.config.get("url").and_then(Value::as_str)
    }
}

/// Quota for a single rate-limit resource.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimit {
    pub limit: i64,
    pub remaining: i64,
}

/// Core and search quotas from the `/rate_limit` endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimits {
    pub core: RateLimit,
    pub search: RateLimit,
}

/// Envelope of the `/rate_limit` response.
#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitResponse {
    pub resources: RateLimits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hook_url_string() {
        let hook: Hook =
            serde_json::from_value(json!({"id": 1, "config": {"url": "https://x"}})).unwrap();
        assert_eq!(hook.url(), Some("https://x"));
    }

    #[test]
    fn test_hook_url_missing() {
        let hook: Hook = serde_json::from_value(json!({"id": 2, "config": {}})).unwrap();
        assert_eq!(hook.url(), None);
    }

    #[test]
    fn test_hook_url_not_a_string() {
        let hook: Hook =
            serde_json::from_value(json!({"id": 3, "config": {"url": 42}})).unwrap();
        assert_eq!(hook.url(), None);
    }

    #[test]
    fn test_hook_tolerates_missing_fields() {
        let hook: Hook = serde_json::from_value(json!({})).unwrap();
        assert_eq!(hook.id, 0);
        assert_eq!(hook.url(), None);
    }
}
