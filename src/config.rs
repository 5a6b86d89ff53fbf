//! Runtime settings for the collector.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ourworldindata.org/grapher/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// One request start per interval, i.e. 2 requests/second.
pub const DEFAULT_RATE_INTERVAL: Duration = Duration::from_millis(500);

/// Where and how fast to fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Prefix for slugs that are not full URLs. Must end with `/`.
    pub base_url: String,
    /// Wall-clock limit for a single request.
    pub timeout: Duration,
    /// Minimum spacing between request starts across all tasks.
    pub rate_interval: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            rate_interval: DEFAULT_RATE_INTERVAL,
        }
    }
}

impl FetchConfig {
    /// Defaults, with `OWID_BASE_URL` overriding the base URL when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("OWID_BASE_URL") {
            config.base_url = normalize_base(base);
        }
        config
    }
}

fn normalize_base(mut base: String) -> String {
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.rate_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_normalize_base_adds_slash() {
        assert_eq!(normalize_base("http://mirror/grapher".into()), "http://mirror/grapher/");
        assert_eq!(normalize_base("http://mirror/".into()), "http://mirror/");
    }
}
