use std::fmt;
use std::time::Duration;

use crate::error::{RatingsError, Result};

/// Environment variable holding the render proxy bearer credential.
pub const API_KEY_VAR: &str = "JINA_API_KEY";
/// Environment variable overriding the render proxy base URL.
pub const PROXY_BASE_VAR: &str = "RENDER_PROXY_BASE";
/// Environment variable overriding the ratings site base URL.
pub const SITE_BASE_VAR: &str = "RATINGS_SITE_BASE";

pub const DEFAULT_PROXY_BASE: &str = "https://r.jina.ai";
pub const DEFAULT_SITE_BASE: &str = "https://www.2kratings.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ATTEMPT_DELAY: Duration = Duration::from_secs(1);

/// Immutable settings for a [`RatingsClient`](crate::RatingsClient).
///
/// Build one with [`Config::new`] or [`Config::from_env`] and hand it to the
/// client; it is never mutated afterwards.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nba2k_ratings::Config;
///
/// let config = Config::new("secret")
///     .with_proxy_base("http://localhost:8080/")
///     .with_attempt_delay(Duration::ZERO);
/// assert_eq!(config.proxy_base(), "http://localhost:8080");
/// ```
#[derive(Clone)]
pub struct Config {
    api_key: String,
    proxy_base: String,
    site_base: String,
    request_timeout: Duration,
    attempt_delay: Duration,
}

impl Config {
    /// Create a config with the given credential and default endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            site_base: DEFAULT_SITE_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            attempt_delay: DEFAULT_ATTEMPT_DELAY,
        }
    }

    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        // A missing .env is normal outside development
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(RatingsError::MissingCredential { var: API_KEY_VAR })?;

        let mut config = Self::new(api_key);
        if let Some(base) = lookup(PROXY_BASE_VAR).filter(|b| !b.trim().is_empty()) {
            config = config.with_proxy_base(base);
        }
        if let Some(base) = lookup(SITE_BASE_VAR).filter(|b| !b.trim().is_empty()) {
            config = config.with_site_base(base);
        }
        Ok(config)
    }

    pub fn with_proxy_base(mut self, base: impl AsRef<str>) -> Self {
        self.proxy_base = trim_base(base.as_ref());
        self
    }

    pub fn with_site_base(mut self, base: impl AsRef<str>) -> Self {
        self.site_base = trim_base(base.as_ref());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Pause inserted between two candidate URLs during a search.
    pub fn with_attempt_delay(mut self, delay: Duration) -> Self {
        self.attempt_delay = delay;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn proxy_base(&self) -> &str {
        &self.proxy_base
    }

    pub fn site_base(&self) -> &str {
        &self.site_base
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn attempt_delay(&self) -> Duration {
        self.attempt_delay
    }

    /// The proxy URL that renders `target`.
    pub fn proxy_url(&self, target: &str) -> String {
        format!("{}/{target}", self.proxy_base)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("proxy_base", &self.proxy_base)
            .field("site_base", &self.site_base)
            .field("request_timeout", &self.request_timeout)
            .field("attempt_delay", &self.attempt_delay)
            .finish()
    }
}

fn trim_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
