//! Service configuration loaded from environment variables.

use std::time::Duration;

use crate::api::RateLimiter;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Bind address (from COOKBOOK_HOST)
    pub host: String,
    /// Bind port (from COOKBOOK_PORT)
    pub port: u16,
    /// Allowed CORS origins (from COOKBOOK_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    /// Per-client request limit (from COOKBOOK_RATE_LIMIT, requests per minute)
    pub rate_limiter: Option<RateLimiter>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("COOKBOOK_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = std::env::var("COOKBOOK_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = std::env::var("COOKBOOK_CORS_ORIGINS")
            .ok()
            .map(|s| split_origins(&s))
            .filter(|origins| !origins.is_empty());

        let rate_limiter = std::env::var("COOKBOOK_RATE_LIMIT")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .map(|limit| RateLimiter::new(limit, Duration::from_secs(60)));

        Self {
            host,
            port,
            cors_origins,
            rate_limiter,
        }
    }

    /// Local defaults with no CORS restriction and no rate limiting.
    pub fn local() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: None,
            rate_limiter: None,
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    pub fn with_rate_limit(mut self, max_requests: u32) -> Self {
        self.rate_limiter = Some(RateLimiter::new(max_requests, Duration::from_secs(60)));
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn split_origins(s: &str) -> Vec<String> {
    s.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
