//! API configuration.
//!
//! Holds the bind address and the CORS origin policy. Origins arrive as
//! strings from the command line and are parsed once here, so the router
//! only ever sees valid header values.

use std::time::Instant;

use axum::http::HeaderValue;
use tower_http::cors::AllowOrigin;
use tracing::warn;

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parses origin strings. An empty input or a `*` entry allows any
    /// origin; entries that are not valid header values are skipped.
    pub fn parse<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowed = Vec::new();
        for origin in origins {
            let origin = origin.as_ref().trim();
            if origin == "*" {
                return CorsOrigins::Any;
            }
            if origin.is_empty() {
                continue;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => allowed.push(value),
                Err(_) => warn!(origin = %origin, "Ignoring invalid CORS origin"),
            }
        }

        if allowed.is_empty() {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(allowed)
        }
    }

    /// Converts the policy into a tower-http origin rule.
    pub fn allow_origin(&self) -> AllowOrigin {
        match self {
            CorsOrigins::Any => AllowOrigin::any(),
            CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// CORS origin policy.
    pub cors: CorsOrigins,
    started_at: Instant,
}

impl ApiConfig {
    /// Creates a configuration for `host:port` that allows any origin.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors: CorsOrigins::Any,
            started_at: Instant::now(),
        }
    }

    /// Restricts CORS to the given origins (`*` keeps any origin allowed).
    pub fn with_cors_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cors = CorsOrigins::parse(origins);
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Seconds since this configuration was created at startup.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 8000)
    }
}
