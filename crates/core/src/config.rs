//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to keep
//! environment lookups out of request paths: the host (CLI binary, embedding
//! UI) resolves base URL and CSRF token once and hands a shared `CoreConfig`
//! to everything that talks to the record service.

use crate::{OdontogramError, OdontogramResult};
use reqwest::Url;
use std::time::Duration;

/// Default per-request timeout for calls to the record service.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    service_base_url: Url,
    csrf_token: String,
    request_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `service_base_url` must be an absolute `http`/`https` URL that can
    /// serve as a base for endpoint paths. `csrf_token` is the opaque token
    /// sourced from the host page; every write request carries it, so it
    /// must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `OdontogramError::InvalidInput` if the base URL does not
    /// parse, is not `http`/`https`, or the CSRF token is empty.
    pub fn new(
        service_base_url: &str,
        csrf_token: String,
        request_timeout: Option<Duration>,
    ) -> OdontogramResult<Self> {
        let url = Url::parse(service_base_url.trim()).map_err(|e| {
            OdontogramError::InvalidInput(format!("invalid service base URL: {e}"))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(OdontogramError::InvalidInput(
                "service base URL must be an absolute http(s) URL".into(),
            ));
        }

        if csrf_token.trim().is_empty() {
            return Err(OdontogramError::InvalidInput(
                "csrf_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            service_base_url: url,
            csrf_token,
            request_timeout: request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }

    pub fn service_base_url(&self) -> &Url {
        &self.service_base_url
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_base_url_and_defaults_timeout() {
        let cfg = CoreConfig::new("http://clinic.example/api", "tok-1".into(), None)
            .expect("config should be accepted");
        assert_eq!(cfg.service_base_url().as_str(), "http://clinic.example/api");
        assert_eq!(cfg.csrf_token(), "tok-1");
        assert_eq!(cfg.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn rejects_unparseable_or_non_http_base_urls() {
        let err = CoreConfig::new("not a url", "tok".into(), None)
            .expect_err("garbage URL should be rejected");
        assert!(matches!(err, OdontogramError::InvalidInput(_)));

        let err = CoreConfig::new("ftp://clinic.example", "tok".into(), None)
            .expect_err("non-http scheme should be rejected");
        assert!(matches!(err, OdontogramError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_csrf_token() {
        let err = CoreConfig::new("https://clinic.example", "  ".into(), None)
            .expect_err("blank token should be rejected");
        assert!(matches!(err, OdontogramError::InvalidInput(_)));
    }
}
