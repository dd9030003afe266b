//! Credentials and endpoint configuration.
//!
//! # Design
//! `ClientConfig` is plain data checked once when a `TextApiClient` is
//! built. The host and base path default to the production service; they are
//! overridable so tests and staging setups can point elsewhere.

use std::env;

pub const DEFAULT_HOST: &str = "api.aylien.com";
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

pub const ENV_APPLICATION_ID: &str = "TEXTAPI_APPLICATION_ID";
pub const ENV_APPLICATION_KEY: &str = "TEXTAPI_APPLICATION_KEY";
pub const ENV_USE_HTTPS: &str = "TEXTAPI_USE_HTTPS";
pub const ENV_HOST: &str = "TEXTAPI_HOST";

/// Application ID and key, sent verbatim on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// True only when neither value was supplied.
    pub fn is_empty(&self) -> bool {
        self.app_id.is_empty() && self.app_key.is_empty()
    }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub use_https: bool,
    pub host: String,
    pub base_path: String,
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(app_id, app_key),
            use_https: true,
            host: DEFAULT_HOST.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }

    /// Read configuration from `TEXTAPI_*` environment variables.
    ///
    /// Unset credential variables read as empty strings; whether that is
    /// acceptable is decided when the client is built.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).unwrap_or_default();
        let mut config = Self::new(var(ENV_APPLICATION_ID), var(ENV_APPLICATION_KEY));
        if let Some(use_https) = parse_flag(&var(ENV_USE_HTTPS)) {
            config.use_https = use_https;
        }
        let host = var(ENV_HOST);
        if !host.is_empty() {
            config.host = host;
        }
        config
    }

    pub fn use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Host, optionally with a port (`localhost:3000`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    /// Absolute URI of an endpoint under the configured base path.
    pub fn endpoint_uri(&self, endpoint: &str) -> String {
        format!(
            "{}://{}/{}/{}",
            self.scheme(),
            self.host.trim_end_matches('/'),
            self.base_path.trim_matches('/'),
            endpoint
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_over_https() {
        let config = ClientConfig::new("id", "key");
        assert!(config.use_https);
        assert_eq!(config.endpoint_uri("sentiment"), "https://api.aylien.com/api/v1/sentiment");
    }

    #[test]
    fn insecure_transport_uses_http_scheme() {
        let config = ClientConfig::new("id", "key").use_https(false);
        assert_eq!(config.endpoint_uri("classify"), "http://api.aylien.com/api/v1/classify");
    }

    #[test]
    fn host_and_base_path_are_joined_with_single_slashes() {
        let config = ClientConfig::new("id", "key")
            .use_https(false)
            .host("127.0.0.1:3000/")
            .base_path("/api/v1/");
        assert_eq!(config.endpoint_uri("related"), "http://127.0.0.1:3000/api/v1/related");
    }

    #[test]
    fn credentials_empty_only_when_both_are() {
        assert!(Credentials::new("", "").is_empty());
        assert!(!Credentials::new("id", "").is_empty());
        assert!(!Credentials::new("", "key").is_empty());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let rendered = format!("{:?}", Credentials::new("app", "s3cret"));
        assert!(rendered.contains("app"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("maybe"), None);
    }

    // Single test so nothing else races on the process environment.
    #[test]
    fn from_env_reads_textapi_variables() {
        let vars = [ENV_APPLICATION_ID, ENV_APPLICATION_KEY, ENV_USE_HTTPS, ENV_HOST];
        for name in vars {
            env::remove_var(name);
        }

        let config = ClientConfig::from_env();
        assert!(config.credentials.is_empty());
        assert!(config.use_https);
        assert_eq!(config.host, DEFAULT_HOST);

        env::set_var("TEXTAPI_APPLICATION_ID", "env-id");
        env::set_var("TEXTAPI_APPLICATION_KEY", "env-key");
        env::set_var("TEXTAPI_USE_HTTPS", "false");
        env::set_var("TEXTAPI_HOST", "localhost:3000");
        let config = ClientConfig::from_env();
        assert_eq!(config.credentials, Credentials::new("env-id", "env-key"));
        assert!(!config.use_https);
        assert_eq!(config.endpoint_uri("language"), "http://localhost:3000/api/v1/language");

        env::set_var("TEXTAPI_USE_HTTPS", "sometimes");
        env::remove_var("TEXTAPI_APPLICATION_KEY");
        let config = ClientConfig::from_env();
        assert!(config.use_https, "unparseable flag keeps the default");
        assert_eq!(config.credentials.app_key, "");

        for name in vars {
            env::remove_var(name);
        }
    }
}
