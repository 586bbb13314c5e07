//! Deployment-level booster settings.

use crate::{Error, ErrorContext, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::env;
use std::fmt;
use std::time::Duration;

pub const HOST_ENV: &str = "GRAPH_BOOSTER_HOST";
pub const USERNAME_ENV: &str = "GRAPH_BOOSTER_USERNAME";
pub const PASSWORD_ENV: &str = "GRAPH_BOOSTER_PASSWORD";
pub const TIMEOUT_ENV: &str = "GRAPH_BOOSTER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Username/password pair for HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header: `Basic base64(username:password)`.
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Settings shared by every reorder call of a booster instance.
#[derive(Debug, Clone)]
pub struct BoosterSettings {
    host: String,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl BoosterSettings {
    pub fn builder() -> BoosterSettingsBuilder {
        BoosterSettingsBuilder::new()
    }

    /// Load settings from `GRAPH_BOOSTER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut builder = BoosterSettingsBuilder::new();
        if let Ok(host) = env::var(HOST_ENV) {
            builder = builder.host(host);
        }
        builder.username = env::var(USERNAME_ENV).ok();
        builder.password = env::var(PASSWORD_ENV).ok();
        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    "timeout must be a whole number of seconds",
                    ErrorContext::new()
                        .with_field_path(TIMEOUT_ENV)
                        .with_details(raw.clone()),
                )
            })?;
            builder = if secs == 0 {
                builder.without_timeout()
            } else {
                builder.timeout(Duration::from_secs(secs))
            };
        }
        builder.build()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Whole-request timeout; `None` means calls may block indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

pub struct BoosterSettingsBuilder {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout: Option<Duration>,
}

impl BoosterSettingsBuilder {
    pub fn new() -> Self {
        Self {
            host: None,
            username: None,
            password: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn build(self) -> Result<BoosterSettings> {
        let host = self
            .host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "remote host must be configured",
                    ErrorContext::new().with_field_path(HOST_ENV),
                )
            })?;

        let credentials = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(Error::configuration_with_context(
                    "username configured without a password",
                    ErrorContext::new().with_field_path(PASSWORD_ENV),
                ))
            }
            (None, Some(_)) => {
                return Err(Error::configuration_with_context(
                    "password configured without a username",
                    ErrorContext::new().with_field_path(USERNAME_ENV),
                ))
            }
        };

        Ok(BoosterSettings {
            host,
            credentials,
            timeout: self.timeout,
        })
    }
}

impl Default for BoosterSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_basic_header_encoding() {
        let creds = Credentials::new("neo4j", "password");
        assert_eq!(creds.authorization_header(), "Basic bmVvNGo6cGFzc3dvcmQ=");
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("neo4j", "s3cret");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("neo4j"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_build_requires_host() {
        let err = BoosterSettings::builder().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = BoosterSettings::builder().host("   ").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_build_defaults() {
        let settings = BoosterSettings::builder()
            .host("http://localhost:7474")
            .build()
            .unwrap();
        assert_eq!(settings.host(), "http://localhost:7474");
        assert!(settings.credentials().is_none());
        assert_eq!(settings.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_without_timeout() {
        let settings = BoosterSettings::builder()
            .host("http://localhost:7474")
            .without_timeout()
            .build()
            .unwrap();
        assert_eq!(settings.timeout(), None);
    }

    #[test]
    fn test_half_configured_credentials_rejected() {
        let builder = BoosterSettingsBuilder {
            password: Some("pw".into()),
            ..BoosterSettingsBuilder::new().host("http://localhost:7474")
        };
        let err = builder.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.context().field_path.as_deref(), Some(USERNAME_ENV));
    }
}
