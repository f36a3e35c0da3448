use std::env;
use std::time::Duration;

use thiserror::Error;

pub const API_ROOT_VAR: &str = "DIRECTORY_API_ROOT";
pub const API_NONCE_VAR: &str = "DIRECTORY_API_NONCE";
pub const HTTP_TIMEOUT_VAR: &str = "DIRECTORY_HTTP_TIMEOUT_SECS";
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";
/// Older deployments inject the credential under this generic name.
pub const LEGACY_KEY_VAR: &str = "API_KEY";
pub const GEMINI_BASE_VAR: &str = "GEMINI_API_BASE";

pub const DEFAULT_GEMINI_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Where the content-management backend lives and the token it expects on writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySettings {
    pub root: String,
    pub nonce: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllustrationSettings {
    /// `None` disables generation without any network attempt.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl Default for IllustrationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_GEMINI_BASE.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// `None` means the directory runs on bundled data only.
    pub repository: Option<RepositorySettings>,
    pub illustration: IllustrationSettings,
    pub http: HttpSettings,
}

impl EngineConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let repository = value(API_ROOT_VAR).map(|root| RepositorySettings {
            root,
            nonce: value(API_NONCE_VAR).unwrap_or_default(),
        });

        let api_key = value(GEMINI_KEY_VAR)
            .or_else(|| value(LEGACY_KEY_VAR))
            // Bundlers substitute a missing key with the literal string.
            .filter(|key| key != "undefined");
        let illustration = IllustrationSettings {
            api_key,
            api_base: value(GEMINI_BASE_VAR).unwrap_or_else(|| DEFAULT_GEMINI_BASE.to_string()),
            ..IllustrationSettings::default()
        };

        let mut http = HttpSettings::default();
        if let Some(raw) = value(HTTP_TIMEOUT_VAR) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: HTTP_TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            http.request_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            repository,
            illustration,
            http,
        })
    }
}
