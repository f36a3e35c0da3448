//! Directory engine: backend collaborators and effect execution.
mod config;
mod engine;
mod http;
mod illustration;
mod sanitize;
mod types;
mod wordpress;

pub use config::{
    ConfigError, EngineConfig, HttpSettings, IllustrationSettings, RepositorySettings,
    API_NONCE_VAR, API_ROOT_VAR, DEFAULT_GEMINI_BASE, DEFAULT_IMAGE_MODEL, GEMINI_BASE_VAR,
    GEMINI_KEY_VAR, HTTP_TIMEOUT_VAR, LEGACY_KEY_VAR,
};
pub use engine::EngineHandle;
pub use illustration::{
    GeminiIllustrator, IllustrationProvider, API_KEY_HEADER, HEADER_ASPECT_RATIO,
};
pub use sanitize::strip_tags;
pub use types::{BackendError, EngineEvent, FailureKind};
pub use wordpress::{
    ListingRepository, WordPressRepository, FALLBACK_ADDRESS, FALLBACK_CATEGORY, FALLBACK_IMAGE,
    NONCE_HEADER,
};
