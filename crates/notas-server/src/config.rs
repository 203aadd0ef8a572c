//! Server configuration from environment variables.
//!
//! Read once at process start (the cold start) and never mutated afterwards.
//! Handlers receive it through [`crate::state::AppState`] instead of reading
//! the environment ad hoc, which keeps them testable in isolation.

use std::env;

use notas_backends::summarizer::DEFAULT_OPENAI_URL;

/// Emulator-detection variables; any truthy value switches emulator mode on.
const EMULATOR_VARS: [&str; 3] = ["FUNCTIONS_EMULATOR", "EMULATOR_HUB", "DOCSTORE_EMULATOR_HOST"];

/// API key variables, tried in order.
const API_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "OPENAI_KEY"];

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Base URL of the identity backend.
    pub identity_base_url: String,
    /// Base URL of the document store.
    pub docstore_base_url: String,
    /// Base URL of the summarization backend.
    pub openai_base_url: String,
    /// Summarization API key, if configured.
    pub openai_api_key: Option<String>,
    /// Force the mock summarizer regardless of other settings.
    pub force_mock: bool,
    /// Whether the process runs inside a local emulator.
    pub emulator: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_BASE_URL`: identity backend endpoint
    /// - `DOCSTORE_BASE_URL`: document store endpoint
    ///
    /// Optional:
    /// - `PORT`: server port (default: 3000)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: allowed CORS origins (default: "*")
    /// - `OPENAI_BASE_URL`: summarization endpoint (default: the OpenAI API)
    /// - `OPENAI_API_KEY` / `OPENAI_KEY`: summarization API key
    /// - `USE_MOCK_SUMMARY`: truthy forces the mock summarizer
    /// - `FUNCTIONS_EMULATOR` / `EMULATOR_HUB` / `DOCSTORE_EMULATOR_HOST`:
    ///   any truthy value marks the process as emulator-hosted
    pub fn from_env() -> Result<Self, ConfigError> {
        let identity_base_url = env::var("IDENTITY_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("IDENTITY_BASE_URL".to_string()))?;
        let docstore_base_url = env::var("DOCSTORE_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DOCSTORE_BASE_URL".to_string()))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string());

        let openai_api_key = API_KEY_VARS.iter().find_map(|name| env_non_empty(name));

        let force_mock = env_truthy("USE_MOCK_SUMMARY");
        let emulator = EMULATOR_VARS.iter().any(|name| env_truthy(name));

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            identity_base_url,
            docstore_base_url,
            openai_base_url,
            openai_api_key,
            force_mock,
            emulator,
        })
    }

    /// Whether requests must take the mock summarization path.
    ///
    /// True when explicitly forced, or when running in an emulator without
    /// an API key. On this path no network call reaches the summarizer.
    pub fn use_mock_summary(&self) -> bool {
        self.force_mock || (self.emulator && self.openai_api_key.is_none())
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Read an environment variable as a boolean flag.
fn env_truthy(name: &str) -> bool {
    env::var(name).map(|v| is_truthy(&v)).unwrap_or(false)
}

/// Read an environment variable, treating blank values as unset.
fn env_non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Truthiness rule for flag variables: set, non-blank, not "0"/"false".
fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ServerConfig {
        ServerConfig {
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            identity_base_url: "http://identity.local".to_string(),
            docstore_base_url: "http://store.local".to_string(),
            openai_base_url: DEFAULT_OPENAI_URL.to_string(),
            openai_api_key: None,
            force_mock: false,
            emulator: false,
        }
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("localhost:8080"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("  "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("FALSE"));
    }

    #[test]
    fn test_use_mock_summary_forced() {
        let mut config = base_config();
        config.force_mock = true;
        config.openai_api_key = Some("sk-test".to_string());
        assert!(config.use_mock_summary());
    }

    #[test]
    fn test_use_mock_summary_emulator_without_key() {
        let mut config = base_config();
        config.emulator = true;
        assert!(config.use_mock_summary());
    }

    #[test]
    fn test_emulator_with_key_takes_live_path() {
        let mut config = base_config();
        config.emulator = true;
        config.openai_api_key = Some("sk-test".to_string());
        assert!(!config.use_mock_summary());
    }

    #[test]
    fn test_no_flags_means_live_path() {
        assert!(!base_config().use_mock_summary());
    }

    // Every variable from_env reads, so the test starts from a clean slate.
    const ENV_VARS: [&str; 12] = [
        "IDENTITY_BASE_URL",
        "DOCSTORE_BASE_URL",
        "PORT",
        "LOG_LEVEL",
        "CORS_ALLOWED_ORIGINS",
        "OPENAI_BASE_URL",
        "OPENAI_API_KEY",
        "OPENAI_KEY",
        "USE_MOCK_SUMMARY",
        "FUNCTIONS_EMULATOR",
        "EMULATOR_HUB",
        "DOCSTORE_EMULATOR_HOST",
    ];

    #[test]
    fn test_from_env() {
        // SAFETY: This is the only test in the crate that touches the
        // process environment, so it is not run in parallel with any other
        // reader of these variables.
        unsafe {
            for name in ENV_VARS {
                env::remove_var(name);
            }

            // Both backend URLs are required, checked in order.
            assert!(matches!(
                ServerConfig::from_env(),
                Err(ConfigError::MissingEnvVar(name)) if name == "IDENTITY_BASE_URL"
            ));
            env::set_var("IDENTITY_BASE_URL", "http://identity.local");
            assert!(matches!(
                ServerConfig::from_env(),
                Err(ConfigError::MissingEnvVar(name)) if name == "DOCSTORE_BASE_URL"
            ));

            // With only the required variables set, everything else defaults.
            env::set_var("DOCSTORE_BASE_URL", "http://store.local");
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.port, 3000);
            assert_eq!(config.log_level, "info");
            assert_eq!(config.cors_allowed_origins, "*");
            assert_eq!(config.openai_base_url, DEFAULT_OPENAI_URL);
            assert_eq!(config.openai_api_key, None);
            assert!(!config.force_mock);
            assert!(!config.emulator);

            // OPENAI_KEY is the fallback name; OPENAI_API_KEY wins over it.
            env::set_var("OPENAI_KEY", "sk-fallback");
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.openai_api_key.as_deref(), Some("sk-fallback"));
            env::set_var("OPENAI_API_KEY", "sk-primary");
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.openai_api_key.as_deref(), Some("sk-primary"));

            // A blank primary key falls through to the alternative name.
            env::set_var("OPENAI_API_KEY", "   ");
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.openai_api_key.as_deref(), Some("sk-fallback"));

            // Any one of the three emulator variables flips emulator mode.
            env::set_var("EMULATOR_HUB", "localhost:4400");
            env::set_var("USE_MOCK_SUMMARY", "1");
            let config = ServerConfig::from_env().unwrap();
            assert!(config.emulator);
            assert!(config.force_mock);

            // "false" and "0" count as unset for flag variables.
            env::set_var("USE_MOCK_SUMMARY", "false");
            env::set_var("EMULATOR_HUB", "0");
            let config = ServerConfig::from_env().unwrap();
            assert!(!config.force_mock);
            assert!(!config.emulator);

            for name in ENV_VARS {
                env::remove_var(name);
            }
        }
    }
}
