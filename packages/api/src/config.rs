//! Server-side configuration from environment variables and `portal.toml`.

use std::path::PathBuf;
use std::time::Duration;

use domain::PortalConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors while resolving server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DIMIGO_GRAPHQL_URL or DIMIGO_API_URL must be set")]
    MissingEndpoint,
    #[error("NOTICE_TIMEOUT_SECS is not a number: {0}")]
    InvalidTimeout(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Where the notice comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamConfig {
    pub graphql_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Read the upstream endpoint from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::resolve(
            std::env::var("DIMIGO_GRAPHQL_URL").ok(),
            std::env::var("DIMIGO_API_URL").ok(),
            std::env::var("NOTICE_TIMEOUT_SECS").ok(),
        )
    }

    fn resolve(
        graphql_url: Option<String>,
        api_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let graphql_url = match (non_empty(graphql_url), non_empty(api_url)) {
            (Some(url), _) => url,
            (None, Some(base)) => format!("{}/graphql", base.trim_end_matches('/')),
            (None, None) => return Err(ConfigError::MissingEndpoint),
        };

        let timeout_secs = match non_empty(timeout_secs) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            graphql_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Load `portal.toml` (or the file named by `PORTAL_CONFIG`).
///
/// A missing file yields the default config. An empty photo host falls back to
/// the runtime `DIMIGO_API_URL`.
pub fn load_portal_config() -> Result<PortalConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let path = std::env::var("PORTAL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(PortalConfig::filename()));

    let mut config = if path.exists() {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        PortalConfig::from_toml(&text).map_err(|source| ConfigError::Toml {
            path: display,
            source,
        })?
    } else {
        tracing::debug!("{} not found, using defaults", path.display());
        PortalConfig::default()
    };

    if config.photos.base_url.is_empty() {
        if let Ok(base) = std::env::var("DIMIGO_API_URL") {
            config = config.with_photo_base(base);
        }
    }

    Ok(config)
}
