use std::net::{Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use axum::http::{HeaderValue, Method};
use serde::{Deserialize, Serialize};
use topboard_core::DEFAULT_CAPACITY;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON snapshot the leaderboard is restored from and saved to.
    pub data_file: PathBuf,
    /// Number of entries kept on the board.
    pub capacity: NonZeroUsize,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            data_file: PathBuf::from("scores.json"),
            capacity: DEFAULT_CAPACITY,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}

/// Cross-origin policy for browser clients.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn layer(&self) -> ServerResult<CorsLayer> {
        let base = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any);

        if self.allowed_origins.is_empty() {
            return Ok(base.allow_origin(Any));
        }

        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ServerError::Config(format!("invalid CORS origin: {origin}")))
            })
            .collect::<ServerResult<Vec<_>>>()?;
        Ok(base.allow_origin(AllowOrigin::list(origins)))
    }
}
