//! # Portal Configuration
//!
//! Everything is optional. A missing file, a missing table or a missing key
//! all fall back to the reference behavior.
//!
//! ```toml
//! [latency]
//! crop_ms = 700
//! disease_ms = 900
//! expert_ms = 700
//! schemes_ms = 600
//! profile_save_ms = 500
//! chat_reply_ms = 800
//!
//! [resource]
//! timeout_ms = 5000   # omit for no timeout
//!
//! [chat]
//! greeting = "Hi! Ask me about crops, diseases, or schemes."  # "" disables
//! reply = "Thanks! ..."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable the binary reads the config path from.
pub const CONFIG_ENV: &str = "AGRI_PORTAL_CONFIG";

pub const DEFAULT_GREETING: &str = "Hi! Ask me about crops, diseases, or schemes.";
pub const DEFAULT_REPLY: &str =
    "Thanks! I can help with personalized crop suggestions, quick disease triage, and nearby experts.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub latency: LatencyConfig,
    pub resource: ResourceConfig,
    pub chat: ChatConfig,
}

/// Simulated backend latencies, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub crop_ms: u64,
    pub disease_ms: u64,
    pub expert_ms: u64,
    pub schemes_ms: u64,
    pub profile_save_ms: u64,
    pub chat_reply_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            crop_ms: 700,
            disease_ms: 900,
            expert_ms: 700,
            schemes_ms: 600,
            profile_save_ms: 500,
            chat_reply_ms: 800,
        }
    }
}

impl LatencyConfig {
    pub fn profile_save(&self) -> Duration {
        Duration::from_millis(self.profile_save_ms)
    }

    pub fn chat_reply(&self) -> Duration {
        Duration::from_millis(self.chat_reply_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Section fetches taking longer than this are rejected. `None` waits forever.
    pub timeout_ms: Option<u64>,
}

impl ResourceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// First assistant entry of a new chat log. Empty disables it.
    pub greeting: String,
    pub reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            reply: DEFAULT_REPLY.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn greeting(&self) -> Option<&str> {
        let greeting = self.greeting.trim();
        (!greeting.is_empty()).then_some(greeting)
    }
}

impl PortalConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`load`](Self::load), but any problem yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(error = %e, "Falling back to default config");
                Self::default()
            }
        }
    }

    /// Loads from the path in [`CONFIG_ENV`], or the defaults when it is unset.
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_or_default(Path::new(&path)),
            None => Self::default(),
        }
    }
}
