//! # Client configuration: `diet.toml`
//!
//! The client talks to exactly one backend origin. The origin can be given in a
//! TOML file (native builds, tests) or baked in at compile time through the
//! `DIET_API_URL` environment variable, which is the only channel a wasm build has.
//!
//! ```toml
//! [backend]
//! base_url = "https://ad-project-svq2.onrender.com"
//! ```
//!
//! A missing file, section, or key is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://ad-project-svq2.onrender.com";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme + host (+ optional port), without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Default config, overridden by `DIET_API_URL` if it was set at build time.
    pub fn from_build_env() -> Self {
        match option_env!("DIET_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Builder method to set the backend origin.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.backend.base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// The backend origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.backend.base_url.trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "diet.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
