//! Portal configuration: TOML file, then `VANILLA_*` environment overrides,
//! then built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FarmError;
use crate::session::UploadPolicy;

/// Runtime settings for the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// SQLite file holding farms, partners and the whitepaper record
    pub store_path: PathBuf,
    /// Token price the calculator starts from
    pub default_token_price: f64,
    /// Simulated wallet approval time
    pub wallet_connect_delay_ms: u64,
    /// Simulated upload processing time
    pub upload_delay_ms: u64,
    pub max_whitepaper_bytes: u64,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("vanilla_portal.db"),
            default_token_price: 20.0,
            wallet_connect_delay_ms: 1500,
            upload_delay_ms: 2000,
            max_whitepaper_bytes: 10 * 1024 * 1024,
            log_filter: "warn".to_string(),
        }
    }
}

impl PortalConfig {
    /// Load the optional TOML file, then apply environment overrides.
    ///
    /// A file that was asked for but cannot be read is an error; so is a
    /// file that is not valid TOML. Unset fields keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, FarmError> {
        let mut cfg = match path {
            Some(p) => {
                debug!(path = %p.display(), "reading config file");
                Self::from_toml_str(&std::fs::read_to_string(p)?)?
            }
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FarmError> {
        Ok(toml::from_str(content)?)
    }

    /// Override fields from `VANILLA_*` variables. Values that do not parse
    /// are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("VANILLA_STORE_PATH") {
            self.store_path = PathBuf::from(path);
        }
        if let Some(Ok(price)) = lookup("VANILLA_TOKEN_PRICE").map(|v| v.parse::<f64>()) {
            if price.is_finite() {
                self.default_token_price = price;
            }
        }
        if let Some(Ok(ms)) = lookup("VANILLA_WALLET_DELAY_MS").map(|v| v.parse()) {
            self.wallet_connect_delay_ms = ms;
        }
        if let Some(Ok(ms)) = lookup("VANILLA_UPLOAD_DELAY_MS").map(|v| v.parse()) {
            self.upload_delay_ms = ms;
        }
        if let Some(Ok(bytes)) = lookup("VANILLA_MAX_WHITEPAPER_BYTES").map(|v| v.parse()) {
            self.max_whitepaper_bytes = bytes;
        }
    }

    pub fn wallet_delay(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_delay_ms)
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_bytes: self.max_whitepaper_bytes,
            delay: Duration::from_millis(self.upload_delay_ms),
        }
    }
}
