// orderbot-core/src/config.rs
// Settings: defaults -> optional config file -> ORDERBOT__* environment

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Binance USDⓈ-M futures endpoints
pub const MAINNET_API: &str = "https://fapi.binance.com";
pub const TESTNET_API: &str = "https://testnet.binancefuture.com";

pub const ENV_PREFIX: &str = "ORDERBOT";

pub const API_KEY_VAR: &str = "BINANCE_API_KEY";
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";

#[derive(Debug, Deserialize, Clone)]
pub struct Exchange {
    pub testnet: bool,
    /// Overrides the mainnet/testnet default when set
    pub base_url: Option<String>,
    pub recv_window_ms: u64,
    pub timeout_secs: u64,
}

impl Exchange {
    pub fn base_url(&self) -> &str {
        match &self.base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
            _ if self.testnet => TESTNET_API,
            _ => MAINNET_API,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Logging {
    pub dir: String,
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub exchange: Exchange,
    pub logging: Logging,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load settings, reading `path` instead of `./config.*` when given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`Settings::load`], but `ORDERBOT__*` overrides come from
    /// `env` instead of the process environment when it is `Some`
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("exchange.testnet", true)?
            .set_default("exchange.recv_window_ms", 5000)?
            .set_default("exchange.timeout_secs", 30)?
            .set_default("logging.dir", "logs")?
            .set_default("logging.level", "info")?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

/// API key pair, read from the environment (a `.env` file counts)
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Both values must be present and non-blank
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).filter(|v| !v.trim().is_empty())?;
        let api_secret = lookup(API_SECRET_VAR).filter(|v| !v.trim().is_empty())?;
        Some(Self {
            api_key: api_key.trim().to_string(),
            api_secret: api_secret.trim().to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: String = self.api_key.chars().take(4).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}***", shown))
            .field("api_secret", &"***")
            .finish()
    }
}
