use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::extract::ExtractOptions;

const DEFAULT_BASE_URL: &str = "https://viaf.org/viaf";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for persnamer.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (PERSNAMER_* prefix)
/// 3. Config file (~/.config/persnamer/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix of the record URL; the VIAF number is appended after a `/`.
    ///
    /// Can be set via:
    /// - CLI: --base-url https://viaf.org/viaf
    /// - ENV: PERSNAMER_BASE_URL
    /// - Config: base_url = "..."
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with the record request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Insert a space between a lower-case letter and a following upper-case
    /// letter in the extracted name ("GaleazzoSanseverino" becomes
    /// "Galeazzo Sanseverino").
    #[serde(default)]
    pub split_camel_case: bool,

    /// Reduce `YYYY-MM-00` dates to the bare year.
    #[serde(default)]
    pub truncate_unknown_day: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            split_camel_case: false,
            truncate_unknown_day: false,
        }
    }
}

impl Config {
    /// Load configuration from the default config file and environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `config_path` (if it exists) and environment
    /// variables with the PERSNAMER_ prefix.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("persnamer");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_split_camel_case(mut self, enabled: bool) -> Self {
        self.split_camel_case = enabled;
        self
    }

    #[must_use]
    pub fn with_truncate_unknown_day(mut self, enabled: bool) -> Self {
        self.truncate_unknown_day = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            split_camel_case: self.split_camel_case,
            truncate_unknown_day: self.truncate_unknown_day,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("persnamer/{}", env!("CARGO_PKG_VERSION"))
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/persnamer/config.toml
/// - macOS: ~/Library/Application Support/persnamer/config.toml
/// - Windows: %APPDATA%\persnamer\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("persnamer")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# persnamer Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (PERSNAMER_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Where VIAF records are fetched from. The VIAF number is appended
# after a slash and the record is requested as application/rdf+xml.
#
# Can also be set via:
# - CLI: persnamer --base-url https://viaf.org/viaf 314802260
# - Environment: PERSNAMER_BASE_URL=https://viaf.org/viaf
#base_url = "https://viaf.org/viaf"

# HTTP timeout in seconds
#timeout_secs = 30

# User-Agent header for the record request
#user_agent = "persnamer/0.1.0"

# Insert a space where a lower-case letter runs into an upper-case one,
# e.g. "Gian GaleazzoSanseverino" -> "Gian Galeazzo Sanseverino".
# Leave off for names with lower-case particles such as "deTéligny".
#split_camel_case = false

# Reduce dates with an unknown day ("1499-07-00") to the year ("1499").
#truncate_unknown_day = false
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Create the example config file at `config_path` if nothing is there yet.
pub fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
