//! Layered configuration for the `antdv-docs` binary.
//!
//! Values are merged, later layers winning:
//! 1. built-in defaults,
//! 2. a config file (TOML, YAML or JSON, picked by extension), either the
//!    path given on the command line or `<config dir>/antdv-docs/config.toml`
//!    when it exists,
//! 3. `ANTDV_`-prefixed environment variables, nested with `__`
//!    (`ANTDV_CRAWLER__DELAY_MS=250`).

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use antdv_crawl::{BaseUrls, CrawlOptions};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "ANTDV_";
pub const DEFAULT_DATABASE: &str = "./data/antdv.sqlite";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file, created on first use.
    pub database: PathBuf,
    pub crawler: CrawlerConfig,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            crawler: CrawlerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerConfig {
    pub user_agent: String,
    /// Minimum pause between two requests, in milliseconds. Zero disables
    /// throttling.
    pub delay_ms: u64,
    pub base_urls: BaseUrlsConfig,
}
impl Default for CrawlerConfig {
    fn default() -> Self {
        let options = CrawlOptions::default();
        Self {
            user_agent: options.user_agent,
            delay_ms: u64::try_from(options.delay.as_millis()).unwrap_or(u64::MAX),
            base_urls: BaseUrlsConfig {
                v3: options.base_urls.v3,
                v4: options.base_urls.v4,
            },
        }
    }
}
impl From<&CrawlerConfig> for CrawlOptions {
    fn from(config: &CrawlerConfig) -> Self {
        CrawlOptions {
            user_agent: config.user_agent.clone(),
            delay: Duration::from_millis(config.delay_ms),
            base_urls: BaseUrls::new(&config.base_urls.v3, &config.base_urls.v4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUrlsConfig {
    pub v3: String,
    pub v4: String,
}

impl Config {
    /// Loads and validates the configuration.
    ///
    /// An explicit `path` must exist; the per-user default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = match path {
            Some(path) => {
                if !path.is_file() {
                    exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
                }
                Self::figment(Some(path))?
            },
            None => Self::figment(default_config_file().filter(|path| path.is_file()).as_deref())?,
        };
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Defaults merged with a config file, without the environment layer.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        let Some(file) = file else {
            return Ok(figment);
        };
        debug!(path = %file.display(), "loading config file");
        let extension = file
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        Ok(match extension.as_deref() {
            Some("toml") => figment.merge(Toml::file_exact(file)),
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(file)),
            Some("json") => figment.merge(Json::file_exact(file)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(file.to_path_buf())),
        })
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Invalid)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            exn::bail!(ErrorKind::Validation {
                setting: "crawler.user_agent",
                reason: "must not be empty",
            });
        }
        for (setting, url) in [
            ("crawler.base_urls.v3", &self.crawler.base_urls.v3),
            ("crawler.base_urls.v4", &self.crawler.base_urls.v4),
        ] {
            if !url.starts_with("http") {
                exn::bail!(ErrorKind::Validation {
                    setting,
                    reason: "must be an http(s) URL",
                });
            }
        }
        if self.database.as_os_str().is_empty() {
            exn::bail!(ErrorKind::Validation {
                setting: "database",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

/// `<config dir>/antdv-docs/config.toml`, when the platform has a config dir.
pub fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "antdv-docs").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
