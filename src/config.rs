use anyhow::Context;
use clap::ValueEnum;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::{constants, shared_types::Site, utils::paths::get_absolute_path};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Chirpy,
    Normal,
    Stfu,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl LogLevel {
    pub fn as_filter(&self) -> LevelFilter {
        match self {
            Self::Chirpy => LevelFilter::DEBUG,
            Self::Normal => LevelFilter::INFO,
            Self::Stfu => LevelFilter::WARN,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    probe_target: String,
    log_dir: String,
    log_level: LogLevel,
    user_agent: String,
    sites: Vec<Site>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_target: constants::DEFAULT_PROBE_TARGET.to_string(),
            log_dir: constants::DEFAULT_LOG_DIR.to_string(),
            log_level: LogLevel::default(),
            user_agent: constants::default_user_agent(),
            sites: Site::defaults(),
        }
    }
}

impl Config {
    pub fn get_config_filepath() -> io::Result<PathBuf> {
        get_absolute_path(constants::CONFIG_FILEPATH)
    }

    /// Reads the config at `path`, or at the default location when `path` is None.
    /// Only a missing default file falls back to the built-in config.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (config_filepath, explicit) = match path {
            Some(path) => (get_absolute_path(path)?, true),
            None => (Config::get_config_filepath()?, false),
        };

        let file_contents = match fs::read_to_string(&config_filepath) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => {
                tracing::debug!(
                    "no config at {}, using defaults",
                    config_filepath.display()
                );
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("error reading config file {}", config_filepath.display())
                })
            }
        };

        Config::from_toml(&file_contents)
            .with_context(|| format!("invalid config file {}", config_filepath.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn get_probe_target(&self) -> &str {
        self.probe_target.as_str()
    }

    pub fn get_log_dir(&self) -> io::Result<PathBuf> {
        get_absolute_path(&self.log_dir)
    }

    pub fn set_log_dir(&mut self, log_dir: &Path) {
        self.log_dir = log_dir.to_string_lossy().to_string();
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.clone()
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn get_user_agent(&self) -> &str {
        self.user_agent.as_str()
    }

    pub fn get_sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn set_sites(&mut self, sites: Vec<Site>) {
        self.sites = sites;
    }
}
