use crate::error::{CipherError, Result};
use log::LevelFilter;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_LOG_LEVEL: &str = "info";
static DEFAULT_WIF_COMPRESSED: &str = "true";
pub const DEFAULT_BULK_COUNT: usize = 1024;

const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
const WIF_COMPRESSED_KEY: &str = "WIF_COMPRESSED";
const BULK_COUNT_KEY: &str = "BULK_COUNT";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
    rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Values that fail to
    /// parse are replaced by their defaults and remembered as rejected; they
    /// are logged by [`Config::warn_rejected`] once a logger is installed.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut map = HashMap::new();
        let mut rejected = Vec::new();

        let log_level = match lookup(LOG_LEVEL_KEY) {
            Some(level) if LevelFilter::from_str(&level).is_ok() => level,
            Some(level) => {
                rejected.push(format!("{LOG_LEVEL_KEY}={level}"));
                String::from(DEFAULT_LOG_LEVEL)
            }
            None => String::from(DEFAULT_LOG_LEVEL),
        };
        map.insert(String::from(LOG_LEVEL_KEY), log_level);

        let compressed = match lookup(WIF_COMPRESSED_KEY) {
            Some(flag) if parse_bool(&flag).is_ok() => flag,
            Some(flag) => {
                rejected.push(format!("{WIF_COMPRESSED_KEY}={flag}"));
                String::from(DEFAULT_WIF_COMPRESSED)
            }
            None => String::from(DEFAULT_WIF_COMPRESSED),
        };
        map.insert(String::from(WIF_COMPRESSED_KEY), compressed);

        if let Some(count) = lookup(BULK_COUNT_KEY) {
            if count.parse::<usize>().is_ok() {
                map.insert(String::from(BULK_COUNT_KEY), count);
            } else {
                rejected.push(format!("{BULK_COUNT_KEY}={count}"));
            }
        }

        Config {
            inner: RwLock::new(map),
            rejected,
        }
    }

    /// `KEY=value` pairs that were ignored in favour of the default
    pub fn rejected_settings(&self) -> &[String] {
        &self.rejected
    }

    pub fn warn_rejected(&self) {
        for setting in &self.rejected {
            log::warn!("Ignoring invalid {setting}, using the default");
        }
    }

    pub fn get_log_level(&self) -> LevelFilter {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(LOG_LEVEL_KEY)
            .and_then(|level| LevelFilter::from_str(level).ok())
            .unwrap_or(LevelFilter::Info)
    }

    pub fn set_log_level(&self, level: &str) -> Result<()> {
        LevelFilter::from_str(level)
            .map_err(|e| CipherError::Config(format!("Invalid log level {level}: {e}")))?;
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(LOG_LEVEL_KEY), level.to_string());
        Ok(())
    }

    pub fn is_wif_compressed(&self) -> bool {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(WIF_COMPRESSED_KEY)
            .and_then(|flag| parse_bool(flag).ok())
            .unwrap_or(true)
    }

    pub fn set_wif_compressed(&self, compressed: bool) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(WIF_COMPRESSED_KEY), compressed.to_string());
    }

    pub fn get_bulk_count(&self) -> usize {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(BULK_COUNT_KEY)
            .and_then(|count| count.parse().ok())
            .unwrap_or(DEFAULT_BULK_COUNT)
    }

    pub fn set_bulk_count(&self, count: usize) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(BULK_COUNT_KEY), count.to_string());
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(CipherError::Config(format!("Invalid boolean: {value}"))),
    }
}
