use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::json::JsonEncoder,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use once_cell::sync::OnceCell;

use crate::error::anyhow;

pub struct Logger;

pub static LOGGER_ENABLED: OnceCell<bool> = OnceCell::new();

pub const DEFAULT_LOG_PATH: &str = "csv2httproute.log";

#[macro_export]
macro_rules! logger {
    ($level:ident, $($arg:tt)+) => {
        if let Some(true) = $crate::logging::LOGGER_ENABLED.get() {
            ::log::$level!($($arg)+);
        }
    };
}

/// Level from `RUST_LOG`, file from `LOG_PATH`.
#[derive(Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub path: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let level = LevelFilter::from_str(&env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
            .map_err(|err| anyhow!("invalid RUST_LOG: {}", err))?;

        let path = env::var_os("LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        Ok(Self { level, path })
    }
}

impl Logger {
    pub fn init() -> Result<(), anyhow::Error> {
        let LogSettings { level, path } = LogSettings::from_env()?;

        let logfile = FileAppender::builder()
            .append(false)
            .encoder(Box::new(JsonEncoder::new()))
            .build(path)?;

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(level))?;

        log4rs::init_config(config)?;

        LOGGER_ENABLED
            .set(true)
            .map_err(|_| anyhow!("logger is already initialized"))?;

        Ok(())
    }
}
