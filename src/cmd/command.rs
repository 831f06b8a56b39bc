use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigLoadOption, ConfigOverrides};

const APP_NAME: &str = "csv2httproute";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Command {
    /// CSV file or directory of CSV files [default: facts/endpoints]
    #[arg(short, long, value_name = "PATH", display_order = 1000)]
    pub input: Option<PathBuf>,

    /// Output directory [default: generated]
    #[arg(short, long, value_name = "DIR", display_order = 1000)]
    pub output: Option<PathBuf>,

    /// Backend service name [default: my-service]
    #[arg(short, long, value_name = "NAME", display_order = 1000)]
    pub service: Option<String>,

    /// Backend service port [default: 80]
    #[arg(short, long, display_order = 1000)]
    pub port: Option<u16>,

    /// Backend service namespace
    #[arg(long, value_name = "NAMESPACE", display_order = 1000)]
    pub service_namespace: Option<String>,

    /// Gateway name [default: my-gateway]
    #[arg(short, long, value_name = "NAME", display_order = 1000)]
    pub gateway: Option<String>,

    /// Gateway namespace [default: same as --namespace]
    #[arg(long, value_name = "NAMESPACE", display_order = 1000)]
    pub gateway_namespace: Option<String>,

    /// HTTPRoute namespace [default: default]
    #[arg(short, long, display_order = 1000)]
    pub namespace: Option<String>,

    /// HTTPRoute hostname
    #[arg(long, display_order = 1000)]
    pub hostname: Option<String>,

    /// Logging
    #[arg(short = 'l', long, display_order = 1000)]
    pub logging: bool,

    /// Config file path
    #[arg(long, display_order = 1000)]
    pub config_file: Option<PathBuf>,
}

impl Command {
    pub fn init() -> Self {
        Self::parse()
    }

    pub fn config_overrides(&self) -> ConfigOverrides {
        let Self {
            input,
            output,
            service,
            port,
            service_namespace,
            gateway,
            gateway_namespace,
            namespace,
            hostname,
            ..
        } = self.clone();

        ConfigOverrides {
            input,
            output,
            service,
            port,
            service_namespace,
            gateway,
            gateway_namespace,
            namespace,
            hostname,
        }
    }

    pub fn config_load_option(&self) -> ConfigLoadOption {
        if let Some(path) = &self.config_file {
            match path.try_exists() {
                Ok(true) => ConfigLoadOption::Path(path.clone()),
                Ok(false) => {
                    eprintln!("Config file not found: {:?}", path);

                    ConfigLoadOption::Default
                }
                Err(err) => {
                    eprintln!("Failed to check config file exists: {}", err);

                    ConfigLoadOption::Default
                }
            }
        } else {
            let Some(path) = xdg_config_home().map(|dir| dir.join("config.yaml")) else {
                return ConfigLoadOption::Default;
            };

            match path.try_exists() {
                Ok(true) => ConfigLoadOption::Path(path),
                Ok(false) => ConfigLoadOption::Default,
                Err(err) => {
                    eprintln!("Failed to check config file exists: {}", err);

                    ConfigLoadOption::Default
                }
            }
        }
    }
}

fn xdg_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME").map(|s| PathBuf::from(s).join(APP_NAME)) {
        Some(path) => Some(path),
        None => dirs::home_dir().map(|home| home.join(".config").join(APP_NAME)),
    }
}
