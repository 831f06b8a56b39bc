use std::path::PathBuf;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::route::{BackendDescriptor, GatewayRef, RouteConfig};

pub const ENV_PREFIX: &str = "CSV2HTTPROUTE_";

pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Default, PartialEq, Eq)]
pub enum ConfigLoadOption {
    #[default]
    Default,

    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub service: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    pub gateway: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_namespace: Option<String>,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("facts/endpoints"),
            output: PathBuf::from("generated"),
            service: "my-service".into(),
            port: 80,
            service_namespace: None,
            gateway: "my-gateway".into(),
            gateway_namespace: None,
            namespace: DEFAULT_NAMESPACE.into(),
            hostname: None,
        }
    }
}

/// Values given explicitly on the command line. Unset fields leave lower layers untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl Config {
    /// defaults < config file < `CSV2HTTPROUTE_*` env < command line
    pub fn load(option: ConfigLoadOption, overrides: ConfigOverrides) -> Result<Self> {
        let figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config = match option {
            ConfigLoadOption::Default => figment,
            ConfigLoadOption::Path(path) => figment.merge(Yaml::file(path)),
        }
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract_lossy()?;

        Ok(config)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

impl From<&Config> for RouteConfig {
    fn from(config: &Config) -> Self {
        let namespace = non_empty(Some(config.namespace.as_str()))
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let gateway_namespace = non_empty(config.gateway_namespace.as_deref())
            .unwrap_or_else(|| namespace.clone());

        Self {
            namespace,
            hostname: non_empty(config.hostname.as_deref()),
            gateway: GatewayRef {
                name: config.gateway.clone(),
                namespace: gateway_namespace,
            },
            backend: BackendDescriptor {
                name: config.service.clone(),
                namespace: non_empty(config.service_namespace.as_deref()),
                port: config.port,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 何も指定しないときはデフォルト値を返す() {
        Jail::expect_with(|_| {
            let config = Config::load(ConfigLoadOption::Default, ConfigOverrides::default()).unwrap();

            assert_eq!(config, Config::default());

            Ok(())
        });
    }

    #[test]
    fn 設定ファイルの値で上書きする() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                indoc! {"
                    service: checkout
                    port: 8080
                    namespace: production
                    hostname: api.example.com
                "},
            )?;

            let config = Config::load(
                ConfigLoadOption::Path("config.yaml".into()),
                ConfigOverrides::default(),
            )
            .unwrap();

            assert_eq!(
                config,
                Config {
                    service: "checkout".into(),
                    port: 8080,
                    namespace: "production".into(),
                    hostname: Some("api.example.com".into()),
                    ..Default::default()
                }
            );

            Ok(())
        });
    }

    #[test]
    fn 環境変数は設定ファイルより優先する() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "service: from-file\nport: 8080\n")?;
            jail.set_env("CSV2HTTPROUTE_SERVICE", "from-env");
            jail.set_env("CSV2HTTPROUTE_SERVICE_NAMESPACE", "backend");

            let config = Config::load(
                ConfigLoadOption::Path("config.yaml".into()),
                ConfigOverrides::default(),
            )
            .unwrap();

            assert_eq!(config.service, "from-env");
            assert_eq!(config.port, 8080);
            assert_eq!(config.service_namespace, Some("backend".into()));

            Ok(())
        });
    }

    #[test]
    fn コマンドライン引数は環境変数より優先する() {
        Jail::expect_with(|jail| {
            jail.set_env("CSV2HTTPROUTE_GATEWAY", "from-env");
            jail.set_env("CSV2HTTPROUTE_PORT", "8080");

            let overrides = ConfigOverrides {
                gateway: Some("from-cli".into()),
                ..Default::default()
            };

            let config = Config::load(ConfigLoadOption::Default, overrides).unwrap();

            assert_eq!(config.gateway, "from-cli");
            assert_eq!(config.port, 8080);

            Ok(())
        });
    }

    mod route_config {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn gatewayのnamespace未指定時はnamespaceを使う() {
            let config = Config {
                namespace: "production".into(),
                ..Default::default()
            };

            let actual = RouteConfig::from(&config);

            assert_eq!(actual.gateway.namespace, "production");
        }

        #[test]
        fn 空文字は未指定として扱う() {
            let config = Config {
                service_namespace: Some("".into()),
                gateway_namespace: Some(" ".into()),
                hostname: Some("".into()),
                ..Default::default()
            };

            let actual = RouteConfig::from(&config);

            assert_eq!(
                actual,
                RouteConfig {
                    namespace: "default".into(),
                    hostname: None,
                    gateway: GatewayRef {
                        name: "my-gateway".into(),
                        namespace: "default".into(),
                    },
                    backend: BackendDescriptor {
                        name: "my-service".into(),
                        namespace: None,
                        port: 80,
                    },
                }
            );
        }

        #[test]
        fn namespaceが空のときはdefaultを使う() {
            let config = Config {
                namespace: " ".into(),
                ..Default::default()
            };

            let actual = RouteConfig::from(&config);

            assert_eq!(actual.namespace, "default");
            assert_eq!(actual.gateway.namespace, "default");
        }

        #[test]
        fn namespaceの前後の空白を除く() {
            let config = Config {
                namespace: " production ".into(),
                ..Default::default()
            };

            let actual = RouteConfig::from(&config);

            assert_eq!(actual.namespace, "production");
            assert_eq!(actual.gateway.namespace, "production");
        }

        #[test]
        fn 指定した値をそのまま使う() {
            let config = Config {
                service: "api".into(),
                port: 9090,
                service_namespace: Some("backend".into()),
                gateway: "edge".into(),
                gateway_namespace: Some("infra".into()),
                namespace: "apps".into(),
                hostname: Some("api.example.com".into()),
                ..Default::default()
            };

            let actual = RouteConfig::from(&config);

            assert_eq!(actual.namespace, "apps");
            assert_eq!(actual.hostname, Some("api.example.com".into()));
            assert_eq!(
                actual.gateway,
                GatewayRef {
                    name: "edge".into(),
                    namespace: "infra".into(),
                }
            );
            assert_eq!(
                actual.backend,
                BackendDescriptor {
                    name: "api".into(),
                    namespace: Some("backend".into()),
                    port: 9090,
                }
            );
        }
    }
}
