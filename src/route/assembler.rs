use crate::kube::apis::{
    apimachinery::pkg::apis::meta::v1::ObjectMeta,
    networking::gateway::v1::{HTTPRoute, HTTPRouteRule, HTTPRouteSpec},
};

use super::RouteConfig;

pub const RESOURCE_NAME_PREFIX: &str = "endpoints-";

const SOURCE_EXTENSION: &str = ".csv";

/// Derives a resource name from a source file name.
///
/// ```text
/// endpoints-user_service.csv -> user-service
/// ```
///
/// Only a leading `endpoints-` is removed. Returns `None` when nothing is left.
pub fn resource_name(file_name: &str) -> Option<String> {
    let stem = file_name
        .strip_suffix(SOURCE_EXTENSION)
        .unwrap_or(file_name);

    let stem = stem.strip_prefix(RESOURCE_NAME_PREFIX).unwrap_or(stem);

    (!stem.is_empty()).then(|| stem.replace('_', "-"))
}

pub fn assemble(name: impl Into<String>, rules: Vec<HTTPRouteRule>, config: &RouteConfig) -> HTTPRoute {
    let metadata = ObjectMeta {
        name: Some(name.into()),
        namespace: Some(config.namespace.clone()),
        ..Default::default()
    };

    let spec = HTTPRouteSpec {
        parent_refs: Some(vec![config.gateway.parent_ref()]),
        hostnames: config.hostname.clone().map(|hostname| vec![hostname]),
        rules: Some(rules),
    };

    HTTPRoute { metadata, spec }
}
