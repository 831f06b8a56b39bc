mod assembler;
mod generator;

pub use self::assembler::{assemble, resource_name, RESOURCE_NAME_PREFIX};
pub use self::generator::{generate_rules, group_by_prefix, PrefixGroup};

use crate::{
    endpoint::Endpoint,
    kube::apis::networking::gateway::v1::{HTTPBackendRef, HTTPRoute, ParentReference},
};

/// The service every generated rule forwards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    pub name: String,
    pub namespace: Option<String>,
    pub port: u16,
}

impl BackendDescriptor {
    pub const KIND: &'static str = "Service";

    /// Weight is always 1; port 0 is treated as unset.
    pub fn backend_ref(&self) -> HTTPBackendRef {
        HTTPBackendRef {
            group: None,
            kind: Some(Self::KIND.to_string()),
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            port: (self.port != 0).then_some(i32::from(self.port)),
            weight: Some(1),
        }
    }
}

/// Gateway the generated routes attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRef {
    pub name: String,
    pub namespace: String,
}

impl GatewayRef {
    pub const GROUP: &'static str = "gateway.networking.k8s.io";
    pub const KIND: &'static str = "Gateway";

    pub fn parent_ref(&self) -> ParentReference {
        ParentReference {
            group: Some(Self::GROUP.to_string()),
            kind: Some(Self::KIND.to_string()),
            name: self.name.clone(),
            namespace: Some(self.namespace.clone()),
        }
    }
}

/// Settings shared by every route produced in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub namespace: String,
    pub hostname: Option<String>,
    pub gateway: GatewayRef,
    pub backend: BackendDescriptor,
}

/// Builds the route for one source, or `None` when the source has no endpoints.
pub fn build_route(
    name: impl Into<String>,
    endpoints: &[Endpoint],
    config: &RouteConfig,
) -> Option<HTTPRoute> {
    if endpoints.is_empty() {
        return None;
    }

    let rules = generate_rules(endpoints, &config.backend);

    Some(assemble(name, rules, config))
}
