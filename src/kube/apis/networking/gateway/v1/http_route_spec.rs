// Based on definition io.k8s.networking.gateway.v1.HTTPRouteSpec

use serde::{Deserialize, Serialize};

use super::{HTTPRouteRule, ParentReference};

/// Spec defines the desired state of HTTPRoute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HTTPRouteSpec {
    /// ParentRefs references the resources (usually Gateways) that a Route wants to be attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_refs: Option<Vec<ParentReference>>,

    /// Hostnames defines a set of hostnames that should match against the HTTP Host header to select a HTTPRoute used to process the request.
    ///
    /// Left unset rather than empty when no hostname is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostnames: Option<Vec<String>>,

    /// Rules are a list of HTTP matchers, filters and actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<HTTPRouteRule>>,
}
