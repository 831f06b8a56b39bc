// Based on definition io.k8s.networking.gateway.v1.ParentReference

use serde::{Deserialize, Serialize};

/// ParentReference identifies an API object (usually a Gateway) that can be considered a parent of this resource (usually a route).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentReference {
    /// Group is the group of the referent. When unspecified, "gateway.networking.k8s.io" is inferred.
    ///
    /// Support: Core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Kind is kind of the referent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name is the name of the referent.
    ///
    /// Support: Core
    pub name: String,

    /// Namespace is the namespace of the referent. When unspecified, this refers to the local namespace of the Route.
    ///
    /// Support: Core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}
