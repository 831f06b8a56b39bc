// Based on definition io.k8s.networking.gateway.v1.HTTPURLRewriteFilter

use serde::{Deserialize, Serialize};

use super::HTTPPathModifier;

/// URLRewrite defines a schema for a filter that modifies a request during forwarding.
///
/// Support: Extended
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HTTPURLRewriteFilter {
    /// Path defines a path rewrite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<HTTPPathModifier>,
}
