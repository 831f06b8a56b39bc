// Based on definition io.k8s.networking.gateway.v1.HTTPPathMatch

use serde::{Deserialize, Serialize};

/// Path specifies a HTTP request path matcher. If this field is not specified, a default prefix match on the "/" path is provided.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HTTPPathMatch {
    /// Type specifies how to match against the path Value.
    ///
    /// Support: Core (Exact, PathPrefix)
    /// Support: Implementation-specific (RegularExpression)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Value of the HTTP path to match against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl HTTPPathMatch {
    pub const PATH_PREFIX: &'static str = "PathPrefix";

    pub fn path_prefix(value: impl Into<String>) -> Self {
        Self {
            type_: Some(Self::PATH_PREFIX.to_string()),
            value: Some(value.into()),
        }
    }
}
