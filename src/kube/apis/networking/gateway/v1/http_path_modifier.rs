// Based on definition io.k8s.networking.gateway.v1.HTTPPathModifier

use serde::{Deserialize, Serialize};

/// Path defines parameters used to modify the path of the incoming request.
///
/// Support: Extended
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HTTPPathModifier {
    /// Type defines the type of path modifier.
    #[serde(rename = "type")]
    pub type_: String,

    /// ReplacePrefixMatch specifies the value with which to replace the prefix match of a request during a rewrite or redirect. For example, a request to "/foo/bar" with a prefix match of "/foo" and a ReplacePrefixMatch of "/xyz" would be modified to "/xyz/bar".
    ///
    /// ReplacePrefixMatch is only compatible with a `PathPrefix` HTTPRouteMatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_prefix_match: Option<String>,
}

impl HTTPPathModifier {
    pub const REPLACE_PREFIX_MATCH: &'static str = "ReplacePrefixMatch";

    pub fn replace_prefix_match(value: impl Into<String>) -> Self {
        Self {
            type_: Self::REPLACE_PREFIX_MATCH.to_string(),
            replace_prefix_match: Some(value.into()),
        }
    }
}
