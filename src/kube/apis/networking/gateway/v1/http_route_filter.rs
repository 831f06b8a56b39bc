// Based on definition io.k8s.networking.gateway.v1.HTTPRouteFilter

use serde::{Deserialize, Serialize};

use super::HTTPURLRewriteFilter;

/// HTTPRouteFilter defines processing steps that must be completed during the request or response lifecycle.
///
/// `URLRewrite` is the only filter type generated here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HTTPRouteFilter {
    /// Type identifies the type of filter to apply.
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_rewrite: Option<HTTPURLRewriteFilter>,
}

impl HTTPRouteFilter {
    pub const URL_REWRITE: &'static str = "URLRewrite";

    pub fn url_rewrite(filter: HTTPURLRewriteFilter) -> Self {
        Self {
            type_: Self::URL_REWRITE.to_string(),
            url_rewrite: Some(filter),
        }
    }
}
