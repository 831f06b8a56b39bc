use std::collections::HashMap;

use crate::{
    endpoint::Endpoint,
    kube::apis::networking::gateway::v1::{
        HTTPPathMatch, HTTPPathModifier, HTTPRouteFilter, HTTPRouteMatch, HTTPRouteRule,
        HTTPURLRewriteFilter,
    },
    logger,
};

use super::BackendDescriptor;

/// Endpoints sharing one non-empty prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGroup<'a> {
    pub prefix: &'a str,
    pub endpoints: Vec<&'a Endpoint>,
}

/// Groups prefixed endpoints in first-seen order of their prefix.
pub fn group_by_prefix(endpoints: &[Endpoint]) -> Vec<PrefixGroup<'_>> {
    let mut groups: Vec<PrefixGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for endpoint in endpoints.iter().filter(|endpoint| endpoint.has_prefix()) {
        let position = *positions
            .entry(endpoint.prefix.as_str())
            .or_insert_with(|| {
                groups.push(PrefixGroup {
                    prefix: &endpoint.prefix,
                    endpoints: Vec::new(),
                });
                groups.len() - 1
            });

        groups[position].endpoints.push(endpoint);
    }

    groups
}

/// Strips `prefix` and forwards whatever follows it, for any method.
fn rewrite_rule(prefix: &str, backend: &BackendDescriptor) -> HTTPRouteRule {
    HTTPRouteRule {
        matches: Some(vec![HTTPRouteMatch {
            path: Some(HTTPPathMatch::path_prefix(prefix)),
            method: None,
        }]),
        filters: Some(vec![HTTPRouteFilter::url_rewrite(HTTPURLRewriteFilter {
            path: Some(HTTPPathModifier::replace_prefix_match("/")),
        })]),
        backend_refs: Some(vec![backend.backend_ref()]),
    }
}

fn direct_match(endpoint: &Endpoint) -> HTTPRouteMatch {
    let method = endpoint.method.to_uppercase();

    HTTPRouteMatch {
        path: Some(HTTPPathMatch::path_prefix(endpoint.url.as_str())),
        method: (!method.is_empty()).then_some(method),
    }
}

/// One match per endpoint, duplicates included.
fn direct_match_rule(endpoints: &[Endpoint], backend: &BackendDescriptor) -> HTTPRouteRule {
    HTTPRouteRule {
        matches: Some(endpoints.iter().map(direct_match).collect()),
        filters: None,
        backend_refs: Some(vec![backend.backend_ref()]),
    }
}

/// Rewrite rules for each prefix followed by the direct-match rule.
///
/// Returns no rules for an empty endpoint list.
pub fn generate_rules(endpoints: &[Endpoint], backend: &BackendDescriptor) -> Vec<HTTPRouteRule> {
    if endpoints.is_empty() {
        return Vec::new();
    }

    let groups = group_by_prefix(endpoints);

    let mut rules: Vec<HTTPRouteRule> = groups
        .iter()
        .map(|group| {
            logger!(
                debug,
                "rewrite rule prefix={} endpoints={}",
                group.prefix,
                group.endpoints.len()
            );
            rewrite_rule(group.prefix, backend)
        })
        .collect();

    rules.push(direct_match_rule(endpoints, backend));

    rules
}
