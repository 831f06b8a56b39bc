mod http_backend_ref;
pub use self::http_backend_ref::HTTPBackendRef;

mod http_path_match;
pub use self::http_path_match::HTTPPathMatch;

mod http_path_modifier;
pub use self::http_path_modifier::HTTPPathModifier;

mod http_route;
pub use self::http_route::HTTPRoute;

mod http_route_filter;
pub use self::http_route_filter::HTTPRouteFilter;

mod http_route_match;
pub use self::http_route_match::HTTPRouteMatch;

mod http_route_rule;
pub use self::http_route_rule::HTTPRouteRule;

mod http_route_spec;
pub use self::http_route_spec::HTTPRouteSpec;

mod httpurl_rewrite_filter;
pub use self::httpurl_rewrite_filter::HTTPURLRewriteFilter;

mod parent_reference;
pub use self::parent_reference::ParentReference;
