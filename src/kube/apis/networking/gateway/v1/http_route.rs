// Based on definition io.k8s.networking.gateway.v1.HTTPRoute

use serde::{
    de::{Error as _, Unexpected},
    ser::SerializeStruct as _,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::kube::apis::{
    apimachinery::pkg::apis::meta::v1::ObjectMeta, NamespaceResourceScope, Resource,
};

use super::HTTPRouteSpec;

/// HTTPRoute provides a way to route HTTP requests. This includes the capability to match requests by hostname, path, header, or query param. Filters can be used to specify additional processing steps. Backends specify where matching requests should be routed.
///
/// Only the fields written by this tool are modelled; `status` is owned by the gateway controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HTTPRoute {
    /// Standard object's metadata.
    pub metadata: ObjectMeta,

    pub spec: HTTPRouteSpec,
}

impl Resource for HTTPRoute {
    const API_VERSION: &'static str = "gateway.networking.k8s.io/v1";
    const GROUP: &'static str = "gateway.networking.k8s.io";
    const KIND: &'static str = "HTTPRoute";
    const VERSION: &'static str = "v1";
    const URL_PATH_SEGMENT: &'static str = "httproutes";
    type Scope = NamespaceResourceScope;
}

impl Serialize for HTTPRoute {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct(<Self as Resource>::KIND, 4)?;
        state.serialize_field("apiVersion", <Self as Resource>::API_VERSION)?;
        state.serialize_field("kind", <Self as Resource>::KIND)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("spec", &self.spec)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for HTTPRoute {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            api_version: String,
            kind: String,
            #[serde(default)]
            metadata: ObjectMeta,
            #[serde(default)]
            spec: HTTPRouteSpec,
        }

        let Raw {
            api_version,
            kind,
            metadata,
            spec,
        } = Raw::deserialize(deserializer)?;

        if api_version != <Self as Resource>::API_VERSION {
            return Err(D::Error::invalid_value(
                Unexpected::Str(&api_version),
                &<Self as Resource>::API_VERSION,
            ));
        }

        if kind != <Self as Resource>::KIND {
            return Err(D::Error::invalid_value(
                Unexpected::Str(&kind),
                &<Self as Resource>::KIND,
            ));
        }

        Ok(Self { metadata, spec })
    }
}
