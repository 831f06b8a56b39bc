pub mod networking;

pub use k8s_openapi::{apimachinery, NamespaceResourceScope, Resource};
