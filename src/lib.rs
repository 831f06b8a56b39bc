pub mod batch;
pub mod cmd;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod kube;
pub mod logging;
pub mod output;
pub mod route;
