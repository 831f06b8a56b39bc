use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    kube::apis::networking::gateway::v1::HTTPRoute,
};

pub const OUTPUT_EXTENSION: &str = "yaml";

pub fn to_yaml(route: &HTTPRoute) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(route)
}

/// Writes `<dir>/<name>.yaml`, replacing any existing file.
///
/// The document is rendered before the file is opened.
pub fn write_route(dir: &Path, route: &HTTPRoute) -> Result<PathBuf> {
    let name = route
        .metadata
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::EmptyName(dir.to_path_buf()))?;

    let path = dir.join(format!("{}.{}", name, OUTPUT_EXTENSION));

    let yaml = to_yaml(route).map_err(|source| Error::Serialize {
        path: path.clone(),
        source,
    })?;

    fs::write(&path, yaml).map_err(|source| Error::OutputWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
