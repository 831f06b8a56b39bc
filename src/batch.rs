use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    endpoint::read_endpoints,
    error::{Error, Result},
    logger,
    output::write_route,
    route::{build_route, resource_name, RouteConfig},
};

pub const SOURCE_EXTENSION: &str = "csv";

#[derive(Debug)]
pub struct Failure {
    pub source: PathBuf,
    pub error: Error,
}

/// Per-file results of one run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written manifests
    pub generated: Vec<PathBuf>,
    /// Sources without any endpoint
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

enum Outcome {
    Generated(PathBuf),
    Skipped,
}

pub struct BatchDriver<'a> {
    config: &'a RouteConfig,
    output: PathBuf,
}

impl<'a> BatchDriver<'a> {
    pub fn new(config: &'a RouteConfig, output: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output: output.into(),
        }
    }

    /// Converts a single CSV file or every CSV file directly under a directory.
    ///
    /// A failing file in a directory is reported and the run continues.
    /// A failing single-file input fails the run.
    pub fn run(&self, input: &Path) -> Result<BatchReport> {
        logger!(info, "start input={:?} output={:?}", input, self.output);

        fs::create_dir_all(&self.output).map_err(|source| Error::OutputDir {
            path: self.output.clone(),
            source,
        })?;

        let metadata = fs::metadata(input).map_err(|source| Error::InputAccess {
            path: input.to_path_buf(),
            source,
        })?;

        let mut report = BatchReport::default();

        // resource name -> source that produced it
        let mut claimed: HashMap<String, PathBuf> = HashMap::new();

        if !metadata.is_dir() {
            if !is_source(input) {
                return Err(Error::InputFormat(input.to_path_buf()));
            }

            let outcome = self.process(input, &mut claimed)?;

            report.record(input, outcome);

            return Ok(report);
        }

        for source in sources(input)? {
            match self.process(&source, &mut claimed) {
                Ok(outcome) => report.record(&source, outcome),
                Err(error) => {
                    eprintln!("Error processing {}: {}", display_name(&source), error);

                    logger!(error, "failed {:?}: {}", source, error);

                    report.failures.push(Failure { source, error });
                }
            }
        }

        Ok(report)
    }

    /// Names are claimed only by sources that produce a manifest.
    fn process(&self, source: &Path, claimed: &mut HashMap<String, PathBuf>) -> Result<Outcome> {
        logger!(info, "process {:?}", source);

        let name = resource_name(&display_name(source))
            .ok_or_else(|| Error::EmptyName(source.to_path_buf()))?;

        let endpoints = read_endpoints(source)?;

        let Some(route) = build_route(name.as_str(), &endpoints, self.config) else {
            logger!(info, "skip {:?}: no endpoints", source);
            return Ok(Outcome::Skipped);
        };

        if let Some(previous) = claimed.get(&name) {
            return Err(Error::NameConflict {
                name,
                path: source.to_path_buf(),
                previous: previous.clone(),
            });
        }

        let path = write_route(&self.output, &route)?;

        claimed.insert(name, source.to_path_buf());

        println!("Generated {}", path.display());

        Ok(Outcome::Generated(path))
    }
}

impl BatchReport {
    fn record(&mut self, source: &Path, outcome: Outcome) {
        match outcome {
            Outcome::Generated(path) => self.generated.push(path),
            Outcome::Skipped => self.skipped.push(source.to_path_buf()),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn is_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Regular `*.csv` files directly under `dir`, sorted by file name.
fn sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let access_error = |source: std::io::Error| Error::InputAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();

    for entry in fs::read_dir(dir).map_err(access_error)? {
        let path = entry.map_err(access_error)?.path();

        if path.is_file() && is_source(&path) {
            sources.push(path);
        }
    }

    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(sources)
}
