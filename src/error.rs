use std::path::PathBuf;

pub use anyhow::anyhow;

use thiserror::Error as TError;

use crate::endpoint::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, TError)]
pub enum Error {
    #[error("failed to access input {path:?}: {source}")]
    InputAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input file must be a CSV file: {0:?}")]
    InputFormat(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    SourceParse { path: PathBuf, source: ParseError },

    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("empty resource name for {0:?}")]
    EmptyName(PathBuf),

    #[error("resource name {name:?} of {path:?} is already used by {previous:?}")]
    NameConflict {
        name: String,
        path: PathBuf,
        previous: PathBuf,
    },

    #[error("failed to render {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn パースエラーはファイル名と原因を含む() {
        let error = Error::SourceParse {
            path: "endpoints-checkout.csv".into(),
            source: ParseError::MissingHeader,
        };

        assert_eq!(
            error.to_string(),
            r#"failed to parse "endpoints-checkout.csv": missing header row"#
        );
    }

    #[test]
    fn 名前の衝突は両方のファイルを含む() {
        let error = Error::NameConflict {
            name: "a".into(),
            path: "endpoints-a.csv".into(),
            previous: "a.csv".into(),
        };

        assert_eq!(
            error.to_string(),
            r#"resource name "a" of "endpoints-a.csv" is already used by "a.csv""#
        );
    }

    #[test]
    fn 出力エラーは出力先を含む() {
        let source = serde_yaml::from_str::<u8>("[").unwrap_err();
        let error = Error::Serialize {
            path: "generated/checkout.yaml".into(),
            source,
        };

        assert!(error
            .to_string()
            .starts_with(r#"failed to render "generated/checkout.yaml": "#));
    }
}
