//! Errors raised by the table → env-file pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure aborts the run; malformed rows are skipped, not reported here.
#[derive(Debug, Error)]
pub enum EnvSplitError {
    /// The input file could not be opened or read.
    #[error("Failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input has no lines once surrounding whitespace is removed.
    #[error("Input file is empty")]
    EmptyInput,

    /// The header row lacks one or more of `file`, `key`, `value`.
    #[error(
        "Required columns not found: {} (headers: {})",
        .missing.join(", "),
        .headers.join(", ")
    )]
    MissingColumns { missing: Vec<&'static str>, headers: Vec<String> },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_missing_and_found() {
        let err = EnvSplitError::MissingColumns {
            missing: vec!["key", "value"],
            headers: vec!["file".into(), "name".into()],
        };
        assert_eq!(
            err.to_string(),
            "Required columns not found: key, value (headers: file, name)"
        );
    }

    #[test]
    fn write_error_names_offending_path() {
        let err = EnvSplitError::Write {
            path: PathBuf::from("out/prod.env"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/prod.env"));
    }
}
