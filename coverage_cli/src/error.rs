use thiserror::Error;

/// Top-level error for the `coverage-merge` binary. `main` maps any variant
/// to a one-line diagnostic on stderr and a non-zero exit code, matching the
/// teacher's main-catches-and-prints-then-exits convention.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Json {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    ConfigParse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no coverage files matched under {0}")]
    NoInputFiles(std::path::PathBuf),

    #[error(transparent)]
    Coverage(#[from] coverage_core::CoverageError),
}
