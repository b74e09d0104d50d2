use std::io::Write;
use std::path::Path;

use coverage_core::ProcessCov;
use tempfile::NamedTempFile;

use crate::error::CliError;

/// Serializes `report` to `path`, writing through a temp file in the same
/// directory and renaming into place so a crash mid-write never leaves a
/// half-written coverage file behind.
pub fn write_report(path: &Path, report: &ProcessCov, pretty: bool) -> Result<(), CliError> {
    let body = if pretty {
        serde_json::to_vec_pretty(report)
    } else {
        serde_json::to_vec(report)
    }
    .map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    tmp.write_all(&body).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.persist(path).map_err(|err| CliError::Io {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
