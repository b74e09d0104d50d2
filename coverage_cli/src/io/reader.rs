use std::path::Path;

use coverage_core::ProcessCov;
use ignore::WalkBuilder;

use crate::error::CliError;

/// Walks `dir` collecting every `*.json` file and deserializing it as a
/// `ProcessCov`. Returns the reports in discovery order.
pub fn read_reports(dir: &Path) -> Result<Vec<ProcessCov>, CliError> {
    let json_paths = WalkBuilder::new(dir)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|file_type| file_type.is_file()))
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("json"))
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();

    if json_paths.is_empty() {
        return Err(CliError::NoInputFiles(dir.to_path_buf()));
    }

    let mut reports = Vec::with_capacity(json_paths.len());
    for path in json_paths {
        log::debug!("reading {}", path.display());
        let raw = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        let report = serde_json::from_str(&raw).map_err(|source| CliError::Json { path, source })?;
        reports.push(report);
    }
    Ok(reports)
}
