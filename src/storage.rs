//! On-disk storage for analysis output and logs.
//!
//! Everything lives under a local `data` directory next to the binary's
//! working directory. Analysis requests are appended as one JSON object per
//! line so downstream tooling can tail the file.

use crate::analysis::AnalysisRequest;
use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the base data directory for the application, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dir = PathBuf::from("data");
    if !dir.exists() {
        fs::create_dir(&dir).wrap_err("Failed to create data directory")?;
    }
    Ok(dir)
}

/// Path of the analysis log file.
pub fn analysis_log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("analysis.jsonl"))
}

/// Path of the tracing log file.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("digitizer.log"))
}

/// Append one analysis request to the analysis log.
pub fn append_analysis(request: &AnalysisRequest) -> Result<()> {
    let path = analysis_log_path()?;
    append_analysis_to(&path, request)
}

/// Append one analysis request as a JSON line to the given file.
pub fn append_analysis_to(path: &Path, request: &AnalysisRequest) -> Result<()> {
    let json = serde_json::to_string(request).wrap_err("Failed to serialize analysis request")?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err(format!("Failed to open analysis log {:?}", path))?;
    writeln!(file, "{}", json).wrap_err(format!("Failed to write analysis log {:?}", path))?;
    Ok(())
}
