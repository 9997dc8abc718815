//! Profile document writer.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::AppError;

/// Writes the profile document as pretty-printed JSON to
/// `<output_dir>/profile_<interview_id>.json`, creating the directory if
/// needed. Returns the written path.
pub fn write_profile(
    output_dir: &Path,
    interview_id: &str,
    profile: &Value,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(format!("profile_{interview_id}.json"));
    let pretty = serde_json::to_string_pretty(profile)
        .map_err(|e| anyhow::anyhow!("failed to serialize profile: {e}"))?;
    fs::write(&path, pretty)?;

    Ok(path)
}
