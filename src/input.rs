//! Input loading
//!
//! Reads provider source data and profile JSON for the command-line tool.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TrendError, TrendResult};
use crate::models::{ProfileData, SourceData};

/// Environment variable naming the default profile file
pub const PROFILE_PATH_ENV: &str = "TRENDWEIGHT_PROFILE_PATH";

/// Parse the per-provider source data array
pub fn parse_source_data(json: &str) -> TrendResult<Vec<SourceData>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a profile document
pub fn parse_profile(json: &str) -> TrendResult<ProfileData> {
    Ok(serde_json::from_str(json)?)
}

fn read(path: &Path) -> TrendResult<String> {
    fs::read_to_string(path).map_err(|source| TrendError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load source data from a JSON file
pub fn load_source_data(path: &Path) -> TrendResult<Vec<SourceData>> {
    let data = parse_source_data(&read(path)?)?;
    tracing::info!("Loaded {} sources from {}", data.len(), path.display());
    Ok(data)
}

/// Load a profile from a JSON file
pub fn load_profile(path: &Path) -> TrendResult<ProfileData> {
    parse_profile(&read(path)?)
}

/// Profile path from the argument, falling back to the environment
pub fn resolve_profile_path(arg: Option<&str>) -> Option<PathBuf> {
    arg.map(PathBuf::from)
        .or_else(|| std::env::var(PROFILE_PATH_ENV).ok().map(PathBuf::from))
}

/// Load the profile at `path`, or the default profile when there is none
pub fn load_profile_or_default(path: Option<&Path>) -> TrendResult<ProfileData> {
    match path {
        Some(path) => load_profile(path),
        None => {
            tracing::info!("No profile given, using defaults (imperial, day starts at midnight)");
            Ok(ProfileData::default())
        }
    }
}
