//! Configuration constants and profile loading for carline
//!
//! The backend address comes from, in order: the `--server` flag, the
//! `server` key of the selected profile, then [`DEFAULT_SERVER`].

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for carline
pub const DEFAULT_PROFILE_PATH: &str = "~/.carline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CARLINE_PROFILE_PATH";

/// Backend used when neither the command line nor the profile names one
pub const DEFAULT_SERVER: &str = "https://backengine-2dea.fly.dev";

const SERVER_KEY: &str = "server";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Read the `server` entry of `profile_name` from the INI file at `profile_path`
///
/// A missing file, section or key is not an error and yields `None`.
pub fn load_server(profile_name: &str, profile_path: &str) -> Result<Option<String>> {
    let expanded = shellexpand::tilde(profile_path);
    let path = Path::new(expanded.as_ref());
    if !path.exists() {
        tracing::debug!("Profile file '{}' not found", path.display());
        return Ok(None);
    }

    let ini = Ini::load_from_file(path)
        .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;
    let server = ini
        .section(Some(profile_name))
        .and_then(|section| section.get(SERVER_KEY))
        .map(str::trim)
        .filter(|server| !server.is_empty())
        .map(str::to_string);

    tracing::debug!("Profile '{}' server: {:?}", profile_name, server);
    Ok(server)
}

/// Pick the backend base URL and normalise it
pub fn resolve_server(cli_server: Option<&str>, profile_server: Option<&str>) -> String {
    cli_server
        .or(profile_server)
        .unwrap_or(DEFAULT_SERVER)
        .trim_end_matches('/')
        .to_string()
}
