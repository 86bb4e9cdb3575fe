pub mod config;
pub mod discover;
pub mod insights;
pub mod recommend;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success(output: String) -> Self {
        Self { exit_code: 0, output }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { exit_code: 1, output: message.into() }
    }
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = fs::read_to_string(path)
        .map_err(|error| format!("could not read `{}`: {error}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|error| format!("could not parse `{}`: {error}", path.display()))
}

pub(crate) fn render_json<T: serde::Serialize>(value: &T) -> CommandResult {
    match serde_json::to_string_pretty(value) {
        Ok(output) => CommandResult::success(output),
        Err(error) => CommandResult::failure(format!("serialization failed: {error}")),
    }
}
