use stockpilot_core::config::{AppConfig, LoadOptions};

use super::CommandResult;

/// Render the effective configuration, secrets redacted.
pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return CommandResult::failure(format!("config validation failed: {error}")),
    };

    let api_key = if config.insight.api_key.is_some() { "<redacted>" } else { "<unset>" };

    let lines = [
        "effective config (source precedence: overrides > env > file > default):".to_string(),
        format!("server.bind_address = {}", config.server.bind_address),
        format!("server.port = {}", config.server.port),
        format!("server.request_timeout_secs = {}", config.server.request_timeout_secs),
        format!("insight.api_key = {api_key}"),
        format!("insight.base_url = {}", config.insight.base_url),
        format!("insight.model = {}", config.insight.model),
        format!("insight.timeout_secs = {}", config.insight.timeout_secs),
        format!("insight.max_retries = {}", config.insight.max_retries),
        format!("logging.level = {}", config.logging.level),
        format!("logging.format = {:?}", config.logging.format),
    ];

    CommandResult::success(lines.join("\n"))
}
