use serde_yaml::Value;

use crate::cli::types::Commands;
use crate::config::Config;
use crate::utils::error::{BoxResult, SectionizeError};
use crate::utils::fs;

/// Handle the config command
pub fn handle_config_command(command: &Commands, config: &Config) -> BoxResult<()> {
    if let Commands::Config { key } = command {
        let yaml = describe_config(config, key.as_deref())?;
        fs::write_output(None, &yaml)?;
    }
    Ok(())
}

/// Render the configuration, or a single key of it, as YAML
pub fn describe_config(config: &Config, key: Option<&str>) -> BoxResult<String> {
    let yaml = serde_yaml::to_value(config)?;
    let value = match key {
        Some(key) => get_value(&yaml, key).ok_or_else(|| {
            SectionizeError::Config(format!("Key not found: {}", key))
        })?,
        None => &yaml,
    };
    Ok(serde_yaml::to_string(value)?)
}

fn get_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Mapping(map) => map.get(&Value::String(key.to_string())),
        _ => None,
    }
}
