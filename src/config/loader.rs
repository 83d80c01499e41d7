use std::path::{Path, PathBuf};
use std::fs;
use log::debug;
use serde_yaml::Value;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, SectionizeError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_sectionize.yml", "_sectionize.yaml", "_sectionize.toml"];

/// Load sectionize configuration from config files
///
/// Later files override earlier ones key by key; keys set nowhere keep
/// their defaults.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    // Load configuration from specified files or defaults
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    let mut merged = Value::Mapping(Default::default());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let file_value = read_config_file(&path)?;
            merge_values(&mut merged, file_value);
        }
    }

    let config: Config = serde_yaml::from_value(merged)
        .map_err(|e| SectionizeError::Config(format!("Invalid configuration: {}", e)))?;

    // Validate the config
    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read a configuration file into a generic value
fn read_config_file(config_path: &Path) -> BoxResult<Value> {
    if !config_path.exists() {
        return Err(SectionizeError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| SectionizeError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let ext = config_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    let value = match ext.as_deref() {
        // Assume YAML if no extension
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path)?,
        Some("toml") => parse_toml_config(&content, config_path)?,
        Some("json") => parse_json_config(&content, config_path)?,
        Some(other) => {
            return Err(SectionizeError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    match value {
        Value::Mapping(_) => Ok(value),
        // An empty YAML file parses to null
        Value::Null => Ok(Value::Mapping(Default::default())),
        _ => Err(SectionizeError::Config(format!(
            "Configuration file {} must contain a mapping", config_path.display()
        )).into()),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Value> {
    serde_yaml::from_str::<Value>(content)
        .map_err(|e| SectionizeError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Value> {
    let table: toml::Value = toml::from_str(content)
        .map_err(|e| SectionizeError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))?;
    Ok(serde_yaml::to_value(table)?)
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Value> {
    let json: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| SectionizeError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))?;
    Ok(serde_yaml::to_value(json)?)
}

/// Merge a configuration value into the accumulated one, key by key
fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Mapping(target_map), Value::Mapping(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}
