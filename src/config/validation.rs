use log::{warn, debug};

use crate::config::Config;
use crate::sections::{Charset, ID_PLACEHOLDER};
use crate::utils::error::{BoxResult, SectionizeError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_markers(config)?;
    validate_threshold(config);
    validate_charset(config)?;
    Ok(())
}

/// Validate the section markers
fn validate_markers(config: &Config) -> BoxResult<()> {
    if config.start_section.is_empty() {
        return Err(SectionizeError::Config(
            "start_section must not be empty".to_string()
        ).into());
    }

    if config.end_section.is_empty() {
        return Err(SectionizeError::Config(
            "end_section must not be empty".to_string()
        ).into());
    }

    if !config.start_section.contains(ID_PLACEHOLDER) {
        warn!(
            "start_section '{}' has no {} placeholder, sections will not carry their IDs",
            config.start_section, ID_PLACEHOLDER
        );
    }

    Ok(())
}

/// Validate the TOC threshold
fn validate_threshold(config: &Config) {
    if config.include_toc_threshold < -1 {
        warn!(
            "include_toc_threshold {} is below -1, the table of contents is disabled",
            config.include_toc_threshold
        );
    }
    debug!("TOC threshold: {}", config.include_toc_threshold);
}

/// Validate the document charset
fn validate_charset(config: &Config) -> BoxResult<()> {
    let charset: Charset = config.charset.parse()
        .map_err(SectionizeError::Config)?;
    debug!("Charset: {}", charset);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_markers_are_invalid() {
        let config = Config {
            start_section: String::new(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            end_section: String::new(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_marker_without_placeholder_is_allowed() {
        let config = Config {
            start_section: "<section>".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_low_threshold_is_allowed() {
        let config = Config {
            include_toc_threshold: -5,
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_charset_is_invalid() {
        let config = Config {
            charset: "EBCDIC".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("EBCDIC"));
    }
}
