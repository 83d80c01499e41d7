use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::front_matter::deserializers::{deserialize_bool_or_string, deserialize_int_or_string};

/// Global sectionize configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix prepended to the sanitized heading title to form section IDs
    #[serde(default = "defaults::default_id_prefix")]
    pub id_prefix: String,

    /// Markup inserted before each section; `%id` becomes the section ID
    #[serde(default = "defaults::default_start_section")]
    pub start_section: String,

    /// Markup inserted after each section
    #[serde(default = "defaults::default_end_section")]
    pub end_section: String,

    /// Minimum number of headings before a TOC is included (-1 means never)
    #[serde(default = "defaults::default_include_toc_threshold")]
    pub include_toc_threshold: i64,

    /// Markup prepended to the TOC
    #[serde(default = "defaults::default_before_toc")]
    pub before_toc: String,

    /// Markup appended to the TOC
    #[serde(default = "defaults::default_after_toc")]
    pub after_toc: String,

    /// Leave every document untouched
    #[serde(default = "defaults::default_disabled")]
    pub disabled: bool,

    /// Character set used when decoding entities in heading text
    #[serde(default = "defaults::default_charset")]
    pub charset: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            id_prefix: defaults::default_id_prefix(),
            start_section: defaults::default_start_section(),
            end_section: defaults::default_end_section(),
            include_toc_threshold: defaults::default_include_toc_threshold(),
            before_toc: defaults::default_before_toc(),
            after_toc: defaults::default_after_toc(),
            disabled: defaults::default_disabled(),
            charset: defaults::default_charset(),
        }
    }
}

/// Per-document overrides, read from a document's front matter
///
/// Empty strings count as unset so a blank front matter entry falls back
/// to the global value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOverrides {
    pub id_prefix: Option<String>,
    pub start_section: Option<String>,
    pub end_section: Option<String>,
    #[serde(deserialize_with = "deserialize_int_or_string")]
    pub include_toc_threshold: Option<i64>,
    pub before_toc: Option<String>,
    pub after_toc: Option<String>,
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub disabled: Option<bool>,
}

/// Overrides supplied by the caller of a single transform
///
/// These win over both document and global values, and are taken as given
/// even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub id_prefix: Option<String>,
    pub start_section: Option<String>,
    pub end_section: Option<String>,
    pub include_toc_threshold: Option<i64>,
    pub before_toc: Option<String>,
    pub after_toc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("id_prefix: \"s-\"\ninclude_toc_threshold: -1\n").unwrap();
        assert_eq!(config.id_prefix, "s-");
        assert_eq!(config.include_toc_threshold, -1);
        assert_eq!(config.start_section, "<section id=\"%id\">");
        assert_eq!(config.charset, "UTF-8");
        assert!(!config.disabled);
    }

    #[test]
    fn test_document_overrides_from_yaml() {
        let overrides: DocumentOverrides = serde_yaml::from_str("disabled: true\nbefore_toc: ''\n").unwrap();
        assert_eq!(overrides.disabled, Some(true));
        assert_eq!(overrides.before_toc, Some(String::new()));
        assert_eq!(overrides.id_prefix, None);
    }
}
