use log::warn;

use crate::config::types::{Config, DocumentOverrides, Overrides};
use crate::sections::Charset;

/// Fully resolved values for one transform call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub id_prefix: String,
    pub start_section: String,
    pub end_section: String,
    pub include_toc_threshold: i64,
    pub before_toc: String,
    pub after_toc: String,
    pub disabled: bool,
    pub charset: Charset,
}

fn pick_string(call: &Option<String>, document: Option<&Option<String>>, global: &str) -> String {
    call.clone()
        .or_else(|| document.and_then(|d| d.clone()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| global.to_string())
}

impl Settings {
    /// Resolve each value: call-time override, then document override, then global config
    pub fn resolve(
        overrides: &Overrides,
        document: Option<&DocumentOverrides>,
        config: &Config,
    ) -> Self {
        let charset = Charset::from_label(&config.charset).unwrap_or_else(|| {
            warn!("Unknown charset '{}', decoding heading text as UTF-8", config.charset);
            Charset::Utf8
        });

        Settings {
            id_prefix: pick_string(
                &overrides.id_prefix,
                document.map(|d| &d.id_prefix),
                &config.id_prefix,
            ),
            start_section: pick_string(
                &overrides.start_section,
                document.map(|d| &d.start_section),
                &config.start_section,
            ),
            end_section: pick_string(
                &overrides.end_section,
                document.map(|d| &d.end_section),
                &config.end_section,
            ),
            include_toc_threshold: overrides
                .include_toc_threshold
                .or_else(|| document.and_then(|d| d.include_toc_threshold))
                .unwrap_or(config.include_toc_threshold),
            before_toc: pick_string(
                &overrides.before_toc,
                document.map(|d| &d.before_toc),
                &config.before_toc,
            ),
            after_toc: pick_string(
                &overrides.after_toc,
                document.map(|d| &d.after_toc),
                &config.after_toc,
            ),
            disabled: document.and_then(|d| d.disabled).unwrap_or(config.disabled),
            charset,
        }
    }

    /// Whether a document with this many headings gets a table of contents
    ///
    /// Any negative threshold disables the TOC.
    pub fn includes_toc(&self, heading_count: usize) -> bool {
        usize::try_from(self.include_toc_threshold)
            .map(|threshold| threshold <= heading_count)
            .unwrap_or(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::resolve(&Overrides::default(), None, &Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.id_prefix, "section-");
        assert_eq!(settings.start_section, "<section id=\"%id\">");
        assert_eq!(settings.end_section, "</section>");
        assert_eq!(settings.include_toc_threshold, 2);
        assert_eq!(settings.before_toc, "<nav class=\"toc\">");
        assert_eq!(settings.after_toc, "</nav>");
        assert!(!settings.disabled);
        assert_eq!(settings.charset, Charset::Utf8);
    }

    #[test]
    fn test_precedence() {
        let config = Config {
            id_prefix: "global-".to_string(),
            include_toc_threshold: 5,
            ..Config::default()
        };
        let document = DocumentOverrides {
            id_prefix: Some("doc-".to_string()),
            include_toc_threshold: Some(1),
            after_toc: Some("</aside>".to_string()),
            ..DocumentOverrides::default()
        };
        let overrides = Overrides {
            id_prefix: Some("call-".to_string()),
            ..Overrides::default()
        };

        let settings = Settings::resolve(&overrides, Some(&document), &config);
        assert_eq!(settings.id_prefix, "call-");
        assert_eq!(settings.include_toc_threshold, 1);
        assert_eq!(settings.after_toc, "</aside>");
        assert_eq!(settings.before_toc, "<nav class=\"toc\">");
    }

    #[test]
    fn test_empty_document_value_falls_back() {
        let document = DocumentOverrides {
            before_toc: Some(String::new()),
            ..DocumentOverrides::default()
        };
        let settings = Settings::resolve(&Overrides::default(), Some(&document), &Config::default());
        assert_eq!(settings.before_toc, "<nav class=\"toc\">");
    }

    #[test]
    fn test_empty_call_value_is_kept() {
        let overrides = Overrides {
            before_toc: Some(String::new()),
            ..Overrides::default()
        };
        let settings = Settings::resolve(&overrides, None, &Config::default());
        assert_eq!(settings.before_toc, "");
    }

    #[test]
    fn test_document_can_disable() {
        let document = DocumentOverrides {
            disabled: Some(true),
            ..DocumentOverrides::default()
        };
        assert!(Settings::resolve(&Overrides::default(), Some(&document), &Config::default()).disabled);
    }

    #[test]
    fn test_unknown_charset_falls_back_to_utf8() {
        let config = Config {
            charset: "EBCDIC".to_string(),
            ..Config::default()
        };
        let settings = Settings::resolve(&Overrides::default(), None, &config);
        assert_eq!(settings.charset, Charset::Utf8);
    }

    #[test]
    fn test_threshold_rule() {
        let with = |t: i64| Settings {
            include_toc_threshold: t,
            ..Settings::default()
        };
        assert!(with(2).includes_toc(3));
        assert!(with(3).includes_toc(3));
        assert!(!with(4).includes_toc(3));
        assert!(with(0).includes_toc(1));
        assert!(!with(-1).includes_toc(100));
        assert!(!with(-7).includes_toc(100));
    }
}
