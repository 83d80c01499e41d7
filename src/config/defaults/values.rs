/// Default prefix prepended to every section ID
pub fn default_id_prefix() -> String {
    "section-".to_string()
}

/// Default markup opening a section, `%id` is replaced by the section ID
pub fn default_start_section() -> String {
    "<section id=\"%id\">".to_string()
}

/// Default markup closing a section
pub fn default_end_section() -> String {
    "</section>".to_string()
}

/// Default minimum heading count for a table of contents (-1 disables it)
pub fn default_include_toc_threshold() -> i64 {
    2
}

/// Default markup placed before the table of contents
pub fn default_before_toc() -> String {
    "<nav class=\"toc\">".to_string()
}

/// Default markup placed after the table of contents
pub fn default_after_toc() -> String {
    "</nav>".to_string()
}

/// Sectionizing is enabled unless switched off
pub fn default_disabled() -> bool {
    false
}

/// Default document character set
pub fn default_charset() -> String {
    "UTF-8".to_string()
}
