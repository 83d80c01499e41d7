use log::debug;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::{BoxResult, SectionizeError};

/// A document split into its front matter and body
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Parsed front matter (default when the document has none)
    pub front_matter: FrontMatter,
    /// Front matter block exactly as written, delimiters included
    pub raw_front_matter: &'a str,
    /// Content following the front matter
    pub body: &'a str,
}

impl<'a> Document<'a> {
    /// Split off and parse the front matter of a document
    pub fn parse(content: &'a str) -> BoxResult<Self> {
        let Some((yaml, body_start)) = split_front_matter(content) else {
            return Ok(Document {
                front_matter: FrontMatter::default(),
                raw_front_matter: "",
                body: content,
            });
        };

        Ok(Document {
            front_matter: parse(yaml)?,
            raw_front_matter: &content[..body_start],
            body: &content[body_start..],
        })
    }
}

/// Check if content has front matter
pub fn has_front_matter(content: &str) -> bool {
    split_front_matter(content).is_some()
}

/// Locate the front matter block
///
/// Returns the YAML between the `---` delimiters and the byte offset where
/// the body starts.
pub fn split_front_matter(content: &str) -> Option<(&str, usize)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;
    let header_len = content.len() - rest.len();

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(|c| c == '\n' || c == '\r') == "---" {
            return Some((&rest[..offset], header_len + offset + line.len()));
        }
        offset += line.len();
    }

    debug!("Front matter opened but never closed, treating it as content");
    None
}

/// Parse front matter YAML
pub fn parse(yaml: &str) -> BoxResult<FrontMatter> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yaml::from_str::<FrontMatter>(yaml)
        .map_err(|e| SectionizeError::FrontMatter(format!("Error parsing front matter: {}", e)).into())
}
