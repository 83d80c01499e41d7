use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();

    static ref ENTITY_REGEX: Regex = Regex::new(
        r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);"
    ).unwrap();
}

/// Longest slug the default title sanitizer produces, in bytes
pub const MAX_SLUG_LEN: usize = 200;

/// Character set the document is declared in
///
/// Governs which entities may be decoded when computing section IDs: an
/// entity whose character cannot be represented in the charset stays encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl Charset {
    /// Look up a charset by one of its common labels
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Charset::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Some(Charset::Latin1),
            "us-ascii" | "ascii" => Some(Charset::Ascii),
            _ => None,
        }
    }

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
        }
    }

    fn can_represent(&self, c: char) -> bool {
        match self {
            Charset::Utf8 => true,
            Charset::Latin1 => (c as u32) <= 0xFF,
            Charset::Ascii => c.is_ascii(),
        }
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::from_label(s).ok_or_else(|| format!("Unsupported charset: {}", s))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strip HTML tags from text
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Decode HTML entities, keeping those the charset cannot represent
pub fn decode_entities(text: &str, charset: Charset) -> String {
    if charset == Charset::Utf8 {
        return html_escape::decode_html_entities(text).into_owned();
    }

    ENTITY_REGEX
        .replace_all(text, |caps: &Captures| {
            let decoded = html_escape::decode_html_entities(&caps[0]);
            if decoded.chars().all(|c| charset.can_represent(c)) {
                decoded.into_owned()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Plain heading text: tags stripped and entities decoded
pub fn heading_text(inner_html: &str, charset: Charset) -> String {
    decode_entities(&strip_tags(inner_html), charset)
}

/// Default title sanitizer: a dash-separated lowercase slug of bounded length
pub fn sanitize_title(text: &str) -> String {
    let mut slug = slug::slugify(text);
    if slug.len() > MAX_SLUG_LEN {
        let mut cut = MAX_SLUG_LEN;
        while !slug.is_char_boundary(cut) {
            cut -= 1;
        }
        slug.truncate(cut);
    }
    slug.trim_end_matches('-').to_string()
}

/// Escape a value for use inside a quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}

/// Default TOC link text: markup stripped and one trailing colon removed
pub fn default_toc_text(text: &str) -> String {
    let stripped = strip_tags(text);
    let trimmed = stripped.trim_end();
    trimmed.strip_suffix(':').unwrap_or(trimmed).trim().to_string()
}
