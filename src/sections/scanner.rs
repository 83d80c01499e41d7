use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OPEN_HEADING_REGEX: Regex = Regex::new(r"(?i)<h([1-6])\b[^>]*>").unwrap();

    /// Closing tag patterns, indexed by heading level minus one
    static ref CLOSE_HEADING_REGEXES: Vec<Regex> = (1..=6)
        .map(|level| Regex::new(&format!(r"(?i)</h{}\s*>", level)).unwrap())
        .collect();
}

/// A heading element located in the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Heading rank, 1 through 6
    pub level: u8,
    /// Byte offset of the opening tag
    pub start: usize,
    /// Byte range of the markup between the opening and closing tags
    pub inner: Range<usize>,
    /// Byte offset just past the closing tag
    pub end: usize,
}

impl HeadingRecord {
    /// Markup between the heading's tags
    pub fn inner_html<'a>(&self, content: &'a str) -> &'a str {
        &content[self.inner.clone()]
    }
}

/// Find every heading element in document order
///
/// A heading only matches when it is closed by a tag of the same level;
/// headings may span lines and nest other markup.
pub fn scan_headings(content: &str) -> Vec<HeadingRecord> {
    let mut headings = Vec::new();
    let mut pos = 0;

    while let Some(caps) = OPEN_HEADING_REGEX.captures_at(content, pos) {
        let (Some(open), Some(digit)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let level = digit.as_str().as_bytes()[0] - b'0';

        match CLOSE_HEADING_REGEXES[usize::from(level) - 1].find_at(content, open.end()) {
            Some(close) => {
                headings.push(HeadingRecord {
                    level,
                    start: open.start(),
                    inner: open.end()..close.start(),
                    end: close.end(),
                });
                pos = close.end();
            }
            // Unclosed heading: try again from the next byte, `<` is one byte wide
            None => pos = open.start() + 1,
        }
    }

    headings
}
