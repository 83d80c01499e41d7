//! Heading-driven sectioning of HTML content
//!
//! A single forward pass over the document's headings wraps each one, and
//! the content following it, in a section container. Sections nest by
//! heading level, and a linked table of contents is optionally built in the
//! same pass.

pub mod ids;
pub mod nesting;
pub mod scanner;
pub mod text;
pub mod toc;

use std::error::Error;
use std::fmt;
use log::{debug, warn};

use crate::config::Settings;
use crate::hooks::{Filters, Hook, HookContext};

pub use ids::IdAllocator;
pub use nesting::{ContentBuffer, NestingState, Step, Transition};
pub use scanner::{scan_headings, HeadingRecord};
pub use text::Charset;
pub use toc::TocBuilder;

/// Placeholder in the section open marker replaced by the section ID
pub const ID_PLACEHOLDER: &str = "%id";

/// Heading levels that cannot be nested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    /// A heading is shallower than the first heading of the document
    DecreaseBelowRoot { from: u8, to: u8 },
    /// A heading is more than one level deeper than its predecessor
    LevelSkip { from: u8, to: u8 },
}

impl StructureError {
    /// HTML comment explaining why the content was left unsectioned
    pub fn diagnostic(&self) -> String {
        match self {
            StructureError::DecreaseBelowRoot { .. } => {
                "\n<!-- It appears you started with a heading that is larger than one following it. -->\n"
                    .to_string()
            }
            StructureError::LevelSkip { from, to } => format!(
                "\n<!-- Headings must only be incremented one at a time! You went from <h{}> to <h{}> -->\n",
                from, to
            ),
        }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::DecreaseBelowRoot { from, to } => write!(
                f,
                "heading <h{}> after <h{}> is shallower than the first heading",
                to, from
            ),
            StructureError::LevelSkip { from, to } => write!(
                f,
                "headings must only be incremented one at a time, went from <h{}> to <h{}>",
                from, to
            ),
        }
    }
}

impl Error for StructureError {}

/// Result of a successful transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sectionized {
    /// Rewritten content, preceded by the TOC when one was included
    pub html: String,
    /// Section IDs in document order; empty when nothing was rewritten
    pub ids: Vec<String>,
    /// Whether a table of contents was prepended
    pub toc_included: bool,
}

impl Sectionized {
    fn unchanged(content: &str) -> Self {
        Self {
            html: content.to_string(),
            ids: Vec::new(),
            toc_included: false,
        }
    }

    /// Whether the content was left as it came in
    pub fn is_unchanged(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Wrap headings in nested sections, failing on unnestable heading levels
///
/// Content without headings, or with sectioning disabled, is returned as is.
/// On error nothing is rewritten.
pub fn sectionize(
    content: &str,
    settings: &Settings,
    filters: &Filters,
) -> Result<Sectionized, StructureError> {
    if settings.disabled {
        debug!("Sectionizing disabled, leaving content untouched");
        return Ok(Sectionized::unchanged(content));
    }

    let headings = scan_headings(content);
    if headings.is_empty() {
        debug!("No headings found, leaving content untouched");
        return Ok(Sectionized::unchanged(content));
    }

    let include_toc = settings.includes_toc(headings.len());
    debug!(
        "Found {} headings, table of contents {}",
        headings.len(),
        if include_toc { "included" } else { "omitted" }
    );

    let prefix = settings.id_prefix.as_str();
    let mut allocator = IdAllocator::new();
    let mut nesting = NestingState::new();
    let mut buffer = ContentBuffer::new(content);
    let mut toc = include_toc.then(|| TocBuilder::new(filters, prefix));
    let mut ids = Vec::with_capacity(headings.len());

    for heading in &headings {
        let inner_html = heading.inner_html(content);
        let heading_text = text::heading_text(inner_html, settings.charset);

        let step = nesting.advance(heading.level)?;
        let level = nesting.level().unwrap_or(0);
        let id = allocator.allocate(&heading_text, prefix, level, filters);

        for _ in 0..step.closes {
            buffer.insert(heading.start, &settings.end_section);
        }

        if let Some(toc) = toc.as_mut() {
            toc.transition(step.transition);
            toc.item(&id, inner_html, &heading_text);
        }

        let marker = settings
            .start_section
            .replace(ID_PLACEHOLDER, &text::escape_attr(&id));
        let context = HookContext::new(prefix, level)
            .with_heading(&heading_text)
            .with_id(&id);
        let marker = filters.apply(Hook::StartSection, marker, &context);
        let at = buffer.insert(heading.start, &marker);
        debug!("Opened section '{}' at output byte {}", id, at);

        ids.push(id);
    }

    for _ in 0..nesting.unwind() {
        buffer.append(&settings.end_section);
    }
    debug!("Inserted {} bytes of section markup", buffer.inserted());

    let body = buffer.finish();
    let html = match toc {
        Some(toc) => format!(
            "{}{}{}{}",
            settings.before_toc,
            toc.finish(),
            settings.after_toc,
            body
        ),
        None => body,
    };

    Ok(Sectionized {
        html,
        ids,
        toc_included: include_toc,
    })
}

/// Wrap headings in nested sections
///
/// Never fails: when heading levels cannot be nested the original content is
/// returned behind an HTML comment describing the problem.
pub fn render(content: &str, settings: &Settings, filters: &Filters) -> String {
    match sectionize(content, settings, filters) {
        Ok(sectionized) => sectionized.html,
        Err(err) => {
            warn!("Leaving content unsectioned: {}", err);
            format!("{}{}", err.diagnostic(), content)
        }
    }
}
