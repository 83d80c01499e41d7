//! Filter hooks for the sectionize transform
//!
//! Every piece of markup the transform emits passes through a named hook.
//! Callers register filters against a hook to rewrite that markup; a hook
//! with no filters leaves its value untouched.

pub mod registry;

pub use registry::{Filter, Filters, Sanitizer};

/// Extension points of the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Computed section ID (prefix included), before collision resolution
    SectionId,
    /// Section open marker, after `%id` substitution
    StartSection,
    /// TOC list opening tag
    StartTocList,
    /// TOC list closing tag
    EndTocList,
    /// TOC item opening tag
    StartTocItem,
    /// TOC item closing tag
    EndTocItem,
    /// Complete TOC anchor markup
    TocLink,
    /// Link text inside a TOC anchor
    TocText,
}

impl Hook {
    /// All hooks, in the order the transform first reaches them
    pub const ALL: [Hook; 8] = [
        Hook::SectionId,
        Hook::StartTocList,
        Hook::StartTocItem,
        Hook::TocText,
        Hook::TocLink,
        Hook::StartSection,
        Hook::EndTocItem,
        Hook::EndTocList,
    ];

    /// Get the name of the hook
    pub fn name(&self) -> &'static str {
        match self {
            Hook::SectionId => "sectionize_id",
            Hook::StartSection => "sectionize_start_section",
            Hook::StartTocList => "sectionize_start_toc_list",
            Hook::EndTocList => "sectionize_end_toc_list",
            Hook::StartTocItem => "sectionize_start_toc_item",
            Hook::EndTocItem => "sectionize_end_toc_item",
            Hook::TocLink => "sectionize_toc_link",
            Hook::TocText => "sectionize_toc_text",
        }
    }
}

/// Context passed to filters alongside the value being filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookContext<'a> {
    /// Current nesting depth (0 for top-level sections)
    pub level: usize,
    /// Configured ID prefix
    pub prefix: &'a str,
    /// Decoded, tag-free heading text, when the hook fires for a heading
    pub heading_text: Option<&'a str>,
    /// Final section ID, once it has been allocated
    pub id: Option<&'a str>,
}

impl<'a> HookContext<'a> {
    /// Create a context for the given depth
    pub fn new(prefix: &'a str, level: usize) -> Self {
        Self {
            level,
            prefix,
            heading_text: None,
            id: None,
        }
    }

    /// Attach the heading text
    pub fn with_heading(mut self, text: &'a str) -> Self {
        self.heading_text = Some(text);
        self
    }

    /// Attach the allocated section ID
    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}
