use std::collections::HashSet;
use log::debug;

use crate::hooks::{Filters, Hook, HookContext};

/// Hands out section IDs that are unique within one document
#[derive(Debug, Default)]
pub struct IdAllocator {
    used: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the ID for a heading and reserve it
    ///
    /// The sanitized heading text is prefixed, run through the
    /// [`Hook::SectionId`] filters, then made unique.
    pub fn allocate(
        &mut self,
        heading_text: &str,
        prefix: &str,
        level: usize,
        filters: &Filters,
    ) -> String {
        let candidate = format!("{}{}", prefix, filters.sanitize(heading_text));
        let context = HookContext::new(prefix, level).with_heading(heading_text);
        let candidate = filters.apply(Hook::SectionId, candidate, &context);
        self.claim(candidate)
    }

    /// Reserve an ID, suffixing `-1`, `-2`, ... until it is unused
    pub fn claim(&mut self, id: String) -> String {
        let id = if self.used.contains(&id) {
            let unique = (1..)
                .map(|n| format!("{}-{}", id, n))
                .find(|candidate| !self.used.contains(candidate))
                .unwrap_or_default();
            debug!("Section ID '{}' already used, renamed to '{}'", id, unique);
            unique
        } else {
            id
        };

        self.used.insert(id.clone());
        id
    }

    /// Check whether an ID has been handed out
    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Number of IDs handed out
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_keeps_bare_slug() {
        let filters = Filters::default();
        let mut ids = IdAllocator::new();

        assert_eq!(ids.allocate("Overview", "section-", 0, &filters), "section-overview");
        assert_eq!(ids.allocate("Overview", "section-", 1, &filters), "section-overview-1");
        assert_eq!(ids.allocate("Overview", "section-", 1, &filters), "section-overview-2");
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_suffix_skips_taken_values() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.claim("a-1".to_string()), "a-1");
        assert_eq!(ids.claim("a".to_string()), "a");
        assert_eq!(ids.claim("a".to_string()), "a-2");
        assert!(ids.contains("a-2"));
    }

    #[test]
    fn test_id_filter_runs_before_collision_check() {
        let filters = Filters::empty().with(Hook::SectionId, |id, ctx| {
            assert_eq!(ctx.prefix, "s-");
            assert_eq!(ctx.heading_text, Some("Intro"));
            id.to_uppercase()
        });
        let mut ids = IdAllocator::new();

        assert_eq!(ids.allocate("Intro", "s-", 0, &filters), "S-INTRO");
        assert_eq!(ids.allocate("Intro", "s-", 0, &filters), "S-INTRO-1");
    }

    #[test]
    fn test_empty_slug_uses_prefix() {
        let filters = Filters::default();
        let mut ids = IdAllocator::new();

        assert_eq!(ids.allocate("!!!", "section-", 0, &filters), "section-");
        assert_eq!(ids.allocate("???", "section-", 0, &filters), "section--1");
    }
}
