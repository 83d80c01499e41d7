//! Registry of filters attached to each hook

use std::collections::HashMap;
use std::fmt;
use log::debug;

use super::{Hook, HookContext};
use crate::sections::text;

/// A filter rewrites the value passing through a hook
pub type Filter = Box<dyn Fn(String, &HookContext<'_>) -> String + Send + Sync>;

/// Turns decoded heading text into a URL-safe slug
pub type Sanitizer = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Filters registered per hook, applied in registration order
pub struct Filters {
    /// Filter chains indexed by hook
    chains: HashMap<Hook, Vec<Filter>>,
    /// Title sanitizer used to build section IDs
    sanitizer: Sanitizer,
}

impl Filters {
    /// Create a registry with no filters and the default title sanitizer
    pub fn empty() -> Self {
        Self {
            chains: HashMap::new(),
            sanitizer: Box::new(text::sanitize_title),
        }
    }

    /// Register a filter on a hook
    pub fn add<F>(&mut self, hook: Hook, filter: F) -> &mut Self
    where
        F: Fn(String, &HookContext<'_>) -> String + Send + Sync + 'static,
    {
        debug!("Registering filter on {}", hook.name());
        self.chains.entry(hook).or_default().push(Box::new(filter));
        self
    }

    /// Builder form of [`Filters::add`]
    pub fn with<F>(mut self, hook: Hook, filter: F) -> Self
    where
        F: Fn(String, &HookContext<'_>) -> String + Send + Sync + 'static,
    {
        self.add(hook, filter);
        self
    }

    /// Replace the title sanitizer
    pub fn with_sanitizer<F>(mut self, sanitizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// Remove every filter registered on a hook
    pub fn clear(&mut self, hook: Hook) {
        self.chains.remove(&hook);
    }

    /// Number of filters registered on a hook
    pub fn len(&self, hook: Hook) -> usize {
        self.chains.get(&hook).map_or(0, Vec::len)
    }

    /// Check if a hook has no filters
    pub fn is_empty(&self, hook: Hook) -> bool {
        self.len(hook) == 0
    }

    /// Run a value through every filter on a hook
    pub fn apply(&self, hook: Hook, value: String, context: &HookContext<'_>) -> String {
        match self.chains.get(&hook) {
            Some(chain) => chain.iter().fold(value, |acc, filter| filter(acc, context)),
            None => value,
        }
    }

    /// Slugify heading text with the configured sanitizer
    pub fn sanitize(&self, text: &str) -> String {
        (self.sanitizer)(text)
    }
}

impl Default for Filters {
    /// The default registry strips markup and a trailing colon from TOC link text
    fn default() -> Self {
        Self::empty().with(Hook::TocText, |value, _| text::default_toc_text(&value))
    }
}

impl fmt::Debug for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for hook in Hook::ALL.iter() {
            let count = self.len(*hook);
            if count > 0 {
                map.entry(&hook.name(), &count);
            }
        }
        map.finish()
    }
}
