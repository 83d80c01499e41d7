use crate::hooks::{Filters, Hook, HookContext};

use super::nesting::Transition;
use super::text;

/// Builds the nested `<ol>` table of contents alongside the section rewrite
///
/// Tracks its own depth, driven by the same transitions as the nesting
/// engine so both stay in step.
pub struct TocBuilder<'f> {
    filters: &'f Filters,
    prefix: &'f str,
    level: usize,
    markup: String,
}

impl<'f> TocBuilder<'f> {
    /// Start a TOC with its outermost list open
    pub fn new(filters: &'f Filters, prefix: &'f str) -> Self {
        let mut builder = Self {
            filters,
            prefix,
            level: 0,
            markup: String::new(),
        };
        builder.push(Hook::StartTocList, "<ol>");
        builder
    }

    /// Current list depth
    pub fn level(&self) -> usize {
        self.level
    }

    fn push(&mut self, hook: Hook, markup: &str) {
        let context = HookContext::new(self.prefix, self.level);
        let filtered = self.filters.apply(hook, markup.to_string(), &context);
        self.markup.push_str(&filtered);
    }

    /// Open or close lists for the move to the next heading
    pub fn transition(&mut self, transition: Transition) {
        match transition {
            Transition::First => {}
            Transition::Deeper => {
                self.push(Hook::StartTocList, "<ol>");
                self.level += 1;
            }
            Transition::Sibling => self.push(Hook::EndTocItem, "</li>"),
            Transition::Shallower(steps) => {
                self.level = self.level.saturating_sub(steps);
                self.push(Hook::EndTocItem, "</li>");
                for _ in 0..steps {
                    self.push(Hook::EndTocList, "</ol>");
                    self.push(Hook::EndTocItem, "</li>");
                }
            }
        }
    }

    /// Add the list item linking to a section; the item stays open
    pub fn item(&mut self, id: &str, inner_html: &str, heading_text: &str) {
        self.push(Hook::StartTocItem, "<li>");

        let context = HookContext::new(self.prefix, self.level)
            .with_heading(heading_text)
            .with_id(id);
        let link_text = self.filters.apply(Hook::TocText, inner_html.to_string(), &context);
        let link = format!("<a href=\"#{}\">{}</a>", text::escape_attr(id), link_text);
        let link = self.filters.apply(Hook::TocLink, link, &context);
        self.markup.push_str(&link);
    }

    /// Close every open item and list and return the markup
    pub fn finish(mut self) -> String {
        loop {
            self.push(Hook::EndTocItem, "</li>");
            self.push(Hook::EndTocList, "</ol>");
            if self.level == 0 {
                break;
            }
            self.level -= 1;
        }
        self.markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_list() {
        let filters = Filters::default();
        let mut toc = TocBuilder::new(&filters, "s-");

        toc.transition(Transition::First);
        toc.item("s-a", "A", "A");
        toc.transition(Transition::Sibling);
        toc.item("s-b", "B:", "B:");

        assert_eq!(
            toc.finish(),
            "<ol><li><a href=\"#s-a\">A</a></li><li><a href=\"#s-b\">B</a></li></ol>"
        );
    }

    #[test]
    fn test_multi_level_drop_interleaving() {
        let filters = Filters::empty();
        let mut toc = TocBuilder::new(&filters, "");

        toc.transition(Transition::First);
        toc.item("a", "A", "A");
        toc.transition(Transition::Deeper);
        toc.item("b", "B", "B");
        toc.transition(Transition::Deeper);
        toc.item("c", "C", "C");
        assert_eq!(toc.level(), 2);
        toc.transition(Transition::Shallower(2));
        assert_eq!(toc.level(), 0);
        toc.item("d", "D", "D");

        assert_eq!(
            toc.finish(),
            concat!(
                "<ol><li><a href=\"#a\">A</a>",
                "<ol><li><a href=\"#b\">B</a>",
                "<ol><li><a href=\"#c\">C</a>",
                "</li></ol></li></ol></li>",
                "<li><a href=\"#d\">D</a></li></ol>"
            )
        );
    }

    #[test]
    fn test_list_hooks_receive_level() {
        let filters = Filters::empty()
            .with(Hook::StartTocList, |_, c| format!("<ul data-level=\"{}\">", c.level))
            .with(Hook::EndTocList, |_, _| "</ul>".to_string());
        let mut toc = TocBuilder::new(&filters, "");

        toc.transition(Transition::First);
        toc.item("a", "A", "A");
        toc.transition(Transition::Deeper);
        toc.item("b", "B", "B");

        assert_eq!(
            toc.finish(),
            concat!(
                "<ul data-level=\"0\"><li><a href=\"#a\">A</a>",
                "<ul data-level=\"0\"><li><a href=\"#b\">B</a>",
                "</li></ul></li></ul>"
            )
        );
    }

    #[test]
    fn test_drop_routes_every_close_through_hooks() {
        let filters = Filters::empty()
            .with(Hook::EndTocItem, |_, c| format!("</li:{}>", c.level))
            .with(Hook::EndTocList, |_, c| format!("</ol:{}>", c.level));
        let mut toc = TocBuilder::new(&filters, "");

        toc.transition(Transition::First);
        toc.item("a", "A", "A");
        toc.transition(Transition::Deeper);
        toc.item("b", "B", "B");
        toc.transition(Transition::Deeper);
        toc.item("c", "C", "C");
        toc.transition(Transition::Shallower(2));
        toc.item("d", "D", "D");

        assert_eq!(
            toc.finish(),
            concat!(
                "<ol><li><a href=\"#a\">A</a>",
                "<ol><li><a href=\"#b\">B</a>",
                "<ol><li><a href=\"#c\">C</a>",
                "</li:0></ol:0></li:0></ol:0></li:0>",
                "<li><a href=\"#d\">D</a>",
                "</li:0></ol:0>"
            )
        );
    }

    #[test]
    fn test_link_hooks() {
        let filters = Filters::empty()
            .with(Hook::TocText, |t, c| format!("{} ({})", t, c.heading_text.unwrap_or("")))
            .with(Hook::TocLink, |link, c| format!("{}<!-- {} -->", link, c.id.unwrap_or("")));
        let mut toc = TocBuilder::new(&filters, "");

        toc.transition(Transition::First);
        toc.item("q-a", "Q&amp;A", "Q&A");

        assert_eq!(
            toc.finish(),
            "<ol><li><a href=\"#q-a\">Q&amp;A (Q&A)</a><!-- q-a --></li></ol>"
        );
    }

    #[test]
    fn test_id_is_attribute_escaped() {
        let filters = Filters::empty();
        let mut toc = TocBuilder::new(&filters, "");
        toc.item("a\"b", "x", "x");
        assert!(toc.finish().contains("href=\"#a&quot;b\""));
    }
}
