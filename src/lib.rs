//! Sectionize: nests flat HTML headings into section elements
//!
//! Headings are wrapped, together with the content that follows them, in
//! section containers nested by heading level. A table of contents linking
//! to every section can be prepended.
//!
//! ```
//! use sectionize::{render, Filters, Settings};
//!
//! let settings = Settings { include_toc_threshold: -1, ..Settings::default() };
//! let html = render("<h1>A</h1>x<h2>B</h2>y", &settings, &Filters::default());
//! assert_eq!(
//!     html,
//!     "<section id=\"section-a\"><h1>A</h1>x<section id=\"section-b\"><h2>B</h2>y</section></section>"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod front_matter;
pub mod hooks;
pub mod sections;
pub mod utils;

pub use config::{Config, DocumentOverrides, Overrides, Settings};
pub use hooks::{Filters, Hook, HookContext};
pub use sections::{render, sectionize, Charset, Sectionized, StructureError};
