pub mod types;
pub mod deserializers;
pub mod parser;

// Re-export the most common items for convenience
pub use types::FrontMatter;
pub use parser::{parse, has_front_matter, split_front_matter, Document};
