mod types;
mod loader;
mod resolve;
pub mod defaults;
pub mod validation;

pub use types::*;
pub use loader::load_config;
pub use resolve::Settings;
