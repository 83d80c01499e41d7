use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::DocumentOverrides;

/// Front matter of a document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Document title
    pub title: Option<String>,

    /// Per-document sectionize settings
    #[serde(default)]
    pub sectionize: Option<DocumentOverrides>,

    /// Custom front matter fields
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Sectionize overrides declared by the document, if any
    pub fn overrides(&self) -> Option<&DocumentOverrides> {
        self.sectionize.as_ref()
    }
}
