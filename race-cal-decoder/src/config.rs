//! Tag grammar configuration
//!
//! Decides which tags open a new record. Event and circuit tags open a record
//! in any file, while the broadcaster tag only opens one inside a
//! `<broadcasters>` container; in an events file `<broadcaster>` is a plain
//! field holding the broadcaster codes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Record boundary rules for the tag-file parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGrammar {
    /// Tags that start a record regardless of container
    #[serde(default = "default_record_tags")]
    pub record_tags: Vec<String>,

    /// Container tag -> tag that starts a record only inside that container
    #[serde(default = "default_gated_record_tags")]
    pub gated_record_tags: HashMap<String, String>,
}

fn default_record_tags() -> Vec<String> {
    vec!["event".to_string(), "circuit".to_string()]
}

fn default_gated_record_tags() -> HashMap<String, String> {
    HashMap::from([("broadcasters".to_string(), "broadcaster".to_string())])
}

impl Default for TagGrammar {
    fn default() -> Self {
        Self {
            record_tags: default_record_tags(),
            gated_record_tags: default_gated_record_tags(),
        }
    }
}

impl TagGrammar {
    /// Create the default calendar grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grammar without any record tags
    pub fn empty() -> Self {
        Self {
            record_tags: Vec::new(),
            gated_record_tags: HashMap::new(),
        }
    }

    /// Builder method: add a tag that always starts a record
    pub fn with_record_tag(mut self, tag: impl Into<String>) -> Self {
        self.record_tags.push(tag.into());
        self
    }

    /// Builder method: add a tag that starts a record only inside `container`
    pub fn with_gated_record_tag(
        mut self,
        container: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        self.gated_record_tags.insert(container.into(), tag.into());
        self
    }

    /// The container-gated record tag for a container, if any
    pub fn record_tag_for(&self, container: &str) -> Option<&str> {
        self.gated_record_tags.get(container).map(String::as_str)
    }

    /// Check if `tag` opens a new record in a file wrapped by `container`
    pub fn is_record_start(&self, container: &str, tag: &str) -> bool {
        self.record_tags.iter().any(|t| t == tag) || self.record_tag_for(container) == Some(tag)
    }
}
