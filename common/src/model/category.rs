use serde::{Deserialize, Serialize};
use std::fmt;

/// Components offered when the category is [`Category::Component`].
pub const COMPONENTS: [&str; 5] = ["Picking", "Packing", "DC Order", "Inventory", "Items"];

/// What kind of items the comparison is scoped to.
///
/// Serialized with the same label the form shows (`"Extension Pack"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Component,
    #[serde(rename = "Extension Pack")]
    ExtensionPack,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Component, Category::ExtensionPack];

    pub fn label(self) -> &'static str {
        match self {
            Category::Component => "Component",
            Category::ExtensionPack => "Extension Pack",
        }
    }

    /// Looks a category up by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// File name prefix for persisted documents: the label without whitespace.
    pub fn file_prefix(self) -> String {
        self.label().split_whitespace().collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
