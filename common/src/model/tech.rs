use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of artifact the comparison would target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechToCompare {
    #[default]
    Handler,
    #[serde(rename = "Service Definition")]
    ServiceDefinition,
    Metadata,
    #[serde(rename = "Extended Attribute")]
    ExtendedAttribute,
    #[serde(rename = "Message Types")]
    MessageTypes,
    #[serde(rename = "Application Parameter")]
    ApplicationParameter,
    #[serde(rename = "DSL")]
    Dsl,
}

impl TechToCompare {
    pub const ALL: [TechToCompare; 7] = [
        TechToCompare::Handler,
        TechToCompare::ServiceDefinition,
        TechToCompare::Metadata,
        TechToCompare::ExtendedAttribute,
        TechToCompare::MessageTypes,
        TechToCompare::ApplicationParameter,
        TechToCompare::Dsl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TechToCompare::Handler => "Handler",
            TechToCompare::ServiceDefinition => "Service Definition",
            TechToCompare::Metadata => "Metadata",
            TechToCompare::ExtendedAttribute => "Extended Attribute",
            TechToCompare::MessageTypes => "Message Types",
            TechToCompare::ApplicationParameter => "Application Parameter",
            TechToCompare::Dsl => "DSL",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for TechToCompare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_the_form_labels() {
        for tech in TechToCompare::ALL {
            let json = serde_json::to_string(&tech).unwrap();
            assert_eq!(json, format!("\"{}\"", tech.label()));
            assert_eq!(serde_json::from_str::<TechToCompare>(&json).unwrap(), tech);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(TechToCompare::from_label("Handlers"), None);
        assert!(serde_json::from_str::<TechToCompare>("\"Dsl\"").is_err());
    }
}
