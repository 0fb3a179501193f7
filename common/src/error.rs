use thiserror::Error;

/// Reasons a submission is refused before anything is rendered.
///
/// The `Display` text is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields before proceeding.")]
    MissingField { field: &'static str },

    #[error("For Extended Attribute, source and destination organizations should be different.")]
    SameOrganization,
}

/// Failures while reading an uploaded extension pack manifest.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON file. Please upload a valid JSON file which contains OneBoardName.")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid manifest. The JSON file must contain an array of objects.")]
    NotAnArray,

    #[error("Invalid manifest. Entry {index} is not a JSON object.")]
    NotAnObject { index: usize },
}
