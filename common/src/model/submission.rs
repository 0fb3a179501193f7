use crate::model::category::Category;
use crate::model::credentials::OrgCredentials;
use crate::model::tech::TechToCompare;
use serde::{Deserialize, Serialize};

/// Everything the form collected for one press of "Compare".
///
/// Built fresh from the form state on each submission and consumed by
/// [`crate::process`]; nothing about it is kept afterwards except the
/// rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub source: OrgCredentials,
    pub target: OrgCredentials,
    pub category: Category,
    /// Component names or extension pack names, in the order they were picked.
    pub selected_items: Vec<String>,
    pub tech_to_compare: TechToCompare,
    pub email_id: String,
}
