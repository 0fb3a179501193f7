//! Checks a submission must pass before it is rendered.
//!
//! A field counts as missing only when it is empty; whitespace is kept as the
//! user typed it.

use crate::error::ValidationError;
use crate::model::submission::SubmissionRequest;
use crate::model::tech::TechToCompare;

pub fn validate(request: &SubmissionRequest) -> Result<(), ValidationError> {
    let required = [
        ("source username", request.source.username.is_empty()),
        ("source password", request.source.password.is_empty()),
        ("source organization", request.source.organization.is_empty()),
        ("target username", request.target.username.is_empty()),
        ("target password", request.target.password.is_empty()),
        ("target organization", request.target.organization.is_empty()),
        ("email id", request.email_id.is_empty()),
        ("selected items", request.selected_items.is_empty()),
    ];

    if let Some((field, _)) = required.into_iter().find(|(_, missing)| *missing) {
        return Err(ValidationError::MissingField { field });
    }

    // Extended attributes are compared across organizations, never within one.
    if request.tech_to_compare == TechToCompare::ExtendedAttribute
        && request.source.organization == request.target.organization
    {
        return Err(ValidationError::SameOrganization);
    }

    Ok(())
}
