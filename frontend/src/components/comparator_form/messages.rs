use common::model::category::Category;
use common::model::tech::TechToCompare;
use common::requests::CompareResponse;

/// Which organization a credential input belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
    Organization,
}

#[derive(Clone)]
pub enum Msg {
    SetCredential(Side, CredentialField, String),
    SetCategory(Category),
    ToggleItem(String),
    ManifestSelected(web_sys::File),
    ManifestLoaded(Vec<String>),
    ManifestFailed(String),
    SetTech(TechToCompare),
    SetEmail(String),
    Compare,
    CompareSucceeded(CompareResponse),
    CompareFailed(String),
    OpenDocument,
}
