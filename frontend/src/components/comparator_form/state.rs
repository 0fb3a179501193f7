//! Component state for the comparator request form.
//!
//! Holds the current value of every input, the extension pack names read from
//! the last uploaded manifest, and the inline error shown above the Compare
//! button. A `SubmissionRequest` is assembled from this state on each Compare.

use common::model::category::{Category, COMPONENTS};
use common::model::credentials::OrgCredentials;
use common::model::document::GeneratedDocument;
use common::model::submission::SubmissionRequest;
use common::model::tech::TechToCompare;
use web_sys::HtmlInputElement;
use yew::NodeRef;

use super::messages::{CredentialField, Side};

pub struct ComparatorFormComponent {
    pub source: OrgCredentials,
    pub target: OrgCredentials,
    pub category: Category,

    /// Names from the last manifest that parsed. Empty until one does.
    pub extension_names: Vec<String>,

    /// Picked items, in the order they were picked.
    pub selected_items: Vec<String>,

    pub tech_to_compare: TechToCompare,
    pub email_id: String,

    /// Validation or server message shown inline; the form stays editable.
    pub error: Option<String>,

    /// Parse or upload failure for the manifest input.
    pub upload_error: Option<String>,

    pub uploading: bool,
    pub submitting: bool,

    /// Inline-mode document waiting for the "Open New Tab" click.
    pub pending_document: Option<GeneratedDocument>,

    /// Reference to the manifest `<input type="file">`, cleared after each
    /// upload so picking the same file again still fires `onchange`.
    pub file_input_ref: NodeRef,
}

impl ComparatorFormComponent {
    pub fn new() -> Self {
        Self {
            source: OrgCredentials::default(),
            target: OrgCredentials::default(),
            category: Category::default(),
            extension_names: Vec::new(),
            selected_items: Vec::new(),
            tech_to_compare: TechToCompare::default(),
            email_id: String::new(),
            error: None,
            upload_error: None,
            uploading: false,
            submitting: false,
            pending_document: None,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Items the user can pick for the current category.
    pub fn selectable_items(&self) -> Vec<String> {
        match self.category {
            Category::Component => COMPONENTS.iter().map(|c| c.to_string()).collect(),
            Category::ExtensionPack => self.extension_names.clone(),
        }
    }

    pub fn set_credential(&mut self, side: Side, field: CredentialField, value: String) {
        let creds = match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        };
        match field {
            CredentialField::Username => creds.username = value,
            CredentialField::Password => creds.password = value.into(),
            CredentialField::Organization => creds.organization = value,
        }
    }

    /// Switches category; the previous selection does not carry over.
    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            self.category = category;
            self.selected_items.clear();
        }
    }

    /// Replaces the extension packs on offer after a manifest upload.
    pub fn set_extension_names(&mut self, names: Vec<String>) {
        self.extension_names = names;
        self.selected_items.clear();
    }

    /// A manifest upload came back with `names`.
    pub fn manifest_loaded(&mut self, names: Vec<String>) {
        self.finish_upload();
        self.upload_error = None;
        self.set_extension_names(names);
    }

    /// A manifest upload was refused; nothing stays selectable.
    pub fn manifest_failed(&mut self, message: String) {
        self.finish_upload();
        self.upload_error = Some(message);
        self.set_extension_names(Vec::new());
    }

    fn finish_upload(&mut self) {
        self.uploading = false;
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    /// Keeps an inline-mode document until the user asks for the tab.
    ///
    /// Browsers only allow `window.open` inside a click, so the tab cannot be
    /// opened when the compare response arrives.
    pub fn hold_document(&mut self, document: GeneratedDocument) {
        self.pending_document = Some(document);
    }

    pub fn take_document(&mut self) -> Option<GeneratedDocument> {
        self.pending_document.take()
    }

    /// Adds `item` to the end of the selection, or removes it if already picked.
    pub fn toggle_item(&mut self, item: String) {
        if let Some(pos) = self.selected_items.iter().position(|i| *i == item) {
            self.selected_items.remove(pos);
        } else {
            self.selected_items.push(item);
        }
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected_items.iter().any(|i| i == item)
    }

    /// Snapshot of the form as a submission.
    pub fn to_request(&self) -> SubmissionRequest {
        SubmissionRequest {
            source: self.source.clone(),
            target: self.target.clone(),
            category: self.category,
            selected_items: self.selected_items.clone(),
            tech_to_compare: self.tech_to_compare,
            email_id: self.email_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_category_offers_the_catalogue() {
        let form = ComparatorFormComponent::new();
        assert_eq!(
            form.selectable_items(),
            vec!["Picking", "Packing", "DC Order", "Inventory", "Items"]
        );
    }

    #[test]
    fn extension_pack_category_offers_manifest_names() {
        let mut form = ComparatorFormComponent::new();
        form.set_category(Category::ExtensionPack);
        assert!(form.selectable_items().is_empty());

        form.set_extension_names(vec!["A".into(), "B".into()]);
        assert_eq!(form.selectable_items(), vec!["A", "B"]);
    }

    #[test]
    fn failed_upload_leaves_nothing_to_pick() {
        let mut form = ComparatorFormComponent::new();
        form.set_category(Category::ExtensionPack);
        form.uploading = true;
        form.manifest_loaded(vec!["A".into(), "B".into()]);
        form.toggle_item("A".into());

        form.uploading = true;
        form.manifest_failed("Invalid JSON file.".into());

        assert!(form.selectable_items().is_empty());
        assert!(form.selected_items.is_empty());
        assert_eq!(form.upload_error.as_deref(), Some("Invalid JSON file."));
        assert!(!form.uploading);
    }

    #[test]
    fn loaded_manifest_clears_previous_upload_error() {
        let mut form = ComparatorFormComponent::new();
        form.set_category(Category::ExtensionPack);
        form.manifest_failed("Missing file".into());

        form.uploading = true;
        form.manifest_loaded(vec!["C".into()]);

        assert_eq!(form.selectable_items(), vec!["C"]);
        assert!(form.upload_error.is_none());
        assert!(!form.uploading);
    }

    #[test]
    fn inline_document_is_held_until_taken() {
        let mut form = ComparatorFormComponent::new();
        form.hold_document(GeneratedDocument::new("<h1>x</h1>".to_string()));

        let document = form.take_document().unwrap();
        assert_eq!(document.as_str(), "<h1>x</h1>");
        assert!(form.take_document().is_none());
    }

    #[test]
    fn toggling_keeps_pick_order() {
        let mut form = ComparatorFormComponent::new();
        form.toggle_item("Items".into());
        form.toggle_item("Picking".into());
        form.toggle_item("Packing".into());
        form.toggle_item("Picking".into());

        assert_eq!(form.selected_items, vec!["Items", "Packing"]);
        assert!(!form.is_selected("Picking"));
    }

    #[test]
    fn changing_category_clears_selection() {
        let mut form = ComparatorFormComponent::new();
        form.toggle_item("Picking".into());
        form.set_category(Category::ExtensionPack);

        assert!(form.selected_items.is_empty());
    }

    #[test]
    fn request_reflects_inputs() {
        let mut form = ComparatorFormComponent::new();
        form.set_credential(Side::Source, CredentialField::Username, "u1".into());
        form.set_credential(Side::Source, CredentialField::Password, "p1".into());
        form.set_credential(Side::Target, CredentialField::Organization, "orgB".into());
        form.email_id = "e@x.com".into();
        form.toggle_item("Picking".into());

        let request = form.to_request();
        assert_eq!(request.source.username, "u1");
        assert_eq!(request.source.password.expose(), "p1");
        assert_eq!(request.target.organization, "orgB");
        assert_eq!(request.selected_items, vec!["Picking"]);
        assert_eq!(request.email_id, "e@x.com");
    }
}
