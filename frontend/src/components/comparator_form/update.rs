//! Update function for the comparator form.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Input changes are stored as typed; nothing is validated until Compare.
//! - Manifest upload: the selected file is posted as multipart form data and
//!   the returned names become the selectable extension packs.
//! - Compare: validates locally first, so an incomplete form never reaches the
//!   backend, then posts the submission and publishes the returned document
//!   according to the backend's answer. An inline document waits for the
//!   "Open New Tab" click, since browsers block popups outside a user gesture.

use gloo_console::{error, log};
use gloo_net::http::Request;
use web_sys::FormData;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{CompareResponse, ErrorBody, Publication};
use common::validation::validate;

use super::helpers::{open_document_tab, show_toast};
use super::messages::Msg;
use super::state::ComparatorFormComponent;

const UPLOAD_URL: &str = "/api/extension_packs/upload";
const COMPARE_URL: &str = "/api/compare";

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` from async callbacks.
/// - Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(
    component: &mut ComparatorFormComponent,
    ctx: &Context<ComparatorFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetCredential(side, field, value) => {
            component.set_credential(side, field, value);
            true
        }
        Msg::SetCategory(category) => {
            component.set_category(category);
            component.error = None;
            true
        }
        Msg::ToggleItem(item) => {
            component.toggle_item(item);
            true
        }
        Msg::SetTech(tech) => {
            component.tech_to_compare = tech;
            true
        }
        Msg::SetEmail(email) => {
            component.email_id = email;
            true
        }
        Msg::ManifestSelected(file) => {
            let form = match FormData::new() {
                Ok(form) => form,
                Err(err) => {
                    error!(err);
                    return false;
                }
            };
            if let Err(err) = form.append_with_blob_and_filename("file", &file, &file.name()) {
                error!(err);
                return false;
            }

            component.uploading = true;
            component.upload_error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = match Request::post(UPLOAD_URL).body(form) {
                    Ok(request) => request.send().await,
                    Err(err) => Err(err),
                };

                match response {
                    Ok(resp) if resp.status() == 200 => match resp.json::<Vec<String>>().await {
                        Ok(names) => link.send_message(Msg::ManifestLoaded(names)),
                        Err(err) => link.send_message(Msg::ManifestFailed(err.to_string())),
                    },
                    Ok(resp) => {
                        let text = resp.text().await.unwrap_or_default();
                        let message = text.strip_prefix("Error: ").unwrap_or(&text).to_string();
                        link.send_message(Msg::ManifestFailed(message));
                    }
                    Err(err) => link.send_message(Msg::ManifestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::ManifestLoaded(names) => {
            log!(format!("Manifest lists {} extension packs", names.len()));
            component.manifest_loaded(names);
            true
        }
        Msg::ManifestFailed(message) => {
            component.manifest_failed(message);
            true
        }
        Msg::Compare => {
            let request = component.to_request();
            if let Err(err) = validate(&request) {
                component.error = Some(err.to_string());
                return true;
            }

            component.error = None;
            component.submitting = true;
            component.pending_document = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = match Request::post(COMPARE_URL).json(&request) {
                    Ok(request) => request.send().await,
                    Err(err) => Err(err),
                };

                match response {
                    Ok(resp) if resp.status() == 200 => match resp.json::<CompareResponse>().await {
                        Ok(body) => link.send_message(Msg::CompareSucceeded(body)),
                        Err(err) => link.send_message(Msg::CompareFailed(err.to_string())),
                    },
                    Ok(resp) if resp.status() == 422 => {
                        let message = match resp.json::<ErrorBody>().await {
                            Ok(body) => body.error,
                            Err(err) => err.to_string(),
                        };
                        link.send_message(Msg::CompareFailed(message));
                    }
                    Ok(resp) => {
                        let text = resp.text().await.unwrap_or_default();
                        link.send_message(Msg::CompareFailed(text));
                    }
                    Err(err) => link.send_message(Msg::CompareFailed(err.to_string())),
                }
            });
            true
        }
        Msg::CompareSucceeded(response) => {
            component.submitting = false;
            match response.publication {
                Publication::Saved { path } => {
                    show_toast(&format!("Comparison request opened from {}", path));
                }
                Publication::Inline => component.hold_document(response.document),
                // The backend logged the failure; the form shows no confirmation.
                Publication::NotConfirmed => {}
            }
            true
        }
        Msg::CompareFailed(message) => {
            component.submitting = false;
            component.error = Some(message);
            true
        }
        Msg::OpenDocument => {
            let Some(document) = component.take_document() else {
                return false;
            };
            if let Err(err) = open_document_tab(document.as_str()) {
                let reason = err.as_string().unwrap_or_else(|| "unknown error".to_string());
                error!(err);
                component.error = Some(format!("Could not open a new tab: {reason}"));
                component.hold_document(document);
            }
            true
        }
    }
}
