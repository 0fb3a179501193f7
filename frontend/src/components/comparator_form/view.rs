//! View rendering for the comparator form.
//!
//! Two columns of credentials (source and target organization), then the
//! category with its item picker, the tech selector, the email input and the
//! Compare button. For extension packs the picker is fed by an uploaded
//! manifest instead of the fixed component list.

use common::model::category::Category;
use common::model::tech::TechToCompare;
use common::render::TITLE;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{CredentialField, Msg, Side};
use super::state::ComparatorFormComponent;

pub fn view(component: &ComparatorFormComponent, ctx: &Context<ComparatorFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="comparator-root">
            <h1>{ TITLE }</h1>
            <div class="org-columns">
                { build_org_column(component, link, Side::Source) }
                { build_org_column(component, link, Side::Target) }
            </div>
            { build_category_select(component, link) }
            { build_item_picker(component, link) }
            { build_tech_select(component, link) }
            { text_input("Email ID", "text", &component.email_id, link.callback(Msg::SetEmail)) }
            {
                if let Some(error) = &component.error {
                    html! { <div class="form-error">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <button
                class="compare-btn"
                disabled={component.submitting}
                onclick={link.callback(|_| Msg::Compare)}
            >
                {"Compare"}
            </button>
            {
                if component.pending_document.is_some() {
                    html! {
                        <button class="open-tab-btn" onclick={link.callback(|_| Msg::OpenDocument)}>
                            {"Open New Tab"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Username, password and organization inputs for one side.
fn build_org_column(
    component: &ComparatorFormComponent,
    link: &Scope<ComparatorFormComponent>,
    side: Side,
) -> Html {
    let (title, prefix, creds) = match side {
        Side::Source => ("Source Organisation", "Source", &component.source),
        Side::Target => ("Target Organisation", "Target", &component.target),
    };

    html! {
        <div class="org-column">
            <h3>{ title }</h3>
            { text_input(&format!("{prefix} Username"), "text", &creds.username,
                link.callback(move |v: String| Msg::SetCredential(side, CredentialField::Username, v))) }
            { text_input(&format!("{prefix} Password"), "password", creds.password.expose(),
                link.callback(move |v: String| Msg::SetCredential(side, CredentialField::Password, v))) }
            { text_input(&format!("{prefix} Organisation"), "text", &creds.organization,
                link.callback(move |v: String| Msg::SetCredential(side, CredentialField::Organization, v))) }
        </div>
    }
}

fn build_category_select(
    component: &ComparatorFormComponent,
    link: &Scope<ComparatorFormComponent>,
) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Category::from_label(&value).map(Msg::SetCategory)
    });

    html! {
        <div class="field">
            <label>{"Category"}</label>
            <select {onchange}>
                { for Category::ALL.iter().map(|c| html! {
                    <option value={c.label()} selected={*c == component.category}>{ c.label() }</option>
                }) }
            </select>
        </div>
    }
}

/// Component checkboxes, or the manifest upload plus its extension packs.
fn build_item_picker(
    component: &ComparatorFormComponent,
    link: &Scope<ComparatorFormComponent>,
) -> Html {
    let (label, upload) = match component.category {
        Category::Component => ("Select Components", html! {}),
        Category::ExtensionPack => ("Select Extension Packs", build_manifest_upload(component, link)),
    };

    let items = component.selectable_items();
    let checkboxes = items
        .into_iter()
        .map(|item| {
            let checked = component.is_selected(&item);
            let toggled = item.clone();
            html! {
                <label>
                    <input
                        type="checkbox"
                        {checked}
                        onchange={link.callback(move |_| Msg::ToggleItem(toggled.clone()))}
                    />
                    { item }
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <>
            { upload }
            <div class="field item-list">
                <label>{ label }</label>
                { checkboxes }
            </div>
        </>
    }
}

fn build_manifest_upload(
    component: &ComparatorFormComponent,
    link: &Scope<ComparatorFormComponent>,
) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::ManifestSelected)
    });

    html! {
        <div class="field">
            <label>{"Upload JSON file"}</label>
            <input
                type="file"
                accept=".json,application/json"
                ref={component.file_input_ref.clone()}
                disabled={component.uploading}
                {onchange}
            />
            {
                if let Some(error) = &component.upload_error {
                    html! { <div class="form-error">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_tech_select(
    component: &ComparatorFormComponent,
    link: &Scope<ComparatorFormComponent>,
) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        TechToCompare::from_label(&value).map(Msg::SetTech)
    });

    html! {
        <div class="field">
            <label>{"Tech to Compare"}</label>
            <select {onchange}>
                { for TechToCompare::ALL.iter().map(|t| html! {
                    <option value={t.label()} selected={*t == component.tech_to_compare}>{ t.label() }</option>
                }) }
            </select>
        </div>
    }
}

/// Labelled `<input>` reporting its value on every keystroke.
fn text_input(label: &str, input_type: &'static str, value: &str, on_value: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_value.emit(e.target_unchecked_into::<HtmlInputElement>().value());
    });

    html! {
        <div class="field">
            <label>{ label.to_string() }</label>
            <input type={input_type} value={value.to_string()} {oninput} />
        </div>
    }
}
