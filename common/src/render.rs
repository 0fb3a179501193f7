//! HTML summary of a submission.
//!
//! Values are interpolated as they are, without entity escaping, so markup in
//! a field ends up as markup in the document. Passwords are written in
//! plaintext.

use crate::model::document::GeneratedDocument;
use crate::model::submission::SubmissionRequest;

pub const TITLE: &str = "MAWM CODE COMPARATOR";

pub fn render(request: &SubmissionRequest) -> GeneratedDocument {
    let mut html = format!("<h1>{TITLE}</h1>");
    html.push_str("<h2>User Inputs:</h2>");

    push_paragraph(&mut html, "Source Username", &request.source.username);
    push_paragraph(&mut html, "Source Password", request.source.password.expose());
    push_paragraph(&mut html, "Source Organisation", &request.source.organization);
    push_paragraph(&mut html, "Target Username", &request.target.username);
    push_paragraph(&mut html, "Target Password", request.target.password.expose());
    push_paragraph(&mut html, "Target Organisation", &request.target.organization);
    push_paragraph(&mut html, "Email ID", &request.email_id);
    push_paragraph(&mut html, "Category", request.category.label());

    if !request.selected_items.is_empty() {
        html.push_str("<p>Selected Items:</p>");
        html.push_str("<ul>");
        for item in &request.selected_items {
            html.push_str(&format!("<li>{item}</li>"));
        }
        html.push_str("</ul>");
    }

    push_paragraph(&mut html, "Tech to Compare", request.tech_to_compare.label());

    GeneratedDocument::new(html)
}

fn push_paragraph(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("<p>{label}: {value}</p>"));
}
