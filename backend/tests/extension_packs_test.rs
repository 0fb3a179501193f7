//! Manifest upload tests.

mod support;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use comparator_backend::config::JSON_LIMIT_BYTES;
use comparator_backend::services;
use support::{multipart_body, multipart_content_type};

async fn upload(parts: &[(&str, Option<&str>, &str)]) -> (StatusCode, Vec<u8>) {
    let app = test::init_service(App::new().configure(services::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/extension_packs/upload")
        .insert_header(("content-type", multipart_content_type()))
        .set_payload(multipart_body(parts))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, body.to_vec())
}

#[actix_web::test]
async fn lists_one_board_names() {
    let (status, body) = upload(&[(
        "file",
        Some("packs.json"),
        r#"[{"OneBoardName":"A"},{"OneBoardName":"B"}]"#,
    )])
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(names, vec!["A", "B"]);
}

#[actix_web::test]
async fn entry_without_name_is_unknown() {
    let (status, body) = upload(&[("file", Some("packs.json"), r#"[{"Other":"x"}]"#)]).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(names, vec!["Unknown"]);
}

#[actix_web::test]
async fn invalid_json_is_reported() {
    let (status, body) = upload(&[("file", Some("packs.json"), "[{not json")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = String::from_utf8(body).unwrap();
    assert!(message.starts_with("Error: Invalid JSON file."), "{message}");
}

#[actix_web::test]
async fn other_fields_are_ignored() {
    let (status, body) = upload(&[
        ("note", None, "ignored"),
        ("file", Some("PACKS.JSON"), r#"[{"OneBoardName":"C"}]"#),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(names, vec!["C"]);
}

#[actix_web::test]
async fn non_json_filename_is_refused() {
    let (status, body) = upload(&[("file", Some("packs.csv"), "[]")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Error: The file must end with .json");
}

#[actix_web::test]
async fn missing_file_is_refused() {
    let (status, body) = upload(&[("note", None, "no manifest here")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Error: Missing file");
}

#[actix_web::test]
async fn oversized_manifest_is_refused() {
    let content = format!("[{}]", " ".repeat(JSON_LIMIT_BYTES));
    let (status, body) = upload(&[("file", Some("big.json"), &content)]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Error: The file is too large");
}
