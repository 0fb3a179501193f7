use crate::config::JSON_LIMIT_BYTES;
use crate::errors::AppError;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, ResponseError};
use common::manifest::extension_names;
use futures_util::StreamExt;
use log::{info, warn};

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with the extension pack names as a JSON array.
/// - On failure: returns `400 Bad Request` with the error message.
pub async fn process(payload: Multipart) -> impl Responder {
    match upload_manifest(payload).await {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(e) => {
            warn!("Manifest upload rejected: {}", e);
            e.error_response()
        }
    }
}

/// Reads the `file` part of the upload and lists the extension packs it names.
pub async fn upload_manifest(payload: Multipart) -> Result<Vec<String>, AppError> {
    let (filename, bytes) = read_file_part(payload).await?;
    let names = extension_names(&bytes)?;
    info!("Manifest {} lists {} extension packs", filename, names.len());
    Ok(names)
}

async fn read_file_part(mut payload: Multipart) -> Result<(String, Vec<u8>), AppError> {
    let mut manifest: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if field_name.as_deref() != Some("file") {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();

        if !filename.to_ascii_lowercase().ends_with(".json") {
            return Err(AppError::Upload("The file must end with .json".to_string()));
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > JSON_LIMIT_BYTES {
                return Err(AppError::Upload("The file is too large".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }
        manifest = Some((filename, bytes));
    }

    manifest.ok_or_else(|| AppError::Upload("Missing file".to_string()))
}
