use crate::config::AppConfig;
use crate::errors::AppError;
use crate::publish::{self, browser::BrowserLauncher};
use actix_web::{web, HttpResponse};
use common::model::submission::SubmissionRequest;
use common::requests::CompareResponse;
use log::{info, warn};

/// Actix web handler for `POST /api/compare`.
pub(crate) async fn process(
    config: web::Data<AppConfig>,
    launcher: web::Data<dyn BrowserLauncher>,
    payload: web::Json<SubmissionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    info!("Source username entered: {}", request.source.username);
    info!("Target username entered: {}", request.target.username);

    let document = common::process(&request).inspect_err(|e| {
        warn!("Submission rejected: {:?}", e);
    })?;

    let publication = publish::publish(
        &document,
        request.category,
        config.get_ref(),
        launcher.get_ref(),
    );

    Ok(HttpResponse::Ok().json(CompareResponse {
        document,
        publication,
    }))
}
