use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use comparator_backend::config::{AppConfig, JSON_LIMIT_BYTES};
use comparator_backend::logging;
use comparator_backend::publish::browser::{BrowserLauncher, SystemBrowser};
use comparator_backend::services;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::default();
    logging::init(&config);

    let launcher: Arc<dyn BrowserLauncher> = Arc::new(SystemBrowser);
    let url = config.url();

    if config.open_browser_on_start {
        let launcher = Arc::clone(&launcher);
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            match launcher.open(&url) {
                Ok(()) => info!("Opened {} in the browser", url),
                Err(e) => error!("Could not open {} in the browser: {}", url, e),
            }
        });
    }

    info!("Server running at {}", url);

    let bind_addr = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    let launcher = web::Data::from(launcher);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT_BYTES))
            .app_data(config.clone())
            .app_data(launcher.clone())
            .configure(services::configure)
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind_addr)?
        .run()
        .await;

    info!("Server stopped");
    logging::shutdown();
    result
}
