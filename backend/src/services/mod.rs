pub mod compare;
pub mod extension_packs;

use actix_web::web;

/// Registers every API scope on an `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(compare::configure_routes())
        .service(extension_packs::configure_routes());
}
