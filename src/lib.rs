pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod uploads;

use crate::db::connection::PgPool;
use crate::uploads::ImageStore;
use actix_web::web;

/// Everything a handler needs, built once at startup and injected into each
/// request. Handlers hold no other state.
pub struct AppState {
    pub pool: PgPool,
    pub image_store: ImageStore,
}

/// The full route table. Shared between the binary and the service tests so
/// both exercise the same wiring.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health))
        .route("/products", web::get().to(handlers::products::list_products))
        .route("/products", web::post().to(handlers::products::create_product))
        .route(
            "/products/category/{id}",
            web::get().to(handlers::products::list_by_category),
        )
        .route(
            "/products/{id}",
            web::delete().to(handlers::products::delete_product),
        )
        .route("/categories", web::get().to(handlers::categories::list_categories))
        .route("/categories", web::post().to(handlers::categories::create_category))
        .route(
            "/categories/{id}",
            web::delete().to(handlers::categories::delete_category),
        )
        .route("/sliders", web::get().to(handlers::sliders::list_sliders))
        .route("/sliders", web::post().to(handlers::sliders::create_slider))
        .route(
            "/sliders/{id}",
            web::delete().to(handlers::sliders::delete_slider),
        )
        .route("/orders", web::get().to(handlers::orders::list_orders))
        .route("/orders", web::post().to(handlers::orders::create_order))
        .route(
            "/orders/{id}/status",
            web::put().to(handlers::orders::update_order_status),
        )
        .route("/orders/{id}", web::delete().to(handlers::orders::delete_order))
        .route("/promo", web::get().to(handlers::promo::get_promo))
        .route("/promo", web::put().to(handlers::promo::update_promo));
}
