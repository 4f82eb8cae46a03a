//! consent-api
//!
//! HTTP surface the consent wizard calls: POSSUM catalogs and scoring,
//! and assembly of the outbound consent-generation request.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use config::ApiConfig;

/// Build the application router.
pub fn app(config: &ApiConfig) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/possum/catalogs", get(routes::possum::list_catalogs))
        .route("/possum/catalogs/{kind}", get(routes::possum::get_catalog))
        .route("/possum/score", post(routes::possum::score_selection))
        .route("/consent/request", post(routes::consent::build_request))
        .layer(axum_mw::from_fn(middleware::request_log::request_log));

    if config.cors_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}
