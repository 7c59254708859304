use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_access_token;
use crate::modules::layout::controller::page_not_found;
use crate::modules::layout::{init_authenticated_pages_router, init_public_pages_router};
use crate::modules::reservations::init_admin_reservations_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(init_public_pages_router())
        .merge(init_authenticated_pages_router().route_layer(
            middleware::from_fn_with_state(state.clone(), require_access_token),
        ))
        .nest("/admin/reservations", init_admin_reservations_router())
        .fallback(page_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // credentials are required for the access-token cookie to be sent cross-origin
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
