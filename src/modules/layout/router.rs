use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_authenticated_page, get_login_page};
use super::service::AUTHENTICATED_PAGES;

pub fn init_public_pages_router() -> Router<AppState> {
    Router::new().route("/", get(get_login_page))
}

/// Pages of the authenticated area. The caller wraps this in the access-token guard.
pub fn init_authenticated_pages_router() -> Router<AppState> {
    AUTHENTICATED_PAGES
        .into_iter()
        .fold(Router::new(), |router, path| {
            router.route(path, get(get_authenticated_page))
        })
}
