use axum::{
    Extension, Json,
    extract::OriginalUri,
    http::StatusCode,
};
use iceapple_models::layout::{AuthenticatedLayoutData, PageData};
use tracing::instrument;

use super::service::LayoutService;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Login page data", body = PageData)
    ),
    tag = "Pages"
)]
#[instrument]
pub async fn get_login_page(OriginalUri(uri): OriginalUri) -> Json<PageData> {
    Json(LayoutService::page_data(uri.path(), None))
}

/// Serves `/dashboard`, `/place` and `/projects`; only reached once the
/// access-token guard has let the request through.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Authenticated page data (also served for /place and /projects)", body = PageData),
        (status = 307, description = "No access token cookie, redirected to /")
    ),
    tag = "Pages",
    security(("access_token" = []))
)]
#[instrument(skip(layout))]
pub async fn get_authenticated_page(
    OriginalUri(uri): OriginalUri,
    Extension(layout): Extension<AuthenticatedLayoutData>,
) -> Json<PageData> {
    Json(LayoutService::page_data(uri.path(), Some(&layout)))
}

/// Any path without a page still gets root layout data, with the fallback title.
#[instrument]
pub async fn page_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<PageData>) {
    (
        StatusCode::NOT_FOUND,
        Json(LayoutService::page_data(uri.path(), None)),
    )
}
