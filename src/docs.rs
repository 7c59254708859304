use iceapple_config::auth::DEFAULT_ACCESS_TOKEN_COOKIE;
use iceapple_core::ErrorResponse;
use iceapple_models::layout::PageData;
use iceapple_models::reservations::{
    AdminReservationRequest, ApiMessageResponse, Reservation, ReservationsResponse,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::layout::controller::get_login_page,
        crate::modules::layout::controller::get_authenticated_page,
        crate::modules::reservations::controller::get_all_reservations,
        crate::modules::reservations::controller::create_reservation,
        crate::modules::reservations::controller::update_reservation,
        crate::modules::reservations::controller::delete_reservation,
    ),
    components(
        schemas(
            PageData,
            Reservation,
            AdminReservationRequest,
            ReservationsResponse,
            ApiMessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Pages", description = "Page data for the admin panel"),
        (name = "Reservations", description = "Admin reservation management")
    ),
    info(
        title = "Iceapple Admin API",
        version = "0.1.0",
        description = "Backend for the iceapple place-reservation admin panel.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "access_token",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    DEFAULT_ACCESS_TOKEN_COOKIE,
                ))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.as_str() == "/dashboard"));
        assert!(paths.iter().any(|p| p.as_str() == "/admin/reservations"));
        assert!(
            paths
                .iter()
                .any(|p| p.as_str() == "/admin/reservations/{reservation_id}")
        );
    }

    #[test]
    fn test_openapi_has_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("access_token"));
    }
}
