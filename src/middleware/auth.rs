use std::fmt;

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use iceapple_config::AuthConfig;
use iceapple_core::AppError;
use iceapple_models::layout::AuthenticatedLayoutData;

use crate::state::AppState;

/// Returns the access-token cookie value, treating an empty value as absent.
pub fn read_access_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Option<&'a str> {
    jar.get(cookie_name)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
}

/// Load hook of the authenticated area: a presence check on the access-token
/// cookie. Authenticity, expiry and signature are not checked.
pub fn authenticated_layout(
    jar: &CookieJar,
    config: &AuthConfig,
) -> Result<AuthenticatedLayoutData, Redirect> {
    match read_access_token(jar, &config.access_token_cookie) {
        Some(_) => Ok(AuthenticatedLayoutData::authenticated()),
        None => Err(Redirect::temporary(&config.login_path)),
    }
}

/// Guards the authenticated page group.
///
/// Visitors without the cookie get a 307 to the login page and the inner
/// handler never runs. Otherwise [`AuthenticatedLayoutData`] is made available
/// to the page handler through request extensions.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::auth::require_access_token;
///
/// let pages = Router::new()
///     .route("/dashboard", get(page_data))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_access_token));
/// ```
pub async fn require_access_token(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticated_layout(&jar, &state.auth_config) {
        Ok(layout) => {
            req.extensions_mut().insert(layout);
            next.run(req).await
        }
        Err(redirect) => redirect.into_response(),
    }
}

/// Extractor for API handlers that need the caller's access token.
///
/// Performs the same presence check as [`require_access_token`] but rejects
/// with 401, since an API client has no login page to be sent to.
#[derive(Clone)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

impl FromRequestParts<AppState> for AccessToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        read_access_token(&jar, &state.auth_config.access_token_cookie)
            .map(|token| AccessToken(token.to_string()))
            .ok_or_else(|| AppError::unauthorized(anyhow!("Missing access token")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use axum_extra::extract::cookie::Cookie;

    fn jar_with(name: &'static str, value: &'static str) -> CookieJar {
        CookieJar::new().add(Cookie::new(name, value))
    }

    #[test]
    fn test_read_access_token_present() {
        let jar = jar_with("accessToken", "opaque-token");
        assert_eq!(read_access_token(&jar, "accessToken"), Some("opaque-token"));
    }

    #[test]
    fn test_read_access_token_missing() {
        let jar = jar_with("refreshToken", "something");
        assert_eq!(read_access_token(&jar, "accessToken"), None);
        assert_eq!(read_access_token(&CookieJar::new(), "accessToken"), None);
    }

    #[test]
    fn test_read_access_token_empty_is_absent() {
        let jar = jar_with("accessToken", "");
        assert_eq!(read_access_token(&jar, "accessToken"), None);
    }

    #[test]
    fn test_authenticated_layout_with_token() {
        let jar = jar_with("accessToken", "not-even-a-jwt");
        let layout = authenticated_layout(&jar, &AuthConfig::default()).unwrap();
        assert!(layout.is_authenticated);
    }

    #[test]
    fn test_authenticated_layout_without_token_redirects_to_root() {
        let redirect = authenticated_layout(&CookieJar::new(), &AuthConfig::default())
            .expect_err("missing cookie must redirect");
        let response = redirect.into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[test]
    fn test_authenticated_layout_uses_configured_cookie() {
        let config = AuthConfig {
            access_token_cookie: "session".to_string(),
            login_path: "/login".to_string(),
        };

        let jar = jar_with("accessToken", "token");
        let response = authenticated_layout(&jar, &config)
            .expect_err("wrong cookie name must redirect")
            .into_response();
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

        let jar = jar_with("session", "token");
        assert!(authenticated_layout(&jar, &config).is_ok());
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken("secret".to_string());
        assert_eq!(format!("{:?}", token), "AccessToken(..)");
        assert_eq!(token.as_str(), "secret");
    }
}
