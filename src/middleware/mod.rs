//! Middleware and extractors for request processing.
//!
//! # Modules
//!
//! - [`auth`]: access-token cookie guard for the authenticated area and the
//!   matching extractor for API handlers
//!
//! # Authentication Flow
//!
//! 1. The admin panel stores an opaque access token in the `accessToken` cookie
//! 2. Page routes in the authenticated area are wrapped in [`auth::require_access_token`],
//!    which redirects (307) to `/` when the cookie is missing
//! 3. API handlers take an [`auth::AccessToken`] argument, which rejects with 401 instead
//!
//! The token's contents are never inspected here; whatever backend consumes it
//! is responsible for validating it.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware};
//! use crate::middleware::auth::require_access_token;
//!
//! let pages = Router::new()
//!     .route("/dashboard", get(page_data))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_access_token));
//! ```

pub mod auth;
