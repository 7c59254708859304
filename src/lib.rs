//! # Iceapple Admin
//!
//! Backend for the iceapple place-reservation admin panel, built with Axum.
//!
//! ## Overview
//!
//! - **Page data**: every admin-panel navigation fetches JSON page data made
//!   of the root layout's page title and the authenticated-area flag
//! - **Authenticated area**: `/dashboard`, `/place` and `/projects` are behind
//!   a presence check on the `accessToken` cookie; visitors without it are
//!   redirected (307) to `/`
//! - **Reservations**: admin CRUD over place reservations at `/admin/reservations`
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Access-token guard and extractor
//! ├── modules/          # Feature modules
//! │   ├── layout/      # Page titles and page data
//! │   └── reservations/# Admin reservation management
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Request logging and tracing setup
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module follows the same structure: `controller.rs` (HTTP
//! handlers), `service.rs` (business logic), `router.rs` (Axum router), plus
//! `model.rs`/`store.rs` where the module owns data.
//!
//! ## Page titles
//!
//! | Path | Title |
//! |------|-------|
//! | `/` | Login |
//! | `/dashboard` | Dashboard |
//! | `/place` | Place Management |
//! | `/projects` | Project Management |
//! | anything else | 없는 페이지 |
//!
//! ## Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! ACCESS_TOKEN_COOKIE=accessToken
//! LOGIN_PATH=/
//! ALLOWED_ORIGINS=http://localhost:5173
//! LOG_DIR=storage/logs
//! ```
//!
//! ## Security Considerations
//!
//! The access token is opaque to this service. Only its presence is checked;
//! validating it is left to whichever backend consumes it.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use iceapple_config;
pub use iceapple_core;
pub use iceapple_models;
