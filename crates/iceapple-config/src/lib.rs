//! # Iceapple Config
//!
//! Configuration types for the iceapple admin service, loaded from
//! environment variables:
//!
//! - [`auth`]: access-token cookie and login redirect settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use iceapple_config::{AuthConfig, CorsConfig, ServerConfig};
//!
//! let auth_config = AuthConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod server;

pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use server::ServerConfig;
