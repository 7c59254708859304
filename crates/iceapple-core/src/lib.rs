//! # Iceapple Core
//!
//! Core types shared by the iceapple admin service.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use iceapple_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("reservation not found"));
//! ```

pub mod errors;
pub mod serde;

pub use errors::{AppError, ErrorResponse};
