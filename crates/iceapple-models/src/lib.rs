//! # Iceapple Models
//!
//! Data structures exchanged by the iceapple admin service.
//!
//! # Modules
//!
//! - [`layout`]: page data produced by the root layout and the authenticated-area guard
//! - [`reservations`]: admin reservation entities and request/response DTOs
//!
//! # Example
//!
//! ```ignore
//! use iceapple_models::layout::{AuthenticatedLayoutData, LayoutData, PageData};
//!
//! let root = LayoutData::new("Dashboard");
//! let page = PageData::merge(root, Some(&AuthenticatedLayoutData::authenticated()));
//! assert!(page.is_authenticated);
//! ```

pub mod layout;
pub mod reservations;

pub use layout::{AuthenticatedLayoutData, LayoutData, PageData};
pub use reservations::{
    AdminReservationRequest, ApiMessageResponse, Reservation, ReservationDateQuery,
    ReservationsResponse,
};
