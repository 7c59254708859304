pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod store;

pub use model::*;
pub use router::init_admin_reservations_router;
