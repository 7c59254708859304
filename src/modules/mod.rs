pub mod layout;
pub mod reservations;

pub use self::layout::service::LayoutService;
pub use self::reservations::service::ReservationService;
