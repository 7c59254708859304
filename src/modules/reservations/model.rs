pub use iceapple_models::reservations::{
    AdminReservationRequest, ApiMessageResponse, Reservation, ReservationDateQuery,
    ReservationsResponse,
};
