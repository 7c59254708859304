use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_reservation, delete_reservation, get_all_reservations, update_reservation,
};

pub fn init_admin_reservations_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_reservations).post(create_reservation))
        .route(
            "/{reservation_id}",
            patch(update_reservation).delete(delete_reservation),
        )
}
