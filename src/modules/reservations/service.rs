use std::collections::HashMap;

use anyhow::anyhow;
use chrono::{NaiveDate, Utc};
use iceapple_core::AppError;
use tracing::{info, instrument};

use super::model::{AdminReservationRequest, Reservation};
use super::store::ReservationStore;

pub struct ReservationService;

impl ReservationService {
    /// Reservations on `date`, ordered by place then start time.
    #[instrument(skip(store))]
    pub async fn get_reservations_by_date(
        store: &ReservationStore,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = store.read().await;

        let mut found: Vec<Reservation> = reservations
            .values()
            .filter(|r| r.date == date)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.place_id
                .cmp(&b.place_id)
                .then(a.start_time.cmp(&b.start_time))
        });

        Ok(found)
    }

    #[instrument(skip(store))]
    pub async fn create_reservation(
        store: &ReservationStore,
        request: AdminReservationRequest,
    ) -> Result<Reservation, AppError> {
        ensure_time_range(&request)?;

        let mut reservations = store.write().await;
        ensure_available(&reservations, &request, None)?;

        let reservation = Reservation::from_request(request, Utc::now());
        reservations.insert(reservation.reservation_id.clone(), reservation.clone());

        info!(
            reservation_id = %reservation.reservation_id,
            place_id = %reservation.place_id,
            "Reservation created"
        );

        Ok(reservation)
    }

    #[instrument(skip(store))]
    pub async fn update_reservation(
        store: &ReservationStore,
        reservation_id: &str,
        request: AdminReservationRequest,
    ) -> Result<Reservation, AppError> {
        ensure_time_range(&request)?;

        let mut reservations = store.write().await;
        if !reservations.contains_key(reservation_id) {
            return Err(not_found(reservation_id));
        }
        ensure_available(&reservations, &request, Some(reservation_id))?;

        let reservation = reservations
            .get_mut(reservation_id)
            .ok_or_else(|| not_found(reservation_id))?;
        reservation.apply(request, Utc::now());

        info!(reservation_id = %reservation_id, "Reservation updated");

        Ok(reservation.clone())
    }

    /// Cancels every listed reservation, or none of them if any id is unknown.
    #[instrument(skip(store))]
    pub async fn cancel_reservations(
        store: &ReservationStore,
        reservation_ids: &[String],
    ) -> Result<usize, AppError> {
        let mut reservations = store.write().await;

        if let Some(missing) = reservation_ids
            .iter()
            .find(|id| !reservations.contains_key(id.as_str()))
        {
            return Err(not_found(missing));
        }

        let cancelled = reservation_ids
            .iter()
            .filter(|id| reservations.remove(id.as_str()).is_some())
            .count();

        info!(count = cancelled, "Reservations cancelled");

        Ok(cancelled)
    }
}

fn not_found(reservation_id: &str) -> AppError {
    AppError::bad_request(anyhow!("reservation not found: {}", reservation_id))
}

fn ensure_time_range(request: &AdminReservationRequest) -> Result<(), AppError> {
    if request.start_time >= request.end_time {
        return Err(AppError::bad_request(anyhow!(
            "start time must be before end time"
        )));
    }
    Ok(())
}

fn ensure_available(
    reservations: &HashMap<String, Reservation>,
    request: &AdminReservationRequest,
    exclude: Option<&str>,
) -> Result<(), AppError> {
    let conflict = reservations
        .values()
        .filter(|r| Some(r.reservation_id.as_str()) != exclude)
        .any(|r| {
            r.overlaps(
                &request.place_id,
                request.date,
                request.start_time,
                request.end_time,
            )
        });

    if conflict {
        return Err(AppError::bad_request(anyhow!(
            "place is already reserved for the requested time"
        )));
    }
    Ok(())
}
