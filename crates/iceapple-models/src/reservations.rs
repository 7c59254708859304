//! Admin reservation models and DTOs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use iceapple_core::serde::empty_string_as_none;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: String,
    pub place_id: String,
    pub reserver_name: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "12:00:00")]
    pub end_time: NaiveTime,
    pub purpose: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_request(request: AdminReservationRequest, now: DateTime<Utc>) -> Self {
        Self {
            reservation_id: Uuid::new_v4().to_string(),
            place_id: request.place_id,
            reserver_name: request.reserver_name,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            purpose: request.purpose,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, request: AdminReservationRequest, now: DateTime<Utc>) {
        self.place_id = request.place_id;
        self.reserver_name = request.reserver_name;
        self.date = request.date;
        self.start_time = request.start_time;
        self.end_time = request.end_time;
        self.purpose = request.purpose;
        self.updated_at = now;
    }

    /// Half-open `[start, end)` overlap on the same place and date.
    pub fn overlaps(
        &self,
        place_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> bool {
        self.place_id == place_id
            && self.date == date
            && self.start_time < end_time
            && start_time < self.end_time
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminReservationRequest {
    #[validate(length(min = 1, max = 100, message = "placeId must be 1 to 100 characters"))]
    pub place_id: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "reserverName must be 1 to 50 characters"
    ))]
    pub reserver_name: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "12:00:00")]
    pub end_time: NaiveTime,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 200, message = "purpose must be at most 200 characters"))]
    pub purpose: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReservationDateQuery {
    /// Day to list reservations for, `YYYY-MM-DD`
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationsResponse {
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessageResponse {
    pub message: String,
}

impl ApiMessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
