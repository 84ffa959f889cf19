use std::str::FromStr;

use chrono::NaiveDateTime;
use database::entities::reservations;
use models::{reservation_draft::ReservationDraft, reservation_status::ReservationStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    /// Ignored on update; the path id always wins
    #[serde(default)]
    pub reservation_id: Option<i32>,

    pub guest_name: String,
    pub room_number: i32,
    pub contact_number: String,

    #[serde(default)]
    pub reservation_date: Option<NaiveDateTime>,

    /// Status name, e.g. "CONFIRMED"; defaults to CONFIRMED when absent
    #[serde(default)]
    pub status: Option<String>,
}

impl ReservationRequest {
    /// Validate the request shape and convert it into a draft for the store
    pub fn into_draft(self) -> Result<ReservationDraft, ApiError> {
        let status = match self.status.as_deref() {
            Some(s) => Some(ReservationStatus::from_str(s).map_err(ApiError::Validation)?),
            None => None,
        };

        let draft = ReservationDraft {
            guest_name: self.guest_name,
            room_number: self.room_number,
            contact_number: self.contact_number,
            reservation_date: self.reservation_date,
            status,
        };

        draft.validate().map_err(ApiError::Validation)?;

        Ok(draft)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: i32,
    pub guest_name: String,
    pub room_number: i32,
    pub contact_number: String,
    pub reservation_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub status: String,
}

impl From<reservations::Model> for ReservationResponse {
    fn from(reservation: reservations::Model) -> Self {
        Self {
            reservation_id: reservation.reservation_id,
            guest_name: reservation.guest_name,
            room_number: reservation.room_number,
            contact_number: reservation.contact_number,
            reservation_date: reservation.reservation_date,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
            status: reservation.status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusQuery {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::{ReservationRequest, ReservationResponse};
    use crate::error::ApiError;
    use chrono::NaiveDate;
    use database::entities::reservations;
    use models::reservation_status::ReservationStatus;

    #[test]
    fn test_request_deserializes_camel_case_body() {
        let body = r#"{"guestName":"Ann Lee","roomNumber":204,"contactNumber":"+12345678901"}"#;
        let request: ReservationRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.guest_name, "Ann Lee");
        assert_eq!(request.room_number, 204);
        assert_eq!(request.contact_number, "+12345678901");
        assert!(request.reservation_id.is_none());
        assert!(request.reservation_date.is_none());
        assert!(request.status.is_none());
    }

    #[test]
    fn test_into_draft_accepts_valid_request() {
        let body = r#"{"guestName":"Ann Lee","roomNumber":204,"contactNumber":"+12345678901","status":"pending"}"#;
        let request: ReservationRequest = serde_json::from_str(body).unwrap();

        let draft = request.into_draft().unwrap();
        assert_eq!(draft.status, Some(ReservationStatus::Pending));
    }

    #[test]
    fn test_into_draft_rejects_unknown_status() {
        let body = r#"{"guestName":"Ann Lee","roomNumber":204,"contactNumber":"+12345678901","status":"invalid_status"}"#;
        let request: ReservationRequest = serde_json::from_str(body).unwrap();

        assert!(matches!(
            request.into_draft(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_into_draft_rejects_bad_contact_number() {
        let body = r#"{"guestName":"Ann Lee","roomNumber":204,"contactNumber":"12345"}"#;
        let request: ReservationRequest = serde_json::from_str(body).unwrap();

        assert!(matches!(
            request.into_draft(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_response_serializes_camel_case_fields() {
        let stamp = NaiveDate::from_ymd_opt(2025, 8, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let response = ReservationResponse::from(reservations::Model {
            reservation_id: 7,
            guest_name: "John Smith".to_owned(),
            room_number: 101,
            contact_number: "1234567890".to_owned(),
            reservation_date: Some(stamp),
            created_at: stamp,
            updated_at: stamp,
            status: ReservationStatus::Confirmed,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["reservationId"], 7);
        assert_eq!(json["guestName"], "John Smith");
        assert_eq!(json["roomNumber"], 101);
        assert_eq!(json["status"], "CONFIRMED");
        assert_eq!(json["reservationDate"], "2025-08-30T12:00:00");
    }
}
