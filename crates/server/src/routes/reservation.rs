use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{db::create_connection, services::reservation::ReservationService};
use models::reservation_status::ReservationStatus;

use crate::dtos::reservation::{NameQuery, ReservationRequest, ReservationResponse, StatusQuery};
use crate::error::ApiError;

/// Get all reservations
#[utoipa::path(
    get,
    path = "/api/hotel/reservations",
    responses(
        (status = 200, description = "List of reservations", body = Vec<ReservationResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservations() -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let db = create_connection().await?;

    let reservations = ReservationService::find_all(&db).await?;

    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// Create a new reservation
#[utoipa::path(
    post,
    path = "/api/hotel/reservations",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let draft = request.into_draft()?;

    let db = create_connection().await?;
    let saved = ReservationService::create(&db, draft).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// Get reservation by ID
#[utoipa::path(
    get,
    path = "/api/hotel/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationResponse),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservation_by_id(
    Path(id): Path<i32>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let db = create_connection().await?;

    let reservation = ReservationService::find_by_id(&db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(reservation.into()))
}

/// Update an existing reservation
#[utoipa::path(
    put,
    path = "/api/hotel/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    Path(id): Path<i32>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    // The path id wins over any id in the body
    let draft = request.into_draft()?;

    let db = create_connection().await?;

    let existing = ReservationService::find_by_id(&db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let updated = ReservationService::update(&db, existing, draft).await?;

    Ok(Json(updated.into()))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/api/hotel/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    let db = create_connection().await?;

    if !ReservationService::exists_by_id(&db, id).await? {
        return Err(ApiError::NotFound);
    }

    ReservationService::delete_by_id(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search reservations by guest name
#[utoipa::path(
    get,
    path = "/api/hotel/reservations/search",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching reservations", body = Vec<ReservationResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn search_reservations_by_guest_name(
    Query(params): Query<NameQuery>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let db = create_connection().await?;

    let reservations = ReservationService::find_by_guest_name_containing(&db, &params.name).await?;

    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// Get reservations by room number
#[utoipa::path(
    get,
    path = "/api/hotel/reservations/room/{room_number}",
    params(
        ("room_number" = i32, Path, description = "Room number")
    ),
    responses(
        (status = 200, description = "Reservations for the room", body = Vec<ReservationResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservations_by_room(
    Path(room_number): Path<i32>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let db = create_connection().await?;

    let reservations = ReservationService::find_by_room_number(&db, room_number).await?;

    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// Get reservations by contact number
#[utoipa::path(
    get,
    path = "/api/hotel/reservations/contact/{contact_number}",
    params(
        ("contact_number" = String, Path, description = "Contact number")
    ),
    responses(
        (status = 200, description = "Reservations for the contact number", body = Vec<ReservationResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservations_by_contact(
    Path(contact_number): Path<String>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let db = create_connection().await?;

    let reservations = ReservationService::find_by_contact_number(&db, &contact_number).await?;

    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// Update reservation status
#[utoipa::path(
    patch,
    path = "/api/hotel/reservations/{id}/status",
    params(
        ("id" = i32, Path, description = "Reservation ID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = ReservationResponse),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn update_reservation_status(
    Path(id): Path<i32>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let db = create_connection().await?;

    let existing = ReservationService::find_by_id(&db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let status = ReservationStatus::from_str(&params.status).map_err(ApiError::Validation)?;

    let updated = ReservationService::update_status(&db, existing, status).await?;

    Ok(Json(updated.into()))
}
