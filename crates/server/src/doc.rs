use crate::routes::{health, reservation};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        reservation::get_reservations,
        reservation::create_reservation,
        reservation::get_reservation_by_id,
        reservation::update_reservation,
        reservation::delete_reservation,
        reservation::search_reservations_by_guest_name,
        reservation::get_reservations_by_room,
        reservation::get_reservations_by_contact,
        reservation::update_reservation_status
    ),
    tags(
        (name = "Reservations", description = "Reservation related endpoints"),
        (name = "Health", description = "Service health endpoint"),
    ),
    info(
        title = "Hotel Management API",
        version = "1.0.0",
        description = "Hotel room reservation API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
