use axum::{
    Router,
    routing::{get, patch},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use crate::doc::ApiDoc;
use crate::routes::{health, reservation};
use crate::utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let api = Router::new()
        .route(
            "/reservations",
            get(reservation::get_reservations).post(reservation::create_reservation),
        )
        .route(
            "/reservations/search",
            get(reservation::search_reservations_by_guest_name),
        )
        .route(
            "/reservations/room/{room_number}",
            get(reservation::get_reservations_by_room),
        )
        .route(
            "/reservations/contact/{contact_number}",
            get(reservation::get_reservations_by_contact),
        )
        .route(
            "/reservations/{id}",
            get(reservation::get_reservation_by_id)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route(
            "/reservations/{id}/status",
            patch(reservation::update_reservation_status),
        )
        .route("/health", get(health::health));

    let app = Router::new()
        .nest("/api/hotel", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
