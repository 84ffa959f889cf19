pub mod reservation_draft;
pub mod reservation_status;
