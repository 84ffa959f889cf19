use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use sea_orm::DbErr;

/// Request-terminal failures, each mapped to exactly one status code.
///
/// Errors carry no response body; callers get the status code only.
#[derive(Debug)]
pub enum ApiError {
    /// Request body or query parameter failed a field constraint
    Validation(String),
    /// No reservation exists for the requested id
    NotFound,
    /// The persistence layer reported a fault
    Store(DbErr),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(reason) => warn!("Rejected request: {reason}"),
            Self::NotFound => {}
            Self::Store(err) => error!("Storage failure: {err}"),
        }

        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use sea_orm::DbErr;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::Validation("Guest name is required".to_owned());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_fault_maps_to_500() {
        let err = ApiError::from(DbErr::Custom("connection refused".to_owned()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
