use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use derive_more::derive::Display;
use serde_json::json;

// the api's entire failure surface: a rejected submission or a db fault.
// messages match what the browser pages display to the visitor.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ApiError {
    #[display("Missing required fields")]
    MissingFields,

    #[display("Database error")]
    Database,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Database => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
