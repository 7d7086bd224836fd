pub mod model;

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use model::{EnrollRequest, EnrollResponse, JsonStudent, StudentsResponse};

pub fn students_router() -> Router<AppState> {
    Router::new()
        .route("/enroll", post(enroll_handler))
        .route("/students", get(list_students_handler))
}

async fn enroll_handler(
    State(state): State<AppState>,
    Json(payload): Json<EnrollRequest>,
) -> Result<Json<EnrollResponse>, ApiError> {
    let new_student = payload.into_new_student()?;

    let id = match state.repo.insert_student(&new_student).await {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Failed to insert enrollment: {}", e);
            return Err(ApiError::Database);
        }
    };

    println!(
        "Recorded enrollment #{} for {} {}.",
        id, new_student.first_name, new_student.last_name
    );

    Ok(Json(EnrollResponse { success: true, id }))
}

async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<StudentsResponse>, ApiError> {
    let students = state.repo.list_students().await.map_err(|e| {
        eprintln!("Failed to list enrollments: {}", e);
        ApiError::Database
    })?;

    let students: Vec<JsonStudent> = students.iter().map(JsonStudent::from).collect();

    Ok(Json(StudentsResponse { students }))
}
