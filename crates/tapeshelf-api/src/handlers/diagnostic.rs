//! Database connectivity smoke test.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::DbState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResponse {
    pub message: String,
    pub db_connection: String,
    pub result: i64,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticFailure {
    pub message: String,
    pub error: String,
}

/// Run a trivial query against the database and report whether it answered.
#[tracing::instrument(skip(db), fields(operation = "test_database"))]
pub async fn test_database(State(db): State<DbState>) -> Response {
    match db.database.connectivity_check().await {
        Ok(result) => (
            StatusCode::OK,
            Json(DiagnosticResponse {
                message: "Backend is working!".to_string(),
                db_connection: "Database connected successfully".to_string(),
                result,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Database connectivity check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DiagnosticFailure {
                    message: "Error connecting to database".to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
