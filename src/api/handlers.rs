//! API request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::parse_start_date;
use crate::error::{TimetableError, TimetableResult};
use crate::types::{date_key, Timetable};
use crate::writer;

use super::server::AppState;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

fn endpoint(path: &str, method: &str, description: &str) -> EndpointInfo {
    EndpointInfo {
        path: path.to_string(),
        method: method.to_string(),
        description: description.to_string(),
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Timetable API Server".to_string(),
        version: state.version.clone(),
        description: "Convert spreadsheet prayer timetables into date-indexed JSON".to_string(),
        endpoints: vec![
            endpoint("/health", "GET", "Health check endpoint"),
            endpoint("/version", "GET", "Get server version"),
            endpoint(
                "/api/v1/convert",
                "POST",
                "Convert spreadsheet bytes (request body) starting at ?start_date=YYYY-MM-DD",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["convert".to_string()],
    }))
}

/// Convert query parameters
#[derive(Deserialize, Default)]
pub struct ConvertQuery {
    pub start_date: Option<String>,
    #[serde(default)]
    pub compact: bool,
}

/// Convert response
#[derive(Serialize, Default)]
pub struct ConvertResponse {
    pub start_date: String,
    pub end_date: String,
    pub days: usize,
    pub timetable: Timetable,
    /// Rendered text, identical to the CLI output
    pub json: String,
}

impl ConvertResponse {
    fn from_timetable(timetable: Timetable, compact: bool) -> TimetableResult<Self> {
        let json = writer::render(&timetable, compact)?;
        Ok(Self {
            start_date: timetable.first_date().map(date_key).unwrap_or_default(),
            end_date: timetable.last_date().map(date_key).unwrap_or_default(),
            days: timetable.len(),
            timetable,
            json,
        })
    }
}

/// HTTP status for a failed conversion
pub fn status_for(error: &TimetableError) -> StatusCode {
    match error {
        TimetableError::InvalidDate(_) | TimetableError::DateOverflow(_) => StatusCode::BAD_REQUEST,
        e if e.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure(status: StatusCode, message: String) -> (StatusCode, Json<ApiResponse<ConvertResponse>>) {
    (status, Json(ApiResponse::err(message)))
}

/// POST /api/v1/convert - Convert an uploaded spreadsheet
pub async fn convert(Query(query): Query<ConvertQuery>, body: Bytes) -> impl IntoResponse {
    let Some(raw_date) = query.start_date else {
        return failure(
            StatusCode::BAD_REQUEST,
            "start_date query parameter is required (YYYY-MM-DD)".to_string(),
        );
    };
    let start_date = match parse_start_date(&raw_date) {
        Ok(date) => date,
        Err(e) => return failure(status_for(&e), e.to_string()),
    };
    if body.is_empty() {
        return failure(
            StatusCode::BAD_REQUEST,
            "Request body must contain the spreadsheet file".to_string(),
        );
    }

    let compact = query.compact;
    let upload_size = body.len();
    let result = tokio::task::spawn_blocking(move || {
        let timetable = crate::timetable_from_bytes(body.to_vec(), start_date)?;
        ConvertResponse::from_timetable(timetable, compact)
    })
    .await;

    match result {
        Ok(Ok(response)) => {
            info!(
                bytes = upload_size,
                days = response.days,
                start = %response.start_date,
                "converted timetable"
            );
            (StatusCode::OK, Json(ApiResponse::ok(response)))
        }
        Ok(Err(e)) => {
            warn!(bytes = upload_size, error = %e, "conversion failed");
            failure(status_for(&e), e.to_string())
        }
        Err(e) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Conversion task failed: {}", e),
        ),
    }
}
