//! API integration tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use prayer_timetable::api::build_router;
use prayer_timetable::api::handlers::{status_for, ApiResponse, ConvertQuery, ConvertResponse};
use prayer_timetable::api::server::{ApiConfig, AppState, MAX_UPLOAD_BYTES};
use rust_xlsxwriter::Workbook;
use prayer_timetable::TimetableError;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> axum::Router {
    build_router(Arc::new(AppState {
        version: "1.0.0".to_string(),
    }))
}

fn workbook_bytes(days: u32) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Fajr").unwrap();
    sheet.write_string(0, 2, "Sunrise").unwrap();
    let times = [
        "6:05", "6:30", "7:50", "12:10", "12:30", "2:20", "2:45", "4:15", "5:45", "6:15",
    ];
    for day in 0..days {
        for (col, time) in times.iter().enumerate() {
            sheet.write_string(1 + day, col as u16, *time).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn convert_request(query: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/v1/convert{query}"))
        .header("content-type", "application/octet-stream")
        .body(Body::from(body))
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_config_default() {
    let config = ApiConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_upload_limit_fits_large_timetables() {
    assert!(MAX_UPLOAD_BYTES >= 2 * 1024 * 1024);
}

#[test]
fn test_convert_query_defaults() {
    let query = ConvertQuery::default();
    assert!(query.start_date.is_none());
    assert!(!query.compact);
}

#[test]
fn test_error_envelope_shape() {
    let response: ApiResponse<ConvertResponse> = ApiResponse::err("No data found");
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("data").is_none());
}

#[test]
fn test_date_errors_are_client_errors() {
    let overflow = TimetableError::DateOverflow("+262142-12-31 + 3 days".to_string());
    assert_eq!(status_for(&overflow), StatusCode::BAD_REQUEST);
    assert_eq!(
        status_for(&TimetableError::InvalidDate("tomorrow".to_string())),
        StatusCode::BAD_REQUEST
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// INFO ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_health() {
    let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_version() {
    let (status, body) = send(Request::get("/version").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["version"], "1.0.0");
    assert_eq!(body["data"]["features"][0], "convert");
}

#[tokio::test]
async fn test_root_lists_convert_endpoint() {
    let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let endpoints = body["data"]["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e["path"] == "/api/v1/convert"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERT ENDPOINT
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_convert_success() {
    let (status, body) = send(convert_request(
        "?start_date=2024-12-21",
        workbook_bytes(2),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["days"], 2);
    assert_eq!(data["start_date"], "2024-12-21");
    assert_eq!(data["end_date"], "2024-12-22");
    assert_eq!(data["timetable"]["2024-12-21"]["asr"]["start"], "14:20");
    assert_eq!(data["timetable"]["2024-12-22"]["dhuhr"]["jamat"], "12:30");
    assert_eq!(data["timetable"]["2024-12-22"]["isha"]["jamat"], "18:15");

    let text = data["json"].as_str().unwrap();
    assert!(text.starts_with("{\n  \"2024-12-21\": "));
}

#[tokio::test]
async fn test_convert_compact() {
    let (status, body) = send(convert_request(
        "?start_date=2024-12-21&compact=true",
        workbook_bytes(1),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"]["json"].as_str().unwrap().contains('\n'));
}

#[tokio::test]
async fn test_convert_missing_start_date() {
    let (status, body) = send(convert_request("", workbook_bytes(1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("start_date"));
}

#[tokio::test]
async fn test_convert_invalid_start_date() {
    let (status, body) = send(convert_request("?start_date=21-12-2024", workbook_bytes(1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid start date"));
}

#[tokio::test]
async fn test_convert_empty_body() {
    let (status, _) = send(convert_request("?start_date=2024-12-21", Vec::new())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert_garbage_body() {
    let (status, body) = send(convert_request(
        "?start_date=2024-12-21",
        b"this is not a spreadsheet".to_vec(),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to read spreadsheet"));
}

#[tokio::test]
async fn test_convert_no_data() {
    let (status, body) = send(convert_request("?start_date=2024-12-21", workbook_bytes(0))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("No data found"));
}
