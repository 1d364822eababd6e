// HTTP request handlers
use crate::application::schedule_provider::{ProviderError, TeacherRef};
use crate::application::timetable_service::ServiceError;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_mapper::{classes_to_dto, timetable_to_dto, today_to_dto};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List classes for the operator class picker
pub async fn list_classes(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    info!("GET /timetables/classes");
    let compress = accepts_brotli(&headers);
    let token = bearer_token(&headers);

    match state.timetable_service.list_classes(token.as_deref()).await {
        Ok(classes) => respond(StatusCode::OK, &classes_to_dto(classes), compress).await,
        Err(e) => service_error(e, compress).await,
    }
}

/// Read-only class timetable
pub async fn class_timetable(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    info!("GET /timetables/class/{}", id);
    let compress = accepts_brotli(&headers);
    let Some(class_id) = parse_class_id(&id) else {
        return bad_request(format!("Invalid class id: {}", id), compress).await;
    };
    let token = bearer_token(&headers);

    match state
        .timetable_service
        .class_timetable(class_id, token.as_deref())
        .await
    {
        Ok(timetable) => respond(StatusCode::OK, &timetable_to_dto(timetable), compress).await,
        Err(e) => service_error(e, compress).await,
    }
}

/// Read-only teacher timetable; `me` loads the caller's own
pub async fn teacher_timetable(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    info!("GET /timetables/teacher/{}", id);
    let compress = accepts_brotli(&headers);
    let Some(teacher) = TeacherRef::parse(&id) else {
        return bad_request(format!("Invalid teacher id: {}", id), compress).await;
    };
    let token = bearer_token(&headers);

    match state
        .timetable_service
        .teacher_timetable(teacher, token.as_deref())
        .await
    {
        Ok(timetable) => respond(StatusCode::OK, &timetable_to_dto(timetable), compress).await,
        Err(e) => service_error(e, compress).await,
    }
}

/// Editable operator grid for a class
pub async fn operator_timetable(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    info!("GET /timetables/operator/class/{}", id);
    let compress = accepts_brotli(&headers);
    let Some(class_id) = parse_class_id(&id) else {
        return bad_request(format!("Invalid class id: {}", id), compress).await;
    };
    let token = bearer_token(&headers);

    match state
        .timetable_service
        .operator_timetable(class_id, token.as_deref())
        .await
    {
        Ok(timetable) => respond(StatusCode::OK, &timetable_to_dto(timetable), compress).await,
        Err(e) => service_error(e, compress).await,
    }
}

/// A teacher's lessons for the current weekday
pub async fn today_lessons(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    info!("GET /lessons/today/teacher/{}", id);
    let compress = accepts_brotli(&headers);
    let Some(teacher) = TeacherRef::parse(&id) else {
        return bad_request(format!("Invalid teacher id: {}", id), compress).await;
    };
    let token = bearer_token(&headers);
    let now = chrono::Local::now().naive_local();

    match state
        .timetable_service
        .today_lessons(teacher, now, token.as_deref())
        .await
    {
        Ok(today) => respond(StatusCode::OK, &today_to_dto(today), compress).await,
        Err(e) => service_error(e, compress).await,
    }
}

/// Token from an `Authorization: Bearer ...` header, forwarded to the backend
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_class_id(segment: &str) -> Option<i64> {
    segment.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

async fn respond<T: Serialize>(status: StatusCode, value: &T, compress: bool) -> Response {
    match json_response(status, value, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

async fn bad_request(message: String, compress: bool) -> Response {
    warn!("{}", message);
    respond(StatusCode::BAD_REQUEST, &json!({ "error": message }), compress).await
}

async fn service_error(err: ServiceError, compress: bool) -> Response {
    let status = match &err {
        ServiceError::InvalidClass(_) => StatusCode::BAD_REQUEST,
        ServiceError::Provider(ProviderError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ServiceError::Provider(ProviderError::Status { status, .. })
            if *status == 401 || *status == 403 =>
        {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ServiceError::Provider(_) => StatusCode::BAD_GATEWAY,
    };
    if status.is_server_error() {
        error!("Error loading timetable: {}", err);
    } else {
        warn!("Timetable request rejected: {}", err);
    }
    respond(status, &json!({ "error": err.to_string() }), compress).await
}
