// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    class_timetable, health_check, list_classes, operator_timetable, teacher_timetable,
    today_lessons,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/timetables/classes", get(list_classes))
        .route("/timetables/class/:id", get(class_timetable))
        .route("/timetables/teacher/:id", get(teacher_timetable))
        .route("/timetables/operator/class/:id", get(operator_timetable))
        .route("/lessons/today/teacher/:id", get(today_lessons))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
