use axum::{extract::Path, routing::get, Json, Router};
use school_timetable::application::timetable_service::{TimetableService, ViewGrids};
use school_timetable::infrastructure::api_provider::ApiScheduleProvider;
use school_timetable::infrastructure::config::EndpointSettings;
use school_timetable::presentation::app_state::AppState;
use school_timetable::presentation::routes::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

/// School backend stub: class 3 ("7-A") with an unordered week.
async fn spawn_school_backend() -> String {
    let router = Router::new()
        .route(
            "/api/classes/:id/",
            get(|Path(id): Path<i64>| async move {
                Json(json!({
                    "id": id, "name": "7-A", "student_count": 31,
                    "class_teacher_name": "Yusupova M."
                }))
            }),
        )
        .route(
            "/api/classes/",
            get(|| async { Json(json!([{ "id": 3, "name": "7-A" }, { "id": 4, "name": "11-B" }])) }),
        )
        .route(
            "/api/schedule/class/:id/",
            get(|| async {
                Json(json!([
                    { "weekday": 1, "start_time": "09:25:00", "end_time": "10:10:00",
                      "subject_name": "Physics", "teacher_name": "Rahimov A.", "room": "12" },
                    { "weekday": 3, "start_time": "08:30:00", "end_time": "09:15:00",
                      "subject_name": "History" },
                    { "weekday": 7, "start_time": "08:30:00", "end_time": "09:15:00",
                      "subject_name": "Sunday club" },
                    { "weekday": 1, "start_time": "08:30:00", "end_time": "09:15:00",
                      "subject_name": "Math" }
                ]))
            }),
        );
    format!("{}/api/", serve(router).await)
}

async fn spawn_service() -> String {
    let backend = spawn_school_backend().await;
    let provider = ApiScheduleProvider::new(
        &backend,
        Duration::from_secs(5),
        EndpointSettings::default(),
    )
    .unwrap();
    let state = Arc::new(AppState {
        timetable_service: TimetableService::new(Arc::new(provider), ViewGrids::default()),
    });
    serve(build_router(state)).await
}

#[tokio::test]
async fn class_timetable_end_to_end() {
    let base = spawn_service().await;

    let body: Value = reqwest::get(format!("{}/timetables/class/3", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["title"], "Sinf: 7-A");
    assert_eq!(body["meta"], "O‘quvchilar: 31 • Sinf rahbari: Yusupova M.");

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["timeLabel"], "08:30–09:15");
    assert_eq!(rows[0]["cells"][0]["subjectName"], "Math");
    assert_eq!(rows[0]["cells"][2]["subjectName"], "History");
    assert_eq!(rows[0]["cells"][1]["kind"], "empty");

    assert_eq!(rows[1]["timeLabel"], "09:25–10:10");
    assert_eq!(rows[1]["cells"][0]["subjectName"], "Physics");
    assert_eq!(rows[1]["cells"][0]["teacherOrClassName"], "Rahimov A.");
    assert_eq!(rows[1]["cells"][0]["room"], "12");
    for d in 1..6 {
        assert_eq!(rows[1]["cells"][d]["kind"], "empty");
    }
}

#[tokio::test]
async fn operator_grid_and_class_list_end_to_end() {
    let base = spawn_service().await;

    let body: Value = reqwest::get(format!("{}/timetables/operator/class/3", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[2]["timeLabel"], "10:20–11:05");
    assert_eq!(body["meta"], "Sinf: 7-A");

    let classes: Value = reqwest::get(format!("{}/timetables/classes", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(classes, json!([{ "id": 4, "name": "11-B" }, { "id": 3, "name": "7-A" }]));
}

#[tokio::test]
async fn brotli_negotiation_and_health() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/timetables/class/3", base))
        .header("Accept-Encoding", "br")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-encoding"], "br");

    let health = reqwest::get(format!("{}/healthz", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(health, "ok");

    let response = reqwest::get(format!("{}/timetables/class/zero", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
