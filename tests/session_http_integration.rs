//! Integration tests for the HTTP API.
//!
//! The full router runs over the in-memory store and queue. Requests go
//! through `tower::ServiceExt::oneshot`; room events are observed by joining
//! the session room on the shared `RoomManager`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::broadcast::error::TryRecvError;
use tower::ServiceExt;

use recording_sessions::adapters::http::app_router;
use recording_sessions::adapters::memory::{InMemoryJobQueue, InMemoryStore};
use recording_sessions::adapters::websocket::{ClientId, RoomManager};
use recording_sessions::application::Services;
use recording_sessions::config::ServerConfig;
use recording_sessions::domain::foundation::SessionId;
use recording_sessions::domain::session::{
    JOB_CREATED, JOIN_CODE_ALPHABET, JOIN_CODE_LENGTH, SOURCE_ADD, START_RECORDING,
};

const QUEUE: &str = "transcode";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    rooms: Arc<RoomManager>,
    store: InMemoryStore,
    queue: InMemoryJobQueue,
}

impl TestApp {
    async fn new() -> Self {
        let store = InMemoryStore::new();
        let queue = InMemoryJobQueue::new();
        let rooms = Arc::new(RoomManager::with_default_capacity());
        let shared = Arc::new(store.clone());

        let services = Services::new(
            shared.clone(),
            shared.clone(),
            shared.clone(),
            shared,
            rooms.clone(),
            Arc::new(queue.clone()),
            QUEUE,
        );
        services.add_job.ensure_queue().await.unwrap();

        let router = app_router(services, rooms.clone(), &ServerConfig::default());
        Self {
            router,
            rooms,
            store,
            queue,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create_session(&self) -> Value {
        let (status, body) = self.send(Method::POST, "/api/session", None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

fn session_id_of(session: &Value) -> SessionId {
    session["id"].as_str().unwrap().parse().unwrap()
}

fn segment(id: &str) -> Value {
    json!({
        "id": id,
        "uploadedUrl": format!("https://uploads.example.com/{}.webm", id),
        "source": { "id": "front", "type": "Camera", "name": "Front camera" },
        "startTime": 1_700_000_000_000i64,
        "endTime": 1_700_000_030_000i64,
        "duration": 30_000,
        "mode": "PiP"
    })
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn create_session_returns_idle_session_with_join_code() {
    let app = TestApp::new().await;

    let session = app.create_session().await;

    let code = session["code"].as_str().unwrap();
    assert_eq!(code.len(), JOIN_CODE_LENGTH);
    assert!(code.bytes().all(|c| JOIN_CODE_ALPHABET.contains(&c)));
    assert_eq!(session["status"], "Idle");
    assert_eq!(session["layout"]["pipPosition"], "TopLeft");
    assert_eq!(session["layout"]["recordingMode"], "PiP");
    assert_eq!(session["sources"], json!({}));
    assert_eq!(app.store.session_count().await, 1);
}

#[tokio::test]
async fn session_can_be_found_by_lowercase_code() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let code = session["code"].as_str().unwrap().to_lowercase();

    let (status, found) = app
        .send(Method::GET, &format!("/api/session/code/{}", code), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], session["id"]);
}

#[tokio::test]
async fn unknown_session_is_not_found_with_error_body() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::GET,
            &format!("/api/session/{}", SessionId::new()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn patch_updates_layout_and_ignores_unknown_fields() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let id = session["id"].as_str().unwrap();

    let (status, updated) = app
        .send(
            Method::PATCH,
            &format!("/api/session/{}", id),
            Some(json!({
                "layout": { "pipPosition": "BottomRight", "recordingMode": "Screen" },
                "code": "ZZZZZZ"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["layout"]["pipPosition"], "BottomRight");
    assert_eq!(updated["layout"]["recordingMode"], "Screen");
    assert_eq!(updated["code"], session["code"]);
}

#[tokio::test]
async fn malformed_body_is_a_missing_parameter() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let id = session["id"].as_str().unwrap();

    let request = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/api/session/{}", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "MISSING_PARAMETER");
}

#[tokio::test]
async fn start_recording_notifies_room_before_responding() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let session_id = session_id_of(&session);
    let mut rx = app.rooms.join(&session_id, ClientId::new()).await;

    let (status, started) = app
        .send(
            Method::POST,
            &format!("/api/session/{}/start", session_id),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(started["status"], "Recording");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.name, START_RECORDING);
    assert_eq!(event.data["status"], "Recording");

    let (_, reloaded) = app
        .send(Method::GET, &format!("/api/session/{}", session_id), None)
        .await;
    assert_eq!(reloaded["status"], "Recording");
}

// =============================================================================
// Sources
// =============================================================================

#[tokio::test]
async fn registered_sources_appear_under_their_type() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let id = session["id"].as_str().unwrap();
    let uri = format!("/api/session/{}/sources", id);

    let (status, _) = app
        .send(
            Method::POST,
            &uri,
            Some(json!({ "id": "front", "type": "Camera", "name": "front" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .send(
            Method::POST,
            &uri,
            Some(json!({ "id": "mic1", "type": "Microphone", "name": "mic1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, view) = app
        .send(Method::GET, &format!("/api/session/{}", id), None)
        .await;
    assert_eq!(view["sources"]["Camera"]["id"], "front");
    assert_eq!(view["sources"]["Camera"]["name"], "front");
    assert_eq!(view["sources"]["Microphone"]["name"], "mic1");
    assert!(view["sources"].get("Screen").is_none());
}

#[tokio::test]
async fn duplicate_source_type_is_a_conflict_and_announced_once() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let session_id = session_id_of(&session);
    let mut rx = app.rooms.join(&session_id, ClientId::new()).await;
    let uri = format!("/api/session/{}/sources", session_id);

    let (first, _) = app
        .send(
            Method::POST,
            &uri,
            Some(json!({ "id": "front", "type": "Camera", "name": "Front camera" })),
        )
        .await;
    let (second, body) = app
        .send(
            Method::POST,
            &uri,
            Some(json!({ "id": "side", "type": "Camera", "name": "Side camera" })),
        )
        .await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(app.store.source_count().await, 1);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.name, SOURCE_ADD);
    assert_eq!(event.data["id"], "front");
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    let (_, view) = app
        .send(Method::GET, &format!("/api/session/{}", session_id), None)
        .await;
    assert_eq!(view["sources"]["Camera"]["id"], "front");
    assert_eq!(view["sources"]["Camera"]["name"], "Front camera");
}

#[tokio::test]
async fn source_without_type_names_the_missing_field() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let id = session["id"].as_str().unwrap();

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/api/session/{}/sources", id),
            Some(json!({ "id": "front", "name": "Front camera" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_PARAMETER");
    assert_eq!(body["details"]["field"], "type");
}

// =============================================================================
// Media and jobs
// =============================================================================

#[tokio::test]
async fn media_batch_with_bad_segment_dispatches_exactly_one_job() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let session_id = session_id_of(&session);
    let mut rx = app.rooms.join(&session_id, ClientId::new()).await;

    let mut broken = segment("seg-2");
    broken["duration"] = json!(0);
    let batch = json!([segment("seg-1"), broken, segment("seg-3")]);

    let (status, report) = app
        .send(
            Method::POST,
            &format!("/api/session/{}/media", session_id),
            Some(batch),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["persisted"].as_array().unwrap().len(), 2);
    assert_eq!(report["failed"][0]["index"], 1);
    assert_eq!(report["failed"][0]["error"], "MISSING_PARAMETER");
    assert_eq!(report["job"]["type"], "Mobile");
    assert_eq!(report["job"]["media"].as_array().unwrap().len(), 3);

    assert_eq!(app.store.media_count().await, 2);
    assert_eq!(app.store.job_count().await, 1);
    assert_eq!(app.queue.messages(QUEUE).await.len(), 1);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.name, JOB_CREATED);
    assert_eq!(event.data["id"], report["job"]["id"]);

    let (_, jobs) = app
        .send(
            Method::GET,
            &format!("/api/session/{}/jobs", session_id),
            None,
        )
        .await;
    assert_eq!(jobs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn media_batch_with_mistyped_elements_still_dispatches_one_job() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let session_id = session_id_of(&session);

    let mut fractional = segment("seg-frac");
    fractional["startTime"] = json!(1.5);
    let batch = json!([
        segment("seg-1"),
        fractional,
        null,
        { "id": 42 },
        segment("seg-2")
    ]);

    let (status, report) = app
        .send(
            Method::POST,
            &format!("/api/session/{}/media", session_id),
            Some(batch),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["persisted"].as_array().unwrap().len(), 2);
    let failed = report["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 3);
    assert_eq!(failed[0]["index"], 1);
    assert_eq!(failed[0]["id"], "seg-frac");
    assert_eq!(failed[1]["index"], 2);
    assert_eq!(failed[2]["index"], 3);
    assert!(failed.iter().all(|f| f["error"] == "MISSING_PARAMETER"));

    let job_media = report["job"]["media"].as_array().unwrap();
    assert_eq!(job_media.len(), 5);
    assert_eq!(job_media[2], Value::Null);
    assert_eq!(job_media[3], json!({ "id": 42 }));

    assert_eq!(app.store.media_count().await, 2);
    assert_eq!(app.store.job_count().await, 1);

    let (status, stored) = app
        .send(
            Method::GET,
            &format!("/api/session/{}/media", session_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<&str> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, ["seg-1", "seg-2"]);
}

#[tokio::test]
async fn media_body_that_is_not_an_array_is_rejected() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let id = session["id"].as_str().unwrap();

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/api/session/{}/media", id),
            Some(segment("seg-1")),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_PARAMETER");
    assert_eq!(app.store.job_count().await, 0);
}

#[tokio::test]
async fn non_uuid_session_id_is_not_found_on_writes() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/session/abc/sources",
            Some(json!({ "id": "front", "type": "Camera", "name": "front" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/session/abc/media",
            Some(json!([segment("seg-1")])),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    assert_eq!(app.store.source_count().await, 0);
    assert_eq!(app.store.media_count().await, 0);
    assert_eq!(app.store.job_count().await, 0);
}

#[tokio::test]
async fn job_status_can_be_read_and_updated() {
    let app = TestApp::new().await;
    let session = app.create_session().await;
    let id = session["id"].as_str().unwrap();

    let (_, report) = app
        .send(
            Method::POST,
            &format!("/api/session/{}/media", id),
            Some(json!([segment("seg-1")])),
        )
        .await;
    let job_id = report["job"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/jobs/{}", job_id);

    let (status, job) = app.send(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["status"], Value::Null);

    let (status, updated) = app
        .send(
            Method::PUT,
            &uri,
            Some(json!({ "status": "transcoding", "type": "Desktop" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "transcoding");
    assert_eq!(updated["type"], "Mobile");
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::GET, "/api/jobs/not-a-job", None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

// =============================================================================
// Misc
// =============================================================================

#[tokio::test]
async fn health_check_reports_ok() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
