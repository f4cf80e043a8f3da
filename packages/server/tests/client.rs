use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use folio_api::{router, AppState, Catalog, ClientError, ProjectsClient};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

async fn spawn(app: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), handle)
}

async fn spawn_catalog() -> (String, JoinHandle<()>) {
    spawn(router(AppState::new(Catalog::builtin()))).await
}

/// Catalog routes that count how many requests reach the server.
fn counting_app(hits: Arc<AtomicUsize>) -> Router {
    let summary_hits = hits.clone();
    Router::new()
        .route(
            "/api/projects/summary",
            get(move || {
                summary_hits.fetch_add(1, Ordering::SeqCst);
                async { Json(json!({ "projects": [{ "id": 1, "slug": "a", "title": "A" }] })) }
            }),
        )
        .route(
            "/api/projects/{slug}",
            get(move |Path(slug): Path<String>| {
                hits.fetch_add(1, Ordering::SeqCst);
                async move { Json(json!({ "project": { "id": 1, "slug": slug, "title": "A" } })) }
            }),
        )
}

#[tokio::test]
async fn summary_is_cached_after_first_success() {
    let hits = Arc::new(AtomicUsize::new(0));
    let (base, _server) = spawn(counting_app(hits.clone())).await;
    let client = ProjectsClient::new(&base).unwrap();

    let first = client.fetch_projects_summary().await.unwrap();
    let second = client.fetch_projects_summary().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn detail_is_cached_per_slug() {
    let hits = Arc::new(AtomicUsize::new(0));
    let (base, _server) = spawn(counting_app(hits.clone())).await;
    let client = ProjectsClient::new(&base).unwrap();

    let project = client.fetch_project_detail("one").await.unwrap();
    let cached = client.fetch_project_detail("one").await.unwrap();
    assert_eq!(cached, project);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let other = client.fetch_project_detail("two").await.unwrap();
    assert_eq!(other.slug, "two");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn serves_bundled_catalog_end_to_end() {
    let (base, _server) = spawn_catalog().await;
    let client = ProjectsClient::new(&base).unwrap();

    assert_eq!(client.fetch_projects_summary().await.unwrap().len(), 5);
    let project = client.fetch_project_detail("landing-page-saas").await.unwrap();
    assert_eq!(project.title(), Some("Landing Page SaaS"));
}

#[tokio::test]
async fn not_found_carries_server_message() {
    let (base, _server) = spawn_catalog().await;
    let client = ProjectsClient::new(&base).unwrap();

    let err = client.fetch_project_detail("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::Http { message, data, .. } => {
            assert_eq!(message, "Project not found.");
            assert_eq!(data, Some(json!({ "message": "Project not found." })));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn failures_are_not_cached() {
    let (base, _server) = spawn_catalog().await;
    let client = ProjectsClient::new(&base).unwrap();

    assert!(client.fetch_project_detail("missing").await.is_err());
    assert!(client.fetch_project_detail("missing").await.is_err());
    assert!(client.fetch_project_detail("test-project").await.is_ok());
}

#[tokio::test]
async fn unreachable_server_is_no_response() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ProjectsClient::new(&format!("http://{addr}/api")).unwrap();
    let err = client.fetch_projects_summary().await.unwrap_err();
    assert!(matches!(err, ClientError::NoResponse(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn empty_slug_skips_the_request() {
    let client = ProjectsClient::new("http://127.0.0.1:9/api").unwrap();
    let err = client.fetch_project_detail("").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingSlug));
}

#[tokio::test]
async fn accepts_legacy_payload_shapes() {
    let app = Router::new()
        .route(
            "/api/projects/summary",
            get(|| async { Json(json!([{ "id": 1, "slug": "a", "title": "A" }])) }),
        )
        .route(
            "/api/projects/{slug}",
            get(|| async { Json(json!({ "id": 1, "slug": "a", "title": "A" })) }),
        );
    let (base, _server) = spawn(app).await;
    let client = ProjectsClient::new(&base).unwrap();

    let summary = client.fetch_projects_summary().await.unwrap();
    assert_eq!(summary[0].slug, "a");

    let project = client.fetch_project_detail("a").await.unwrap();
    assert_eq!(project.title(), Some("A"));
}

#[tokio::test]
async fn server_errors_without_message_get_generic_text() {
    let app = Router::new().route(
        "/api/projects/summary",
        get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let (base, _server) = spawn(app).await;
    let client = ProjectsClient::new(&base).unwrap();

    let err = client.fetch_projects_summary().await.unwrap_err();
    match err {
        ClientError::Http { status, message, data } => {
            assert_eq!(status, 502);
            assert_eq!(message, "A server error occurred. Please try again later.");
            assert!(data.is_none());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
