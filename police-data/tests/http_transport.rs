//! HttpTransport and PoliceDataService against a local HTTP server.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use police_data::police::{PoliceDataService, ServiceError};
use police_data::transport::{HttpTransport, Transport, TransportConfig, TransportError};

async fn forces() -> Json<serde_json::Value> {
    Json(json!([
        {"id": "leicestershire", "name": "Leicestershire Police"},
        {"id": "metropolitan", "name": "Metropolitan Police Service"}
    ]))
}

async fn force(Path(id): Path<String>) -> Response {
    if id == "leicestershire" {
        Json(json!({
            "id": "leicestershire",
            "name": "Leicestershire Police",
            "telephone": "101",
            "engagement_methods": [{"title": "facebook", "url": "http://www.facebook.com/leicspolice"}]
        }))
        .into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Echoes the query string back inside a single crime record.
async fn crimes(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    Json(json!([{
        "category": "burglary",
        "month": params.get("date").cloned().unwrap_or_else(|| "2024-02".into()),
        "context": format!("lat={} lng={}", params["lat"], params["lng"]),
    }]))
}

async fn broken() -> &'static str {
    "<html>Service Unavailable</html>"
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/forces", get(forces))
        .route("/api/forces/:id", get(force))
        .route("/api/crimes-at-location", get(crimes))
        .route("/api/crime-categories", get(broken))
        .route("/api/stops-street", get(empty));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

fn transport(base_url: &str) -> HttpTransport {
    HttpTransport::new(TransportConfig::new().with_base_url(base_url).with_timeout(5)).unwrap()
}

#[tokio::test]
async fn get_decodes_json() {
    let base = spawn_server().await;

    let value = transport(&base).get("/forces", &[]).await.unwrap();

    assert_eq!(value[0]["id"], "leicestershire");
}

#[tokio::test]
async fn non_2xx_is_status_error() {
    let base = spawn_server().await;

    let err = transport(&base).get("/forces/atlantis", &[]).await.unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 404, .. }));
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let base = spawn_server().await;

    let err = transport(&base)
        .get("/crime-categories", &[])
        .await
        .unwrap_err();

    match err {
        TransportError::Json { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>Service Unavailable</html>"));
        }
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_is_null() {
    let base = spawn_server().await;

    let value = transport(&base).get("/stops-street", &[]).await.unwrap();

    assert!(value.is_null());
}

#[tokio::test]
async fn refused_connection_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = transport(&format!("http://{addr}/api"))
        .get("/forces", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Http(_)));
}

#[tokio::test]
async fn service_sends_query_params_over_http() {
    let base = spawn_server().await;
    let service = PoliceDataService::new(transport(&base));

    let crimes = service
        .crimes_at_location(52.629729, -1.131592, Some("2024-01"))
        .await
        .unwrap();

    assert_eq!(crimes.len(), 1);
    assert_eq!(crimes[0].context.as_deref(), Some("lat=52.629729 lng=-1.131592"));
    assert_eq!(crimes[0].month.map(|m| m.to_string()).as_deref(), Some("2024-01"));
}

#[tokio::test]
async fn service_force_lookup_over_http() {
    let base = spawn_server().await;
    let service = PoliceDataService::new(transport(&base));

    let forces = service.list_forces().await.unwrap();
    assert_eq!(forces.len(), 2);

    let force = service.force_detail(&forces[0].id).await.unwrap();
    assert_eq!(force.telephone.as_deref(), Some("101"));

    let err = service.force_detail("atlantis").await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport { .. }));
    assert_eq!(err.status(), Some(404));
}
