#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use operator_catalog::{CatalogLookup, MovieCatalog, MovieDescriptor};
use operator_core::catalog_policy::CatalogFailurePolicy;
use operator_core::types::DbId;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use operator_api::routes;
use operator_api::services::{MovieGate, PurchaseService, RentalService};
use operator_api::state::AppState;

// ---------------------------------------------------------------------------
// Stub catalog
// ---------------------------------------------------------------------------

/// In-process catalog that knows a fixed set of movie ids.
///
/// When `unavailable` is set every lookup reports an outage instead.
pub struct StubCatalog {
    known: HashSet<DbId>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl StubCatalog {
    pub fn with_movies(ids: &[DbId]) -> Arc<Self> {
        Arc::new(Self {
            known: ids.iter().copied().collect(),
            unavailable: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            known: HashSet::new(),
            unavailable: true,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieCatalog for StubCatalog {
    async fn lookup(&self, movie_id: DbId) -> CatalogLookup {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return CatalogLookup::Unavailable("connection refused".into());
        }
        if self.known.contains(&movie_id) {
            CatalogLookup::Found(MovieDescriptor {
                name: Some(format!("Movie {movie_id}")),
                ..Default::default()
            })
        } else {
            CatalogLookup::NotFound
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build application state around a fresh in-memory store and `catalog`.
pub fn test_state(catalog: Arc<dyn MovieCatalog>, policy: CatalogFailurePolicy) -> AppState {
    let pool = operator_db::create_pool();
    let gate = MovieGate::new(catalog, policy);
    AppState {
        pool: pool.clone(),
        rentals: Arc::new(RentalService::new(pool.clone(), gate.clone())),
        purchases: Arc::new(PurchaseService::new(pool, gate)),
    }
}

/// Build the full application router with all middleware layers.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack production uses.
pub fn build_test_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// App whose catalog knows `movies`, with the default (closed) policy.
pub fn app_with_movies(movies: &[DbId]) -> (Router, AppState) {
    let state = test_state(StubCatalog::with_movies(movies), CatalogFailurePolicy::Closed);
    (build_test_app(state.clone()), state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, content_type: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, "application/json", body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, "application/json", body)).await
}

/// Send a PATCH with the `application/merge-patch+json` content type.
pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(
        app,
        json_request(Method::PATCH, uri, "application/merge-patch+json", body),
    )
    .await
}

/// Send a PATCH with an arbitrary raw body.
pub async fn patch_raw(app: &Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(CONTENT_TYPE, "application/merge-patch+json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract `data.id` from a create response.
pub async fn created_id(response: Response) -> i64 {
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
