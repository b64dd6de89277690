//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and database probe
//! - [`categories`] - category CRUD
//! - [`products`] - product CRUD
//! - [`menu_items`] - menu item CRUD
//! - [`faqs`] - FAQ CRUD
//! - [`image_messages`] - image message CRUD
//! - [`misc_content`] - sectioned page content CRUD
//! - [`upload`] - image upload
//! - [`reviews`] - customer reviews
//! - [`site`] - composed public page
//! - [`admin`] - dashboard counts

mod extract;

pub mod admin;
pub mod categories;
pub mod faqs;
pub mod health;
pub mod image_messages;
pub mod menu_items;
pub mod misc_content;
pub mod products;
pub mod reviews;
pub mod site;
pub mod upload;

pub use extract::{ApiQuery, ValidatedJson};

use axum::extract::DefaultBodyLimit;
use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::core::{ServerState, StorageBackend};
use shared::error::{AppError, ErrorCode};

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&shared::util::new_id())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP access log
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// Unmatched paths when no frontend bundle is served
async fn not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}

/// Every API route (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        // Catalog
        .merge(categories::router())
        .merge(products::router())
        .merge(menu_items::router())
        // Content
        .merge(faqs::router())
        .merge(image_messages::router())
        .merge(misc_content::router())
        // Site
        .merge(upload::router())
        .merge(reviews::router())
        .merge(site::router())
        .merge(admin::router())
}

fn cors_layer(allow_origin: &str) -> CorsLayer {
    if allow_origin == "*" {
        return CorsLayer::permissive();
    }
    match HeaderValue::from_str(allow_origin) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(origin = %allow_origin, "Invalid CORS_ALLOW_ORIGIN, allowing any origin");
            CorsLayer::permissive()
        }
    }
}

/// Fully configured application: routes, static files, middleware and state
///
/// Used by the HTTP server and by tests driving the router in process.
pub fn build_app(state: ServerState) -> Router {
    let config = state.config.clone();
    let mut app = build_router();

    if config.storage_backend == StorageBackend::Local {
        app = app.nest_service("/uploads", ServeDir::new(&config.upload_dir));
    }

    app = match &config.static_dir {
        // SPA: unknown paths get index.html so client-side routing works
        Some(dir) => {
            app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))))
        }
        None => app.fallback(not_found),
    };

    app.layer(DefaultBodyLimit::max(config.max_upload_bytes + MULTIPART_OVERHEAD))
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        .layer(cors_layer(&config.cors_allow_origin))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
