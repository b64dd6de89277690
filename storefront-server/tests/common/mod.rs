//! Shared fixtures: an in-memory database, a temp upload directory and
//! helpers that drive the router in process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use storefront_server::services::{ImageStore, LocalStore, ReviewsService};
use storefront_server::{Config, DbService, ServerState, build_app};

pub const PUBLIC_BASE_URL: &str = "http://shop.test";

pub struct TestApp {
    pub state: ServerState,
    pub app: Router,
    pub upload_dir: TempDir,
}

pub fn test_config(upload_dir: &TempDir) -> Config {
    Config {
        upload_dir: upload_dir.path().to_path_buf(),
        public_base_url: PUBLIC_BASE_URL.into(),
        ..Config::default()
    }
}

pub async fn test_state(config: Config) -> ServerState {
    let db = DbService::in_memory().await.unwrap();
    let storage: Arc<dyn ImageStore> = Arc::new(LocalStore::new(
        config.upload_dir.clone(),
        &config.public_base_url,
    ));
    let reviews = ReviewsService::new(&config).unwrap();
    ServerState::new(config, db, storage, reviews)
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Adjust the default test config before the state is built
    pub async fn with_config(adjust: impl FnOnce(&mut Config)) -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let mut config = test_config(&upload_dir);
        adjust(&mut config);
        let state = test_state(config).await;
        let app = build_app(state.clone());
        Self {
            state,
            app,
            upload_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::DELETE, uri, None).await
    }

    /// POST and return the created record's id
    pub async fn create(&self, uri: &str, body: Value) -> String {
        let (status, body) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "create {uri} failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_category(&self, name: &str) -> String {
        self.create("/api/categories", serde_json::json!({ "name": name }))
            .await
    }

    pub async fn create_product(&self, title: &str, category_id: Option<&str>) -> String {
        self.create(
            "/api/products",
            serde_json::json!({
                "title": title,
                "description": format!("{title} description"),
                "mainImageUrl": "https://cdn.example.com/p.jpg",
                "categoryId": category_id,
            }),
        )
        .await
    }
}

/// Fields named in a `details` list
pub fn detail_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .filter_map(|d| d["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Multipart body with a single `file` field
pub fn multipart_file(filename: &str, content_type: &str, data: &[u8]) -> (String, Vec<u8>) {
    let boundary = "storefront-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

/// Small solid-colour PNG
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([180, 90, 30]));
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}
