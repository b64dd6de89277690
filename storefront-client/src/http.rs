//! HTTP client for the storefront API

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::{
    CategoryCreate, CategoryUpdate, CategoryWithCounts, Faq, FaqCreate, FaqFilter, FaqUpdate,
    ImageMessage, ImageMessageCreate, ImageMessageUpdate, MenuItem, MenuItemCreate,
    MenuItemFilter, MenuItemUpdate, MiscContent, MiscContentCreate, MiscContentFilter,
    MiscContentUpdate, Product, ProductCreate, ProductFilter, ProductUpdate, ReviewSummary,
    SitePage,
};
use shared::response::{AdminSummary, DeleteResponse, HealthResponse, UploadResponse};

/// HTTP client for the storefront server
///
/// One request per call; no retries.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<DeleteResponse> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, body = %text, "Request failed");
            return Err(ClientError::from_response(status, &text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    // ========== Health ==========

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<CategoryWithCounts>> {
        self.get("/api/categories").await
    }

    pub async fn get_category(&self, id: &str) -> ClientResult<CategoryWithCounts> {
        self.get(&format!("/api/categories/{id}")).await
    }

    pub async fn create_category(&self, data: &CategoryCreate) -> ClientResult<CategoryWithCounts> {
        self.post("/api/categories", data).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        data: &CategoryUpdate,
    ) -> ClientResult<CategoryWithCounts> {
        self.put(&format!("/api/categories/{id}"), data).await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/api/categories/{id}")).await
    }

    // ========== Products ==========

    pub async fn list_products(&self, filter: &ProductFilter) -> ClientResult<Vec<Product>> {
        self.get_with_query("/api/products", filter).await
    }

    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        self.get(&format!("/api/products/{id}")).await
    }

    pub async fn create_product(&self, data: &ProductCreate) -> ClientResult<Product> {
        self.post("/api/products", data).await
    }

    pub async fn update_product(&self, id: &str, data: &ProductUpdate) -> ClientResult<Product> {
        self.put(&format!("/api/products/{id}"), data).await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/api/products/{id}")).await
    }

    // ========== Menu Items ==========

    pub async fn list_menu_items(&self, filter: &MenuItemFilter) -> ClientResult<Vec<MenuItem>> {
        self.get_with_query("/api/menu-items", filter).await
    }

    pub async fn get_menu_item(&self, id: &str) -> ClientResult<MenuItem> {
        self.get(&format!("/api/menu-items/{id}")).await
    }

    pub async fn create_menu_item(&self, data: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.post("/api/menu-items", data).await
    }

    pub async fn update_menu_item(&self, id: &str, data: &MenuItemUpdate) -> ClientResult<MenuItem> {
        self.put(&format!("/api/menu-items/{id}"), data).await
    }

    pub async fn delete_menu_item(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/api/menu-items/{id}")).await
    }

    // ========== FAQs ==========

    pub async fn list_faqs(&self, filter: &FaqFilter) -> ClientResult<Vec<Faq>> {
        self.get_with_query("/api/faqs", filter).await
    }

    pub async fn get_faq(&self, id: &str) -> ClientResult<Faq> {
        self.get(&format!("/api/faqs/{id}")).await
    }

    pub async fn create_faq(&self, data: &FaqCreate) -> ClientResult<Faq> {
        self.post("/api/faqs", data).await
    }

    pub async fn update_faq(&self, id: &str, data: &FaqUpdate) -> ClientResult<Faq> {
        self.put(&format!("/api/faqs/{id}"), data).await
    }

    pub async fn delete_faq(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/api/faqs/{id}")).await
    }

    // ========== Image Messages ==========

    pub async fn list_image_messages(&self) -> ClientResult<Vec<ImageMessage>> {
        self.get("/api/image-messages").await
    }

    pub async fn get_image_message(&self, id: &str) -> ClientResult<ImageMessage> {
        self.get(&format!("/api/image-messages/{id}")).await
    }

    pub async fn create_image_message(&self, data: &ImageMessageCreate) -> ClientResult<ImageMessage> {
        self.post("/api/image-messages", data).await
    }

    pub async fn update_image_message(
        &self,
        id: &str,
        data: &ImageMessageUpdate,
    ) -> ClientResult<ImageMessage> {
        self.put(&format!("/api/image-messages/{id}"), data).await
    }

    pub async fn delete_image_message(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/api/image-messages/{id}")).await
    }

    // ========== Misc Content ==========

    pub async fn list_misc_content(&self, filter: &MiscContentFilter) -> ClientResult<Vec<MiscContent>> {
        self.get_with_query("/api/misc-content", filter).await
    }

    pub async fn get_misc_content(&self, id: &str) -> ClientResult<MiscContent> {
        self.get(&format!("/api/misc-content/{id}")).await
    }

    pub async fn create_misc_content(&self, data: &MiscContentCreate) -> ClientResult<MiscContent> {
        self.post("/api/misc-content", data).await
    }

    pub async fn update_misc_content(
        &self,
        id: &str,
        data: &MiscContentUpdate,
    ) -> ClientResult<MiscContent> {
        self.put(&format!("/api/misc-content/{id}"), data).await
    }

    pub async fn delete_misc_content(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/api/misc-content/{id}")).await
    }

    // ========== Site ==========

    /// Upload an image as multipart field `file`
    pub async fn upload_image(
        &self,
        filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<UploadResponse> {
        let part = Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn reviews(&self) -> ClientResult<ReviewSummary> {
        self.get("/api/reviews").await
    }

    pub async fn site(&self) -> ClientResult<SitePage> {
        self.get("/api/site").await
    }

    pub async fn admin_summary(&self) -> ClientResult<AdminSummary> {
        self.get("/api/admin/summary").await
    }
}
