use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    CategoryFilter, CategoryTotal, ClientConfig, ExpenseId, ExpenseInput, ExpenseRecord, ExpenseStore,
    MonthlyTotal, ReportSource, StoreError, StoreOperation,
};

/// API client for communicating with the expense backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Create a new API client for an injected configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        self.config.api_base_url()
    }

    async fn send(op: &StoreOperation, request: Request) -> Result<Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| op.transport_failure(e.to_string()))?;

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(op.status_failure(status, &body))
        }
    }

    async fn fetch_json<T: DeserializeOwned>(op: StoreOperation, request: Request) -> Result<T, StoreError> {
        let response = Self::send(&op, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| op.decode_failure(e.to_string()))
    }

    fn bodyless(op: &StoreOperation, builder: RequestBuilder) -> Result<Request, StoreError> {
        builder.build().map_err(|e| op.transport_failure(e.to_string()))
    }

    fn with_body(op: &StoreOperation, builder: RequestBuilder, input: &ExpenseInput) -> Result<Request, StoreError> {
        builder
            .json(input)
            .map_err(|e| op.decode_failure(format!("failed to serialize request: {}", e)))
    }
}

#[async_trait(?Send)]
impl ExpenseStore for ApiClient {
    async fn list(&self, filter: CategoryFilter) -> Result<Vec<ExpenseRecord>, StoreError> {
        let url = self.config.routes().expenses(filter);
        let request = Self::bodyless(&StoreOperation::List, Request::get(&url))?;
        Self::fetch_json(StoreOperation::List, request).await
    }

    async fn create(&self, input: &ExpenseInput) -> Result<ExpenseRecord, StoreError> {
        let op = StoreOperation::Create;
        let url = self.config.routes().expenses(CategoryFilter::All);
        let request = Self::with_body(&op, Request::post(&url), input)?;
        Self::fetch_json(op, request).await
    }

    async fn update(&self, id: &ExpenseId, input: &ExpenseInput) -> Result<ExpenseRecord, StoreError> {
        let op = StoreOperation::Update(id.clone());
        let url = self.config.routes().expense(id);
        let request = Self::with_body(&op, Request::put(&url), input)?;
        Self::fetch_json(op, request).await
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), StoreError> {
        let op = StoreOperation::Delete(id.clone());
        let url = self.config.routes().expense(id);
        let request = Self::bodyless(&op, Request::delete(&url))?;
        // The body of a successful delete is ignored
        Self::send(&op, request).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl ReportSource for ApiClient {
    async fn category_totals(&self) -> Result<Vec<CategoryTotal>, StoreError> {
        let url = self.config.routes().category_totals();
        let request = Self::bodyless(&StoreOperation::Report, Request::get(&url))?;
        Self::fetch_json(StoreOperation::Report, request).await
    }

    async fn monthly_trends(&self) -> Result<Vec<MonthlyTotal>, StoreError> {
        let url = self.config.routes().monthly_trends();
        let request = Self::bodyless(&StoreOperation::Report, Request::get(&url))?;
        Self::fetch_json(StoreOperation::Report, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiClient::new().base_url(), shared::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_custom_base_url_is_trimmed() {
        let client = ApiClient::from_config(ClientConfig::with_base_url("http://127.0.0.1:9000/"));
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_ne!(client, ApiClient::new());
    }
}
