//! # REST API for Expenses
//!
//! Serves the expense and report endpoints from an in-memory store:
//! - `GET|POST /api/expenses`, with an optional `?category=` constraint on GET
//! - `PUT|DELETE /api/expenses/:id`
//! - `GET /api/reports/total-expenses-per-category`
//! - `GET /api/reports/monthly-spending-trends`

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use shared::{Category, CategoryFilter, ExpenseId, ExpenseInput, MemoryExpenseStore, StoreError};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[derive(Clone, Default)]
pub struct AppState {
    pub store: MemoryExpenseStore,
}

impl AppState {
    pub fn new(store: MemoryExpenseStore) -> Self {
        Self { store }
    }
}

/// Store errors translated to HTTP responses.
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Submission(_) => StatusCode::BAD_REQUEST,
            StoreError::Network(_) => StatusCode::BAD_GATEWAY,
        };
        warn!("Request failed with {}: {}", status, self.0);
        (status, self.0.to_string()).into_response()
    }
}

// Query parameters for expense listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/:id", put(update_expense).delete(delete_expense))
        .route("/reports/total-expenses-per-category", get(category_totals))
        .route("/reports/monthly-spending-trends", get(monthly_trends));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// List expenses, optionally constrained to one category
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    info!("GET /api/expenses - query: {:?}", query);

    let records = match query.category.as_deref().map(str::trim) {
        None | Some("") => state.store.find_all(CategoryFilter::All),
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => state.store.find_all(CategoryFilter::Only(category)),
            // Nothing is ever stored under a category outside the fixed set
            Err(_) => Vec::new(),
        },
    };

    Json(records)
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(input): Json<ExpenseInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/expenses - request: {:?}", input);

    let record = state.store.insert(input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ExpenseInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/expenses/{} - request: {:?}", id, input);

    let record = state.store.replace(&ExpenseId::new(id), input)?;
    Ok(Json(record))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("DELETE /api/expenses/{}", id);

    state.store.remove(&ExpenseId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn category_totals(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/total-expenses-per-category");
    Json(state.store.totals_by_category())
}

pub async fn monthly_trends(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/monthly-spending-trends");
    Json(state.store.totals_by_month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use shared::{CategoryTotal, ExpenseRecord, MonthlyTotal};
    use tower::ServiceExt;

    fn setup_test_router() -> (Router, MemoryExpenseStore) {
        let store = MemoryExpenseStore::new();
        (router(AppState::new(store.clone())), store)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn lunch() -> serde_json::Value {
        json!({
            "amount": 42,
            "category": "Food",
            "date": "2024/03/01",
            "description": "Lunch"
        })
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (app, _store) = setup_test_router();

        let response = send(&app, "POST", "/api/expenses", Some(lunch())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: serde_json::Value = read_json(response).await;
        assert!(created["_id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(created["date"], "2024/03/01");

        let response = send(&app, "GET", "/api/expenses", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let listed: Vec<ExpenseRecord> = read_json(response).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount, 42.0);
        assert_eq!(listed[0].description, "Lunch");
    }

    #[tokio::test]
    async fn test_create_rejects_negative_amount() {
        let (app, store) = setup_test_router();
        let mut body = lunch();
        body["amount"] = json!(-3);

        let response = send(&app, "POST", "/api/expenses", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_category() {
        let (app, store) = setup_test_router();
        let mut body = lunch();
        body["category"] = json!("Rent");

        let response = send(&app, "POST", "/api/expenses", Some(body)).await;
        assert!(response.status().is_client_error());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let (app, _store) = setup_test_router();
        send(&app, "POST", "/api/expenses", Some(lunch())).await;
        let mut bus = lunch();
        bus["category"] = json!("Transport");
        bus["description"] = json!("Bus");
        send(&app, "POST", "/api/expenses", Some(bus)).await;

        let transport: Vec<ExpenseRecord> =
            read_json(send(&app, "GET", "/api/expenses?category=Transport", None).await).await;
        assert_eq!(transport.len(), 1);
        assert_eq!(transport[0].description, "Bus");

        let unknown: Vec<ExpenseRecord> =
            read_json(send(&app, "GET", "/api/expenses?category=Rent", None).await).await;
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let (app, _store) = setup_test_router();
        let created: ExpenseRecord =
            read_json(send(&app, "POST", "/api/expenses", Some(lunch())).await).await;

        let mut body = lunch();
        body["amount"] = json!(50);
        let uri = format!("/api/expenses/{}", created.id);
        let response = send(&app, "PUT", &uri, Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: ExpenseRecord = read_json(response).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, 50.0);
        assert_eq!(updated.description, "Lunch");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (app, _store) = setup_test_router();
        let response = send(&app, "PUT", "/api/expenses/nope", Some(lunch())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let (app, store) = setup_test_router();
        let created: ExpenseRecord =
            read_json(send(&app, "POST", "/api/expenses", Some(lunch())).await).await;
        let uri = format!("/api/expenses/{}", created.id);

        let first = send(&app, "DELETE", &uri, None).await;
        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert!(store.is_empty());

        let second = send(&app, "DELETE", &uri, None).await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reports() {
        let (app, _store) = setup_test_router();
        send(&app, "POST", "/api/expenses", Some(lunch())).await;
        let mut april = lunch();
        april["date"] = json!("2024/04/02");
        april["amount"] = json!(8);
        send(&app, "POST", "/api/expenses", Some(april)).await;

        let totals: Vec<CategoryTotal> =
            read_json(send(&app, "GET", "/api/reports/total-expenses-per-category", None).await).await;
        assert_eq!(totals, vec![CategoryTotal { category: "Food".to_string(), total_amount: 50.0 }]);

        let trends: Vec<MonthlyTotal> =
            read_json(send(&app, "GET", "/api/reports/monthly-spending-trends", None).await).await;
        let periods: Vec<String> = trends.iter().map(|t| t.period.to_string()).collect();
        assert_eq!(periods, vec!["2024-03", "2024-04"]);
    }
}
