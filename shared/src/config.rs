//! Client configuration and the REST routes derived from it.

use crate::expense::ExpenseId;
use crate::filter::CategoryFilter;

/// Backend address used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Settings injected into the client at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Trailing slashes are dropped so routes can be appended directly.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional environment value; blank means "use the default".
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn routes(&self) -> ApiRoutes<'_> {
        ApiRoutes { base: &self.api_base_url }
    }
}

/// URL builder for the expense REST surface.
#[derive(Debug, Clone, Copy)]
pub struct ApiRoutes<'a> {
    base: &'a str,
}

impl ApiRoutes<'_> {
    pub fn expenses(&self, filter: CategoryFilter) -> String {
        match filter.category() {
            Some(category) => format!("{}/api/expenses?category={}", self.base, category),
            None => format!("{}/api/expenses", self.base),
        }
    }

    pub fn expense(&self, id: &ExpenseId) -> String {
        format!("{}/api/expenses/{}", self.base, id)
    }

    pub fn category_totals(&self) -> String {
        format!("{}/api/reports/total-expenses-per-category", self.base)
    }

    pub fn monthly_trends(&self) -> String {
        format!("{}/api/reports/monthly-spending-trends", self.base)
    }
}
