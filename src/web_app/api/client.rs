// web_app/api/client.rs - HTTP client for the storefront backend

use crate::web_app::config;
use crate::web_app::model::Category;

/// Shared HTTP client owning the backend base URL.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference
/// counted. One instance is created at the app root and handed to every
/// consumer through context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Client against the configured backend
    pub fn new() -> Self {
        Self::with_base(config::api_base())
    }

    /// Client against an explicit base URL
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for a backend path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Query parameters for a catalog listing.
    ///
    /// The unfiltered catalog and a category filter must stay
    /// distinguishable requests: no filter means no query string at all.
    pub(crate) fn products_query(filter: Option<Category>) -> Vec<(&'static str, &'static str)> {
        match filter {
            Some(category) => vec![("category", category.key())],
            None => Vec::new(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::with_base("http://localhost:8000");
        assert_eq!(client.url("/products"), "http://localhost:8000/products");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base("https://api.example.com/");
        assert_eq!(client.url("/me"), "https://api.example.com/me");
    }

    #[test]
    fn test_filtered_and_unfiltered_requests_are_distinguishable() {
        // `?category=dhoop` vs no query parameter, never conflated
        assert_eq!(
            ApiClient::products_query(Some(Category::Dhoop)),
            vec![("category", "dhoop")]
        );
        assert!(ApiClient::products_query(None).is_empty());
    }

    #[test]
    fn test_each_category_maps_to_its_own_query() {
        for category in Category::ALL {
            let query = ApiClient::products_query(Some(category));
            assert_eq!(query, vec![("category", category.key())]);
        }
    }
}
