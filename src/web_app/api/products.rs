// web_app/api/products.rs - Catalog listing and admin creation

use crate::web_app::model::{Category, NewProduct, Product};

use super::{ApiClient, ApiError};

/// Fetch the catalog, optionally narrowed to one category.
///
/// `None` requests the full catalog; a category is passed through as an
/// equality filter understood by the backend.
pub async fn list_products(
    client: &ApiClient,
    filter: Option<Category>,
) -> Result<Vec<Product>, ApiError> {
    let response = client
        .http()
        .get(client.url("/products"))
        .query(&ApiClient::products_query(filter))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    let products: Vec<Product> = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    tracing::info!(
        "catalog listing for {:?} returned {} products",
        filter.map(Category::key),
        products.len()
    );
    Ok(products)
}

/// Create a product through the admin endpoint.
///
/// The backend is the authority on authorization: a 401/403 comes back
/// as `Auth` no matter what the local role check said.
pub async fn create_product(
    client: &ApiClient,
    token: &str,
    product: &NewProduct,
) -> Result<Product, ApiError> {
    let response = client
        .http()
        .post(client.url("/admin/products"))
        .bearer_auth(token)
        .json(product)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        tracing::info!("product creation rejected with status {status}");
        return Err(ApiError::Auth);
    }
    if !status.is_success() {
        tracing::error!("product creation failed with status {status}");
        return Err(ApiError::Status(status.as_u16()));
    }

    let created: Product = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    tracing::info!("created product {}", created.id);
    Ok(created)
}
