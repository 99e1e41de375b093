// web_app/api/mod.rs - HTTP operations against the storefront backend
//
// Every backend call the UI makes lives here. Each operation logs at
// its boundary and converts transport failures into the `ApiError`
// taxonomy; nothing in this module touches component state.

pub mod auth;
pub mod client;
pub mod error;
pub mod products;
pub mod support;

pub use client::ApiClient;
pub use error::ApiError;
