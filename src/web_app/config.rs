// web_app/config.rs - Backend endpoint configuration

/// Compile-time override for the backend base URL.
const API_BASE_OVERRIDE: Option<&str> = option_env!("STOREFRONT_API_BASE");

/// Local development backend.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the storefront REST backend.
///
/// Resolved once at compile time from `STOREFRONT_API_BASE`, falling
/// back to the local development default. Trailing slashes are trimmed
/// so path concatenation stays predictable.
pub fn api_base() -> String {
    API_BASE_OVERRIDE
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}
