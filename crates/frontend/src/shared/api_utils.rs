//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `[api].base` from the configuration. When it is empty the backend is
/// expected on the same origin that served the page.
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/etiquetas/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let configured = config().api.base.as_str();
    if !configured.is_empty() {
        return configured.to_string();
    }

    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://shop.example.com/", "/api/marcas"),
            "https://shop.example.com/api/marcas"
        );
        assert_eq!(join_url("", "/api/marcas"), "/api/marcas");
    }
}
