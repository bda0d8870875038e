//! API utilities for frontend-backend communication
//!
//! Holds the backend origin, resolved once at startup, and builds full
//! request URLs from API paths.

use once_cell::sync::OnceCell;

/// Port the analytics backend listens on.
const BACKEND_PORT: u16 = 8000;

/// Backend origin configuration, fixed for the lifetime of the app.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Derive the backend origin from the current window location,
    /// keeping the page's protocol and hostname and swapping the port.
    ///
    /// Falls back to an empty base (relative URLs) if window is not
    /// available.
    pub fn from_window() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::new(""),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        Self::new(format!("{}//{}:{}", protocol, hostname, BACKEND_PORT))
    }
}

static API_CONFIG: OnceCell<ApiConfig> = OnceCell::new();

/// Install the API configuration. The first call wins, later calls are
/// ignored.
pub fn init_api_config(config: ApiConfig) {
    let _ = API_CONFIG.set(config);
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/kpis/");
/// ```
pub fn api_url(path: &str) -> String {
    let base = API_CONFIG.get().map(|c| c.base_url.as_str()).unwrap_or("");
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_uses_configured_base() {
        init_api_config(ApiConfig::new("http://localhost:8000"));
        assert_eq!(api_url("/api/kpis/"), "http://localhost:8000/api/kpis/");
    }
}
