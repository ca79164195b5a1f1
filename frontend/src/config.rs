use web_sys::window;

/// Port the trunk dev server listens on. The API runs separately in that setup.
const DEV_SERVER_PORT: &str = "8080";
const DEV_API_BASE_URL: &str = "http://127.0.0.1:3000";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let Ok(port) = location.port() {
            if port == DEV_SERVER_PORT {
                return DEV_API_BASE_URL.to_string();
            }
        }
        if let Ok(host) = location.host() {
            // Served by the backend itself, keep the same origin
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    DEV_API_BASE_URL.to_string()
}

pub fn api_url(path: &str) -> String {
    format!("{}/api{}", get_api_base_url(), path)
}
