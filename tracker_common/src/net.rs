//! Shared networking constants and helpers used by client and server.

/// Default HTTP port of the tracker server.
pub const HTTP_PORT: u16 = 8050;
/// Default interface the server binds to.
pub const BIND_HOST: &str = "127.0.0.1";

/// Route serving the HTML page.
pub const PAGE_PATH: &str = "/";
/// Route of the chart update handler.
pub const CHART_PATH: &str = "/api/chart";
/// Route of the favorites handlers.
pub const FAVORITES_PATH: &str = "/api/favorites";
/// Liveness route.
pub const HEALTH_PATH: &str = "/health";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default base URL the client uses to reach the server.
pub fn default_server_url() -> String {
    format!("http://{}", addr(BIND_HOST, HTTP_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_points_at_local_port() {
        assert_eq!(default_server_url(), "http://127.0.0.1:8050");
    }
}
