use crate::config::VOICE_BACKEND_PORT;

/// Resolves the voice backend's base URL. Strategies in fixed precedence:
///
/// 1. Explicit configuration (`VOICE_BACKEND_URL`).
/// 2. The inbound request's host header with the backend port substituted,
///    so a deployment reached at `dashboard.example.com` talks to
///    `http://dashboard.example.com:5000` without any configuration.
/// 3. Localhost fallback for local development.
///
/// Context is passed in explicitly so the resolution stays pure and testable.
pub fn resolve_backend_url(override_url: Option<&str>, host_header: Option<&str>) -> String {
    if let Some(url) = override_url.filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    if let Some(host) = host_header {
        let hostname = host.split(':').next().unwrap_or("");
        if !hostname.is_empty()
            && hostname != "127.0.0.1"
            && !hostname.contains("localhost")
        {
            return format!("http://{}:{}", hostname, VOICE_BACKEND_PORT);
        }
    }

    format!("http://localhost:{}", VOICE_BACKEND_PORT)
}
