use axum::Router;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";

fn resolve_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}

fn resolve_dist_dir(raw: Option<String>) -> PathBuf {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR))
}

/// Serves the trunk build output with an SPA index fallback. The site is
/// fully static; there are no application endpoints.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = resolve_port(std::env::var("PORT").ok());
    let dist_dir = resolve_dist_dir(std::env::var("SITE_DIST_DIR").ok());
    let index_file = dist_dir.join("index.html");

    let static_service = ServeDir::new(&dist_dir).not_found_service(ServeFile::new(&index_file));
    let app = Router::new().fallback_service(static_service);

    let bind_address = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("serving {} on http://127.0.0.1:{port}", dist_dir.display());
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_when_unset_or_invalid() {
        assert_eq!(resolve_port(None), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("0".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("70000".to_string())), DEFAULT_PORT);
    }

    #[test]
    fn port_accepts_a_valid_override() {
        assert_eq!(resolve_port(Some("3000".to_string())), 3000);
        assert_eq!(resolve_port(Some(" 3000 ".to_string())), 3000);
    }

    #[test]
    fn dist_dir_defaults_and_ignores_blank_overrides() {
        assert_eq!(resolve_dist_dir(None), PathBuf::from("dist"));
        assert_eq!(resolve_dist_dir(Some("  ".to_string())), PathBuf::from("dist"));
        assert_eq!(
            resolve_dist_dir(Some("public".to_string())),
            PathBuf::from("public")
        );
    }
}
