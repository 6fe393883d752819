use crate::config::ServerConfig;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub struct AppState {
    pub config: ServerConfig,
}

async fn health_check(State(state): State<Arc<AppState>>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let index = state.config.index_file();
    match tokio::fs::metadata(&index).await {
        Ok(meta) if meta.is_file() => Ok(Json(json!({
            "status": "ok",
            "environment": state.config.environment.as_str(),
        }))),
        _ => {
            tracing::warn!("health check failed: no site bundle at {}", index.display());
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "Site bundle is missing" })),
            ))
        }
    }
}

/// Static bundle with every unknown path answered by `index.html`, so deep
/// links land in the single-page app.
fn site_service(config: &ServerConfig) -> ServeDir<ServeFile> {
    ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_file()))
}

pub fn router(config: ServerConfig) -> Router {
    let site = site_service(&config);

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_origin(AllowOrigin::exact(config.frontend_url.clone()))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    let state = Arc::new(AppState { config });

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(security_headers)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>lexia</body></html>";

    fn bundle() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), INDEX).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), "console.log('lexia');").unwrap();
        dir
    }

    fn app(dir: &TempDir) -> Router {
        router(ServerConfig {
            environment: Environment::Staging,
            port: 0,
            dist_dir: dir.path().to_path_buf(),
            frontend_url: HeaderValue::from_static("https://lexia.id"),
        })
    }

    async fn send(app: Router, uri: &str, origin: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().uri(uri);
        if let Some(origin) = origin {
            request = request.header(header::ORIGIN, origin);
        }
        app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_environment() {
        let dir = bundle();
        let response = send(app(&dir), "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({ "status": "ok", "environment": "staging" }));
    }

    #[tokio::test]
    async fn health_fails_without_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let response = send(app(&dir), "/health", None).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn serves_static_assets() {
        let dir = bundle();
        let response = send(app(&dir), "/assets/app.js", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log('lexia');");
    }

    #[tokio::test]
    async fn root_serves_index() {
        let dir = bundle();
        let response = send(app(&dir), "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = bundle();
        let response = send(app(&dir), "/registration/step", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX);
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let dir = bundle();
        for uri in ["/health", "/", "/assets/app.js"] {
            let response = send(app(&dir), uri, None).await;
            let headers = response.headers();
            assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{uri}");
            assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY", "{uri}");
            assert_eq!(headers[header::REFERRER_POLICY], "strict-origin-when-cross-origin", "{uri}");
        }
    }

    #[tokio::test]
    async fn cors_allows_only_the_frontend_origin() {
        let dir = bundle();
        let allowed = send(app(&dir), "/health", Some("https://lexia.id")).await;
        assert_eq!(allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://lexia.id");

        let foreign = send(app(&dir), "/health", Some("https://elsewhere.example")).await;
        assert!(foreign.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
