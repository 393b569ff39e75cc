use super::*;

use axum::http::header::LOCATION;
use tower::ServiceExt;

/// Root `div` class of each routed view, keyed by the path that should mount it.
const VIEWS: [(&str, &str); 4] = [
    ("/", "home-page"),
    ("/jugar", "quiz-page"),
    ("/crear", "crear-pregunta-page"),
    ("/historial", "historial-page"),
];
const NOT_FOUND_VIEW: &str = "not-found-page";

struct Rendered {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

impl Rendered {
    /// Page views present in the body, matched on their exact root class.
    fn views(&self) -> Vec<&'static str> {
        VIEWS
            .iter()
            .map(|(_, class)| *class)
            .chain([NOT_FOUND_VIEW])
            .filter(|class| self.body.contains(&format!("class=\"{class}\"")))
            .collect()
    }

    fn active_nav_items(&self) -> usize {
        self.body.matches("nav-bar__item--active").count()
    }
}

async fn get_path(path: &str) -> Rendered {
    let options = LeptosOptions::builder().output_name("quiz").build();
    let request = axum::http::Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app(options).oneshot(request).await.unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    Rendered { status, location, body: String::from_utf8_lossy(&bytes).into_owned() }
}

// =============================================================================
// Table paths
// =============================================================================

#[tokio::test]
async fn each_table_path_renders_only_its_view() {
    for (path, class) in VIEWS {
        let rendered = get_path(path).await;
        assert_eq!(rendered.status, StatusCode::OK, "{path}");
        assert_eq!(rendered.views(), vec![class], "{path}");
        assert_eq!(rendered.active_nav_items(), 1, "{path}");
    }
}

#[tokio::test]
async fn crear_with_query_mounts_crear_pregunta() {
    let rendered = get_path("/crear?draft=1").await;
    assert_eq!(rendered.status, StatusCode::OK);
    assert_eq!(rendered.views(), vec!["crear-pregunta-page"]);
}

// =============================================================================
// Unmatched paths
// =============================================================================

#[tokio::test]
async fn unknown_path_renders_not_found_with_404() {
    for path in ["/nope", "/jugar/extra", "/JUGAR"] {
        let rendered = get_path(path).await;
        assert_eq!(rendered.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(rendered.views(), vec![NOT_FOUND_VIEW], "{path}");
        assert_eq!(rendered.active_nav_items(), 0, "{path}");
    }
}

// =============================================================================
// Trailing slash
// =============================================================================

#[tokio::test]
async fn trailing_slash_redirects_to_table_path_without_rendering() {
    let rendered = get_path("/jugar/").await;
    assert_eq!(rendered.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(rendered.location.as_deref(), Some("/jugar"));
    assert!(rendered.views().is_empty());
}

#[tokio::test]
async fn trailing_slash_redirect_keeps_query() {
    let rendered = get_path("/historial/?pagina=2").await;
    assert_eq!(rendered.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(rendered.location.as_deref(), Some("/historial?pagina=2"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn healthz_is_routed() {
    let rendered = get_path("/healthz").await;
    assert_eq!(rendered.status, StatusCode::OK);
    assert!(rendered.views().is_empty());
}
