//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path in the client route table gets an SSR handler generated from
//! `client::app::App`, so a history-mode deep link renders the right view on
//! first load and then hydrates. Compiled assets are served from the Leptos
//! site root under `/pkg`. A table path spelled with a trailing slash is
//! redirected to its canonical form. Anything else falls through to a static
//! file, or to the app's not-found view with a 404 status.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use client::routes::canonical_location;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the host router. `options` comes from the Leptos configuration and
/// is the only state handlers share.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered app routes");

    let site_root = PathBuf::from(&*options.site_root);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

/// Redirect non-canonical table paths, otherwise serve a file or the app's
/// not-found view.
async fn fallback(uri: Uri, state: State<LeptosOptions>, req: Request<Body>) -> Response {
    let location = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    if let Some(target) = canonical_location(location) {
        tracing::debug!(from = %location, to = %target, "redirecting to canonical path");
        return Redirect::permanent(&target).into_response();
    }
    file_and_error_handler(client::app::shell)(uri, state, req).await
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
