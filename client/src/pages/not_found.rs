//! Fallback view for paths outside the route table.
//!
//! DESIGN
//! ======
//! The router renders this instead of a blank outlet. During SSR it also sets
//! the response status to 404 so deep links to unknown paths are not cached
//! as valid pages.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;

/// Not-found page, used as the `<Routes>` fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let pathname = use_location().pathname;

    view! {
        <Title text="Página no encontrada"/>
        <div class="not-found-page">
            <h1>"Página no encontrada"</h1>
            <p>"No hay ninguna pantalla en " <code>{move || pathname.get()}</code> "."</p>
            <A href=AppRoute::Home.path()>"Volver al inicio"</A>
        </div>
    }
}
