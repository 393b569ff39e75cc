//! Root application component with routing and meta context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root: it builds the one `<Router>` the whole
//! application shares. `Router` drives the browser History API, so paths show
//! up as plain URLs with no hash fragment. Route paths come from
//! `crate::routes::AppRoute`, which keeps the table the single source of truth.

use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    crear_pregunta::CrearPreguntaPage, historial::HistorialPage, home::HomePage, not_found::NotFoundPage,
    quiz::QuizPage,
};
use crate::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Each page sets its own document title. Unmatched paths render
/// [`NotFoundPage`] instead of leaving the outlet blank.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <NavBar/>
            <main class="app-outlet">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(AppRoute::Quiz.segment()) view=QuizPage/>
                    <Route path=StaticSegment(AppRoute::CrearPregunta.segment()) view=CrearPreguntaPage/>
                    <Route path=StaticSegment(AppRoute::Historial.segment()) view=HistorialPage/>
                </Routes>
            </main>
        </Router>
    }
}
