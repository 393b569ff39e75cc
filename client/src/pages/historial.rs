//! Match history page: the screen for reviewing rounds already played.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

#[component]
pub fn HistorialPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Historial.title()/>
        <div class="historial-page">
            <h1>{AppRoute::Historial.title()}</h1>
            <p>"Consulta las partidas jugadas y sus resultados."</p>
        </div>
    }
}
