//! Question authoring page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

/// Question authoring page, mounted at `/crear`.
#[component]
pub fn CrearPreguntaPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::CrearPregunta.title()/>
        <div class="crear-pregunta-page">
            <h1>{AppRoute::CrearPregunta.title()}</h1>
            <p>"Añade una pregunta nueva para afinar las partidas."</p>
        </div>
    }
}
