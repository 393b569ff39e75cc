//! Play a round of the quiz.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

/// Mounted at `/jugar`.
#[component]
pub fn QuizPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Quiz.title()/>
        <div class="quiz-page">
            <h1>{AppRoute::Quiz.title()}</h1>
            <p>"Responde a las preguntas y el quiz intentará adivinar tu personaje."</p>
        </div>
    }
}
