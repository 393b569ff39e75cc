//! Landing page with entry points into each quiz section.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::{AppRoute, ROUTE_TABLE, RouteEntry};

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Home page (`/`).
#[component]
pub fn HomePage() -> impl IntoView {
    let sections = section_entries()
        .into_iter()
        .map(|entry| {
            view! {
                <li class="home-page__section">
                    <A href=entry.path>{entry.route.title()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text=AppRoute::Home.title()/>
        <div class="home-page">
            <h1>"Quiz"</h1>
            <p>"Piensa en un personaje y deja que el quiz lo adivine."</p>
            <ul class="home-page__sections">{sections}</ul>
        </div>
    }
}

/// Table entries linked from the home page: everything except home itself.
pub fn section_entries() -> Vec<RouteEntry> {
    ROUTE_TABLE.into_iter().filter(|entry| entry.route != AppRoute::Home).collect()
}
