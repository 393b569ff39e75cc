//! Top navigation bar linking the four quiz sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links go through `<A>`, so switching sections pushes a history entry and
//! swaps the routed view without a full page load. Back/forward restores the
//! matching view through the same router.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, resolve};

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

/// Navigation bar rendered above the routed outlet.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let current = Memo::new(move |_| resolve(&pathname.get()));

    Effect::new(move || match current.get() {
        Some(route) => leptos::logging::log!("navigated to {} ({route:?})", route.path()),
        None => leptos::logging::warn!("no route for {}", pathname.get_untracked()),
    });

    let items = AppRoute::ALL
        .into_iter()
        .map(|route| {
            view! {
                <li class=move || nav_item_class(current.get() == Some(route))>
                    <A href=route.path()>{route.title()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__section">{move || section_label(current.get())}</span>
            <ul class="nav-bar__links">{items}</ul>
        </nav>
    }
}

/// CSS class for a nav list item.
pub fn nav_item_class(active: bool) -> &'static str {
    if active { "nav-bar__item nav-bar__item--active" } else { "nav-bar__item" }
}

/// Title of the section currently shown; empty on unmatched paths.
pub fn section_label(route: Option<AppRoute>) -> &'static str {
    route.map_or("", AppRoute::title)
}
