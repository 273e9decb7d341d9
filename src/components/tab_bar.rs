//! Tab Bar Component
//!
//! Switches between the full feed and the favorites.

use leptos::prelude::*;

use crate::context::use_gallery;
use crate::models::ActiveView;

/// "All" / "Favorites" tabs; the active one carries the `active` class
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_gallery();

    let tab_class = move |view: ActiveView| {
        if ctx.active_view.get() == view { "tab active" } else { "tab" }
    };

    view! {
        <nav class="tabs">
            <button
                id="allCatsTab"
                class=move || tab_class(ActiveView::All)
                on:click=move |_| ctx.select_all()
            >
                "All cats"
            </button>
            <button
                id="favoriteCatsTab"
                class=move || tab_class(ActiveView::Favorites)
                on:click=move |_| ctx.select_favorites()
            >
                "Favorite cats"
            </button>
        </nav>
    }
}
