use leptos::prelude::*;

use crate::context::use_gallery;
use crate::models::{ActiveView, FetchPhase};

/// Feed progress below the grid
#[component]
pub fn StatusLine() -> impl IntoView {
    let ctx = use_gallery();

    let message = move || match (ctx.active_view.get(), ctx.phase.get()) {
        (ActiveView::All, FetchPhase::Loading) => "Loading...",
        (ActiveView::All, FetchPhase::Exhausted) => "No more cats to load",
        (ActiveView::Favorites, _) if !ctx.has_favorites() => "No favorite cats yet",
        _ => "",
    };

    view! { <p class="status-line">{message}</p> }
}
