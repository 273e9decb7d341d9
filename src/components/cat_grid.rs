//! Cat Grid Component
//!
//! Card container. Cleared and rebuilt from scratch whenever the active
//! view's source changes, so the same input always shows the same cards.

use leptos::prelude::*;

use crate::components::CatCard;
use crate::context::use_gallery;

#[component]
pub fn CatGrid() -> impl IntoView {
    let ctx = use_gallery();

    view! {
        <div id="catContainer" class="cat-container">
            {move || {
                ctx.visible_cards()
                    .into_iter()
                    .map(|card| view! { <CatCard card=card /> })
                    .collect_view()
            }}
        </div>
    }
}
