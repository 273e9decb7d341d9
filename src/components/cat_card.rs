use leptos::prelude::*;

use crate::context::use_gallery;
use crate::models::CatRecord;
use crate::render::{CardModel, FavoriteGlyph};

/// Image card with its favorite toggle
#[component]
pub fn CatCard(card: CardModel) -> impl IntoView {
    let ctx = use_gallery();
    let button_id = card.button_id();
    let record = CatRecord::with_url(card.url.clone());

    // Follows the store, so only this button changes on a toggle
    let glyph = {
        let record = record.clone();
        Memo::new(move |_| FavoriteGlyph::for_state(ctx.is_favorite(&record)))
    };

    view! {
        <div class="cat-card">
            <img src=card.url alt="Cute Cat" />
            <button
                class="favorite"
                id=button_id
                style=move || glyph.get().style
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.toggle_favorite(&record);
                }
            >
                {move || glyph.get().glyph}
            </button>
        </div>
    }
}
