//! Cat Gallery App
//!
//! Page layout: tab bar, card grid and feed status.

use leptos::prelude::*;

use crate::components::{CatGrid, StatusLine, TabBar};
use crate::config::GalleryConfig;
use crate::context::GalleryContext;

#[component]
pub fn App(config: GalleryConfig) -> impl IntoView {
    let ctx = GalleryContext::new(config);

    // Provide context to all children
    provide_context(ctx);

    // Initial load once mounted; afterwards live scrolling re-checks the page end
    Effect::new(move |_| {
        ctx.select_all();
    });
    ctx.bind_scroll_listener();

    view! {
        <main class="gallery">
            <h1>"Cats"</h1>
            <TabBar />
            <CatGrid />
            <StatusLine />
        </main>
    }
}
