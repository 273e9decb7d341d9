//! Gallery Context
//!
//! Session controller shared via the Leptos Context API. Owns the feed
//! session, the favorites store and the active view; components only
//! read its signals and call its methods.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CatApiClient;
use crate::config::GalleryConfig;
use crate::favorites::{FavoriteToggle, FavoritesStore};
use crate::feed::{end_check_applies, load_next_page, FeedSession, PageOutcome, SelectAllAction, SessionCell};
use crate::models::{ActiveView, CatRecord, FetchPhase};
use crate::render::{cards_for_view, CardModel};
use crate::storage::LocalStorageSlot;

#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Feed records, cursor and phase (not reactive, see `feed_revision`)
    session: StoredValue<FeedSession>,
    /// Bumped whenever records are appended - read
    pub feed_revision: ReadSignal<u32>,
    /// Bumped whenever records are appended - write
    set_feed_revision: WriteSignal<u32>,
    /// Mirror of the session phase for the UI - read
    pub phase: ReadSignal<FetchPhase>,
    /// Mirror of the session phase for the UI - write
    set_phase: WriteSignal<FetchPhase>,
    /// Favorites; every mutation notifies subscribers
    favorites: RwSignal<FavoritesStore<LocalStorageSlot>>,
    /// Current view - read
    pub active_view: ReadSignal<ActiveView>,
    /// Current view - write
    set_active_view: WriteSignal<ActiveView>,
    config: StoredValue<GalleryConfig>,
}

impl GalleryContext {
    pub fn new(config: GalleryConfig) -> Self {
        let favorites = FavoritesStore::load(LocalStorageSlot, config.storage_key.clone());
        log::info!("Starting with {} favorite cats", favorites.len());

        let (feed_revision, set_feed_revision) = signal(0u32);
        let (phase, set_phase) = signal(FetchPhase::Idle);
        let (active_view, set_active_view) = signal(ActiveView::All);

        Self {
            session: StoredValue::new(FeedSession::new(config.page_size)),
            feed_revision,
            set_feed_revision,
            phase,
            set_phase,
            favorites: RwSignal::new(favorites),
            active_view,
            set_active_view,
            config: StoredValue::new(config),
        }
    }

    // ========================
    // Tab Controller
    // ========================

    /// Show the full feed; fetch when there is nothing to show yet
    pub fn select_all(self) {
        self.set_active_view.set(ActiveView::All);
        match self.session.with_value(FeedSession::select_all_action) {
            SelectAllAction::FetchFirstPage => self.request_next_page(),
            SelectAllAction::CheckEnd => self.schedule_end_check(0),
        }
    }

    /// Show the favorites, straight from the store
    pub fn select_favorites(self) {
        self.set_active_view.set(ActiveView::Favorites);
    }

    // ========================
    // Renderer inputs
    // ========================

    /// Cards for the active view. Tracks the feed revision or the
    /// favorites store, whichever the view is built from.
    pub fn visible_cards(&self) -> Vec<CardModel> {
        let view = self.active_view.get();
        match view {
            ActiveView::All => self.feed_revision.track(),
            ActiveView::Favorites => self.favorites.track(),
        }
        self.session.with_value(|session| {
            self.favorites
                .with_untracked(|store| cards_for_view(view, session.records(), store.records()))
        })
    }

    pub fn is_favorite(&self, cat: &CatRecord) -> bool {
        self.favorites.with(|store| store.is_favorite(cat))
    }

    pub fn has_favorites(&self) -> bool {
        self.favorites.with(|store| !store.is_empty())
    }

    // ========================
    // Favorites
    // ========================

    pub fn toggle_favorite(&self, cat: &CatRecord) {
        match self.favorites.try_update(|store| store.toggle(cat)).flatten() {
            Some(FavoriteToggle::Added) => log::debug!("Favorited {:?}", cat.url),
            Some(FavoriteToggle::Removed) => log::debug!("Unfavorited {:?}", cat.url),
            None => {}
        }
    }

    // ========================
    // Fetcher + Scroll Sentinel
    // ========================

    /// Fetch the next page unless a request is in flight or the feed is exhausted.
    /// The page end is re-checked once the request settles.
    pub fn request_next_page(self) {
        let client = self.config.with_value(CatApiClient::from_config);
        let retry_delay_ms = self.config.with_value(|c| c.retry_delay_ms);

        spawn_local(async move {
            let Some(outcome) = load_next_page(&self, &client).await else {
                return;
            };
            let delay_ms = match outcome {
                PageOutcome::Appended(_) => {
                    self.set_feed_revision.update(|v| *v += 1);
                    0
                }
                PageOutcome::Exhausted => 0,
                PageOutcome::Failed(_) => retry_delay_ms,
            };
            // Let the grid rebuild before measuring the page
            TimeoutFuture::new(delay_ms).await;
            self.check_end_reached();
        });
    }

    /// Request the next page when the viewport is near the page bottom.
    /// Only the All view pages.
    pub fn check_end_reached(self) {
        let phase = self.session.with_value(FeedSession::phase);
        if !end_check_applies(self.active_view.get_untracked(), phase) {
            return;
        }
        let Some(metrics) = scroll_sentinel::document_metrics() else {
            return;
        };
        let threshold = self.config.with_value(|c| c.end_threshold_px);
        if metrics.near_bottom(threshold) {
            log::debug!("Fetching more cats...");
            self.request_next_page();
        }
    }

    fn schedule_end_check(self, delay_ms: u32) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            self.check_end_reached();
        });
    }

    /// Re-check the page end on live scrolling
    pub fn bind_scroll_listener(self) {
        let throttle_ms = self.config.with_value(|c| c.scroll_throttle_ms);
        scroll_sentinel::bind_window_scroll(throttle_ms, move || self.check_end_reached());
    }
}

impl SessionCell for GalleryContext {
    /// Mutates the stored session and mirrors its phase into `phase`
    fn with_session<R>(&self, f: impl FnOnce(&mut FeedSession) -> R) -> Option<R> {
        let (out, phase) = self.session.try_update_value(|session| {
            let out = f(session);
            (out, session.phase())
        })?;
        self.set_phase.set(phase);
        Some(out)
    }
}

/// Get the gallery context
pub fn use_gallery() -> GalleryContext {
    expect_context::<GalleryContext>()
}
