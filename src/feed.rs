//! Cat Feed
//!
//! Session-scoped feed state and the pagination state machine:
//! Idle -> Loading -> Idle | Exhausted. Exhausted is terminal.

use std::cell::RefCell;

use crate::api::CatSource;
use crate::error::GalleryError;
use crate::models::{ActiveView, CatRecord, FetchPhase, PageRequest};

/// How a settled request changed the session
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Records were appended to the feed
    Appended(usize),
    /// Empty page, no further requests will be issued
    Exhausted,
    /// Request failed; the same page is requested next time
    Failed(GalleryError),
}

/// Follow-up when the All view is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllAction {
    /// Nothing to show yet
    FetchFirstPage,
    /// Show what is loaded and look at the page end
    CheckEnd,
}

/// Whether a page-end check may request a page: only the All view pages,
/// and only while no request is outstanding.
pub fn end_check_applies(view: ActiveView, phase: FetchPhase) -> bool {
    view == ActiveView::All && phase == FetchPhase::Idle
}

/// Feed records plus the pagination cursor and fetch phase
#[derive(Debug, Clone)]
pub struct FeedSession {
    records: Vec<CatRecord>,
    cursor: u32,
    phase: FetchPhase,
    page_size: u32,
}

impl FeedSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            phase: FetchPhase::Idle,
            page_size,
        }
    }

    pub fn records(&self) -> &[CatRecord] {
        &self.records
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// What selecting the All view should do with this session
    pub fn select_all_action(&self) -> SelectAllAction {
        if self.records.is_empty() {
            SelectAllAction::FetchFirstPage
        } else {
            SelectAllAction::CheckEnd
        }
    }

    /// Enter Loading and advance the cursor.
    /// `None` while a request is outstanding or after exhaustion.
    pub fn begin_page(&mut self) -> Option<PageRequest> {
        if self.phase != FetchPhase::Idle {
            return None;
        }
        self.phase = FetchPhase::Loading;
        self.cursor += 1;
        Some(PageRequest {
            page: self.cursor,
            limit: self.page_size,
        })
    }

    /// Apply the result of `request`. Always leaves the Loading phase.
    pub fn settle(
        &mut self,
        request: PageRequest,
        result: Result<Vec<CatRecord>, GalleryError>,
    ) -> PageOutcome {
        debug_assert_eq!(self.phase, FetchPhase::Loading);
        match result {
            Ok(page) if page.is_empty() => {
                log::info!("No more cats to load (page {})", request.page);
                self.phase = FetchPhase::Exhausted;
                PageOutcome::Exhausted
            }
            Ok(page) => {
                let count = page.len();
                self.records.extend(page);
                self.phase = FetchPhase::Idle;
                log::debug!("Page {} added {} cats ({} total)", request.page, count, self.records.len());
                PageOutcome::Appended(count)
            }
            Err(e) => {
                log::error!("Error fetching cats (page {}): {}", request.page, e);
                // Next attempt asks for the same page again
                self.cursor = request.page.saturating_sub(1);
                self.phase = FetchPhase::Idle;
                PageOutcome::Failed(e)
            }
        }
    }
}

/// Mutable access to a feed session owned elsewhere.
///
/// Returns `None` when the owner is gone.
pub trait SessionCell {
    fn with_session<R>(&self, f: impl FnOnce(&mut FeedSession) -> R) -> Option<R>;
}

impl SessionCell for RefCell<FeedSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut FeedSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one fetch cycle. `None` when no request was issued.
pub async fn load_next_page<C, S>(cell: &C, source: &S) -> Option<PageOutcome>
where
    C: SessionCell + ?Sized,
    S: CatSource + ?Sized,
{
    let request = cell.with_session(FeedSession::begin_page).flatten()?;
    let result = source.fetch_page(&request).await;
    cell.with_session(|session| session.settle(request, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryResult;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::collections::VecDeque;

    /// Replays canned responses and records every requested page
    struct ScriptedSource {
        responses: RefCell<VecDeque<GalleryResult<Vec<CatRecord>>>>,
        requested: RefCell<Vec<PageRequest>>,
        calls: Cell<usize>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<GalleryResult<Vec<CatRecord>>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requested: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl CatSource for ScriptedSource {
        async fn fetch_page(&self, request: &PageRequest) -> GalleryResult<Vec<CatRecord>> {
            self.calls.set(self.calls.get() + 1);
            self.requested.borrow_mut().push(*request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(GalleryError::Network("script ran out".into())))
        }
    }

    fn page(prefix: &str, n: usize) -> Vec<CatRecord> {
        (0..n).map(|i| CatRecord::with_url(format!("https://cdn/{}-{}.jpg", prefix, i))).collect()
    }

    #[tokio::test]
    async fn test_two_pages_then_exhausted() {
        let cell = RefCell::new(FeedSession::new(100));
        let source = ScriptedSource::new(vec![Ok(page("p1", 100)), Ok(page("p2", 100)), Ok(Vec::new())]);

        assert_eq!(load_next_page(&cell, &source).await, Some(PageOutcome::Appended(100)));
        assert_eq!(load_next_page(&cell, &source).await, Some(PageOutcome::Appended(100)));
        assert_eq!(load_next_page(&cell, &source).await, Some(PageOutcome::Exhausted));

        {
            let session = cell.borrow();
            assert_eq!(session.records().len(), 200);
            assert_eq!(session.phase(), FetchPhase::Exhausted);
            // Later pages come after earlier ones
            assert_eq!(session.records()[0].image_url(), Some("https://cdn/p1-0.jpg"));
            assert_eq!(session.records()[100].image_url(), Some("https://cdn/p2-0.jpg"));
        }

        // Fourth attempt issues no request
        assert_eq!(load_next_page(&cell, &source).await, None);
        assert_eq!(source.calls.get(), 3);

        let pages: Vec<u32> = source.requested.borrow().iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert!(source.requested.borrow().iter().all(|r| r.limit == 100));
    }

    #[tokio::test]
    async fn test_http_error_recovers_without_exhausting() {
        let cell = RefCell::new(FeedSession::new(100));
        let source = ScriptedSource::new(vec![
            Ok(page("p1", 3)),
            Err(GalleryError::Status(500)),
            Ok(page("p2", 2)),
        ]);

        load_next_page(&cell, &source).await;
        let outcome = load_next_page(&cell, &source).await;
        assert_eq!(outcome, Some(PageOutcome::Failed(GalleryError::Status(500))));

        {
            let session = cell.borrow();
            assert_ne!(session.phase(), FetchPhase::Loading);
            assert_ne!(session.phase(), FetchPhase::Exhausted);
            assert_eq!(session.records().len(), 3);
            assert_eq!(session.cursor, 1);
        }

        // Retry asks for page 2 again
        assert_eq!(load_next_page(&cell, &source).await, Some(PageOutcome::Appended(2)));
        let pages: Vec<u32> = source.requested.borrow().iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![1, 2, 2]);
        assert_eq!(cell.borrow().records().len(), 5);
    }

    #[tokio::test]
    async fn test_network_error_on_first_page() {
        let cell = RefCell::new(FeedSession::new(100));
        let source = ScriptedSource::new(vec![Err(GalleryError::Network("offline".into()))]);

        let outcome = load_next_page(&cell, &source).await;
        assert!(matches!(outcome, Some(PageOutcome::Failed(GalleryError::Network(_)))));
        let session = cell.borrow();
        assert_eq!(session.phase(), FetchPhase::Idle);
        assert_eq!(session.cursor, 0);
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_begin_page_is_guarded_while_loading() {
        let mut session = FeedSession::new(100);

        let first = session.begin_page();
        assert_eq!(first, Some(PageRequest { page: 1, limit: 100 }));
        assert_eq!(session.phase(), FetchPhase::Loading);
        assert_eq!(session.begin_page(), None);
        assert_eq!(session.cursor, 1);

        session.settle(first.unwrap(), Ok(page("p1", 1)));
        assert_eq!(session.begin_page(), Some(PageRequest { page: 2, limit: 100 }));
    }

    #[test]
    fn test_select_all_fetches_only_for_empty_feed() {
        let mut session = FeedSession::new(10);
        assert_eq!(session.select_all_action(), SelectAllAction::FetchFirstPage);

        let req = session.begin_page().unwrap();
        session.settle(req, Ok(page("p1", 2)));
        assert_eq!(session.select_all_action(), SelectAllAction::CheckEnd);

        // A failed page leaves the feed as it was
        let req = session.begin_page().unwrap();
        session.settle(req, Err(GalleryError::Status(503)));
        assert_eq!(session.select_all_action(), SelectAllAction::CheckEnd);
    }

    #[test]
    fn test_end_check_only_pages_idle_all_view() {
        assert!(end_check_applies(ActiveView::All, FetchPhase::Idle));
        assert!(!end_check_applies(ActiveView::All, FetchPhase::Loading));
        assert!(!end_check_applies(ActiveView::All, FetchPhase::Exhausted));
        for phase in [FetchPhase::Idle, FetchPhase::Loading, FetchPhase::Exhausted] {
            assert!(!end_check_applies(ActiveView::Favorites, phase));
        }
    }

    #[test]
    fn test_exhausted_is_terminal() {
        let mut session = FeedSession::new(10);
        let req = session.begin_page().unwrap();
        assert_eq!(session.settle(req, Ok(Vec::new())), PageOutcome::Exhausted);

        for _ in 0..3 {
            assert_eq!(session.begin_page(), None);
            assert_eq!(session.phase(), FetchPhase::Exhausted);
        }
        assert!(session.records().is_empty());
    }
}
