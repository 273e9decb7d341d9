//! Scroll Sentinel Utilities
//!
//! Detects when the page is scrolled close to its bottom edge.
//! Used to drive infinite-scroll loading.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Scroll geometry of the document element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset
    pub scroll_top: f64,
    /// Height of the visible viewport
    pub client_height: f64,
    /// Total scrollable height
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// True when the viewport bottom is within `threshold` of the page end.
    /// A page shorter than the viewport is always near the bottom.
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - threshold
    }
}

/// Read scroll geometry from `document.documentElement`.
/// Returns `None` outside a browser document.
pub fn document_metrics() -> Option<ScrollMetrics> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: root.scroll_top() as f64,
        client_height: root.client_height() as f64,
        scroll_height: root.scroll_height() as f64,
    })
}

/// What to do with a scroll event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleDecision {
    /// Run the check now
    Fire,
    /// Inside the interval: run one trailing check after this many ms
    Defer(f64),
    /// A trailing check is already scheduled
    Skip,
}

/// Throttle gate: at most one check per `interval_ms`, plus one trailing
/// check so the final scroll position is always looked at.
#[derive(Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Cell<Option<f64>>,
    trailing_pending: Cell<bool>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fired: Cell::new(None),
            trailing_pending: Cell::new(false),
        }
    }

    /// Decide for an event at `now_ms`. `Fire` records the time.
    pub fn decide(&self, now_ms: f64) -> ThrottleDecision {
        match self.last_fired.get() {
            Some(last) if now_ms - last < self.interval_ms => {
                if self.trailing_pending.get() {
                    ThrottleDecision::Skip
                } else {
                    self.trailing_pending.set(true);
                    ThrottleDecision::Defer(self.interval_ms - (now_ms - last))
                }
            }
            _ => {
                self.last_fired.set(Some(now_ms));
                ThrottleDecision::Fire
            }
        }
    }

    /// Record that the deferred check ran at `now_ms`
    pub fn fire_trailing(&self, now_ms: f64) {
        self.trailing_pending.set(false);
        self.last_fired.set(Some(now_ms));
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or(0.0)
}

/// Bind a `scroll` listener on the window.
///
/// `on_scroll` runs at most once per `throttle_ms`; an event refused inside
/// the interval schedules one trailing run at its end. The listener lives for
/// the rest of the page, like the other global bindings.
pub fn bind_window_scroll(throttle_ms: f64, on_scroll: impl Fn() + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };

    let throttle = Rc::new(Throttle::new(throttle_ms));
    let on_scroll = Rc::new(on_scroll);
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        match throttle.decide(now_ms()) {
            ThrottleDecision::Fire => (*on_scroll)(),
            ThrottleDecision::Defer(wait_ms) => {
                let throttle = Rc::clone(&throttle);
                let on_scroll = Rc::clone(&on_scroll);
                Timeout::new(wait_ms.ceil() as u32, move || {
                    throttle.fire_trailing(now_ms());
                    (*on_scroll)();
                })
                .forget();
            }
            ThrottleDecision::Skip => {}
        }
    });

    let _ = win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    cb.forget();
}
