//! Console Logger
//!
//! Backend for the `log` facade that forwards records to the browser
//! devtools console, mapping each level onto the matching console method.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing to `console.error/warn/info/debug`
#[derive(Debug)]
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_line(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Format a record as `[LEVEL target] message`.
///
/// The crate prefix of the target is dropped, so `cat_gallery_ui::feed`
/// shows up as `feed`.
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    let short_target = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    format!("[{} {}] {}", level, short_target, message)
}

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
