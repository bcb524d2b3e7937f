//! In-memory log capture.
//!
//! Installs a process-wide [`log::Log`] implementation once and keeps records
//! per thread, so tests running in parallel only see their own output.

use std::{cell::RefCell, sync::Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// A log record captured during [`capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Level the record was logged at.
    pub level: Level,

    /// Record target; the logging module path unless overridden.
    pub target: String,

    /// Formatted message.
    pub message: String,
}

impl Captured {
    /// Returns `true` if the record came from the given crate.
    #[must_use]
    pub fn is_from(&self, krate: &str) -> bool {
        self.target == krate || self.target.starts_with(&format!("{krate}::"))
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

struct ThreadLogger;

impl Log for ThreadLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = Captured {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        };
        RECORDS.with(|records| records.borrow_mut().push(captured));
    }

    fn flush(&self) {}
}

static LOGGER: ThreadLogger = ThreadLogger;
static INSTALL: Once = Once::new();

/// Runs `f` and returns its result with every record it logged on this thread.
///
/// # Panics
///
/// Panics if a different logger was already installed in this process.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger installed");
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    let records = RECORDS.with(|records| records.take());

    (result, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_records_in_order() {
        let ((), records) = capture(|| {
            log::info!(target: "fixstep_demo::inner", "first");
            log::trace!(target: "elsewhere", "second");
        });

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "first");
        assert!(records[0].is_from("fixstep_demo"));
        assert!(!records[1].is_from("fixstep_demo"));
    }
}
