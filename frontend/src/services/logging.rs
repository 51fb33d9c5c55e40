//! Console logging for the browser build.
//!
//! [`Logger`] writes component-tagged lines through `gloo::console`.
//! [`ConsoleLogger`] forwards `log` records from the backend crate to the
//! same console.

use log::{Level, LevelFilter, Metadata, Record};

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(Self::format(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

pub struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install as the global `log` logger. Safe to call more than once.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&CONSOLE_LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            Level::Error => Logger::error_with_component(record.target(), &message),
            Level::Warn => Logger::warn_with_component(record.target(), &message),
            Level::Info => Logger::info_with_component(record.target(), &message),
            Level::Debug | Level::Trace => Logger::debug_with_component(record.target(), &message),
        }
    }

    fn flush(&self) {}
}
