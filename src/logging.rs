//! Browser Console Logging
//!
//! Routes the `log` facade to `web_sys::console`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("{} {}", record.level(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Unknown names fall back to info
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger. Later calls only change the level.
///
/// Returns `false` when a logger was already installed.
pub fn init(level: &str) -> bool {
    let installed = match log::set_logger(&LOGGER) {
        Ok(()) => true,
        Err(_) => {
            log::debug!("[APP] logger already installed; updating level to {}", level);
            false
        }
    };
    log::set_max_level(parse_level(level));
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_second_init_only_sets_level() {
        // Off keeps native test runs from reaching the browser console
        init("off");
        assert!(!init("off"));
        assert_eq!(log::max_level(), LevelFilter::Off);
    }
}
