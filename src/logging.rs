//! Logging setup for native and browser builds.
//!
//! All modules log through the `log` facade. Natively the records go to
//! `env_logger` (filtered by `RUST_LOG`); in the browser they go to the
//! devtools console. Debug records are only kept in debug builds.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
use log::{Log, Metadata, Record};
use log::{Level, LevelFilter};

#[cfg(debug_assertions)]
const MAX_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const MAX_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the logger for the current target. Later calls are no-ops.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(MAX_LEVEL.as_str()),
        )
        .is_test(cfg!(test))
        .try_init();
    }

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        if log::set_logger(&CONSOLE).is_ok() {
            log::set_max_level(MAX_LEVEL);
        }
    }
}

/// Console prefix for a record level
pub fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[ERROR]",
        Level::Warn => "[WARN]",
        Level::Info => "[INFO]",
        Level::Debug => "[DEBUG]",
        Level::Trace => "[TRACE]",
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
static CONSOLE: ConsoleLogger = ConsoleLogger;

/// Forwards records to `console.error` / `warn` / `info` / `debug`
#[cfg(all(target_arch = "wasm32", feature = "web"))]
struct ConsoleLogger;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {}: {}",
            level_tag(record.level()),
            record.target(),
            record.args()
        );
        let message = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}
