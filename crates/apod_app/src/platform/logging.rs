//! Platform logging initialization for apod_app.
//!
//! `log` records go to the browser devtools console; panics are reported
//! there too instead of surfacing as an opaque `unreachable` trap.

use log::LevelFilter;

/// Routes panics and `log` output at `level` to the console.
pub fn initialize(level: LevelFilter) {
    console_error_panic_hook::set_once();
    if let Some(level) = level.to_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}
