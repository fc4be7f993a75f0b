#![deny(missing_docs)]
//! Shared logging utilities for the simulator workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is
//! prefixed with the pipeline tick of the thread that logs it.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current pipeline tick count.
    static SIM_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the pipeline tick count for the current thread.
/// The dashboard loop calls this whenever a pipeline tick is applied.
pub fn set_sim_tick(tick: u64) {
    SIM_TICK.with(|v| v.set(tick));
}

/// Retrieves the pipeline tick count for the current thread.
/// Returns 0 if the tick has not been set.
pub fn get_sim_tick() -> u64 {
    SIM_TICK.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current tick.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("[tick {}] {}", $crate::get_sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current tick.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("[tick {}] {}", $crate::get_sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current tick.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("[tick {}] {}", $crate::get_sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current tick.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("[tick {}] {}", $crate::get_sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current tick.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("[tick {}] {}", $crate::get_sim_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_tick_is_per_thread() {
        set_sim_tick(7);
        assert_eq!(get_sim_tick(), 7);

        let other = std::thread::spawn(get_sim_tick).join().unwrap();
        assert_eq!(other, 0);

        set_sim_tick(0);
    }

    #[test]
    fn macros_accept_format_arguments() {
        initialize_for_tests();
        set_sim_tick(3);
        engine_info!("pipeline {} at {}%", "1", 90);
        engine_debug!("plain message");
        set_sim_tick(0);
    }
}
