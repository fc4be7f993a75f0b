mod app;
pub mod config;
mod effects;
pub mod logging;
mod ui;

pub use app::{run_app, RunOptions};
