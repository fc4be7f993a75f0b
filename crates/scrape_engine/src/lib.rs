//! Scrape engine: timer scheduling and effect execution for simulated runs.
mod engine;
mod rerun;
mod scheduler;
mod settings;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use rerun::{NoopRerunHandler, RerunHandler};
pub use scheduler::{
    run_loading_delay, run_step_timer, run_ticker, ChannelEventSink, EventSink,
};
pub use settings::{SettingsError, SimulatorSettings};
pub use types::{EngineEvent, RunId};
