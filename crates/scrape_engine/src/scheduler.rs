//! Cancellable timers for one simulated run.
//!
//! Each function sleeps on tokio time and emits through an [`EventSink`]. A
//! cancelled token suppresses every emission that has not happened yet.

use tokio::time::{sleep, sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use engine_logging::engine_debug;

use crate::{EngineEvent, RunId, SimulatorSettings};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

#[derive(Clone)]
pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Waits out the loading phase. Returns false if cancelled first.
pub async fn run_loading_delay(
    run_id: RunId,
    settings: &SimulatorSettings,
    token: &CancellationToken,
    sink: &dyn EventSink,
) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = sleep(settings.startup_delay()) => {
            sink.emit(EngineEvent::LoadingFinished { run_id });
            true
        }
    }
}

/// Emits pipeline ticks on a fixed cadence until the horizon, then cancels the run.
///
/// Ticks land at `k * tick_period` for every `k` strictly before the horizon;
/// deadlines are absolute, so a slow consumer does not drift the schedule.
/// Returns the number of ticks emitted.
pub async fn run_ticker(
    run_id: RunId,
    settings: &SimulatorSettings,
    token: &CancellationToken,
    sink: &dyn EventSink,
) -> u32 {
    let start = Instant::now();
    let total = settings.ticks_within_horizon();

    for tick in 1..=total {
        let deadline = start + settings.tick_period() * tick;
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                engine_debug!("Ticker for run {} cancelled after {} ticks", run_id, tick - 1);
                return tick - 1;
            }
            _ = sleep_until(deadline) => {
                sink.emit(EngineEvent::PipelineTick { run_id, tick });
            }
        }
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => {}
        _ = sleep_until(start + settings.horizon()) => {
            engine_debug!("Run {} reached its horizon", run_id);
            sink.emit(EngineEvent::HorizonReached { run_id });
            token.cancel();
        }
    }
    total
}

/// One-shot step delay. The dashboard re-arms it while steps remain.
pub async fn run_step_timer(
    run_id: RunId,
    settings: &SimulatorSettings,
    token: &CancellationToken,
    sink: &dyn EventSink,
) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = sleep(settings.step_delay()) => {
            sink.emit(EngineEvent::StepTimerFired { run_id });
            true
        }
    }
}
