use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::{engine_debug, engine_info};
use scrape_core::{Effect, Msg};
use scrape_engine::{EngineEvent, EngineHandle, SimulatorSettings};

/// Executes core effects on the timer engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SimulatorSettings) -> Result<Self> {
        let engine = EngineHandle::new(settings).context("failed to start simulator engine")?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartRun { run_id } => {
                    engine_info!("StartRun run_id={}", run_id);
                    self.engine.start_run(run_id);
                }
                Effect::StartTicker { run_id } => {
                    engine_debug!("StartTicker run_id={}", run_id);
                    self.engine.start_ticker(run_id);
                }
                Effect::ArmStepTimer { run_id } => {
                    engine_debug!("ArmStepTimer run_id={}", run_id);
                    self.engine.arm_step_timer(run_id);
                }
                Effect::StopRun { run_id } => {
                    engine_info!("StopRun run_id={}", run_id);
                    self.engine.stop_run(run_id);
                }
                Effect::RerunProperties { names } => {
                    self.engine.rerun(names);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }

    pub fn shutdown(self) {
        self.engine.shutdown();
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LoadingFinished { run_id } => Msg::LoadingFinished { run_id },
        EngineEvent::PipelineTick { run_id, .. } => Msg::PipelineTick { run_id },
        EngineEvent::StepTimerFired { run_id } => Msg::StepTimerFired { run_id },
        EngineEvent::HorizonReached { run_id } => Msg::HorizonReached { run_id },
    }
}
