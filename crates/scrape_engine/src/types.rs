pub type RunId = u64;

/// Timer firings reported back to the dashboard loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    LoadingFinished { run_id: RunId },
    /// `tick` counts from 1 within the run.
    PipelineTick { run_id: RunId, tick: u32 },
    StepTimerFired { run_id: RunId },
    HorizonReached { run_id: RunId },
}

impl EngineEvent {
    pub fn run_id(&self) -> RunId {
        match *self {
            EngineEvent::LoadingFinished { run_id }
            | EngineEvent::PipelineTick { run_id, .. }
            | EngineEvent::StepTimerFired { run_id }
            | EngineEvent::HorizonReached { run_id } => run_id,
        }
    }
}
