use crate::RunId;

/// Side effects requested by `update`; the engine executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any previous run and begin the loading delay.
    StartRun { run_id: RunId },
    /// Start the pipeline ticker and its horizon.
    StartTicker { run_id: RunId },
    /// Fire `StepTimerFired` once after the step delay.
    ArmStepTimer { run_id: RunId },
    StopRun { run_id: RunId },
    /// Hand the selected property names to the re-run slot.
    RerunProperties { names: Vec<String> },
}
