#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the equipment name input.
    EquipmentNameChanged(String),
    /// User edited the model number input.
    ModelNumberChanged(String),
    /// User pressed Scrape.
    ScrapeClicked,
    /// User pressed Stop.
    StopClicked,
    /// User toggled the details panel (steps and properties).
    DetailsToggled,
    /// User checked or unchecked a property offered for a re-run.
    PropertyToggled { name: String, checked: bool },
    /// User requested a re-run for the selected properties.
    RerunClicked,
    /// Engine: the start-up delay of a run elapsed.
    LoadingFinished { run_id: crate::RunId },
    /// Engine: pipeline ticker fired.
    PipelineTick { run_id: crate::RunId },
    /// Engine: the armed step delay elapsed.
    StepTimerFired { run_id: crate::RunId },
    /// Engine: the run's time budget is spent.
    HorizonReached { run_id: crate::RunId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
