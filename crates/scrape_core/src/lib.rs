//! Scrape core: progress simulation, pure dashboard state machine and view-model helpers.
mod effect;
mod feedback;
mod msg;
mod records;
mod seed;
mod simulation;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use feedback::{
    feedback_items, FeedbackItem, FeedbackKind, COMMON_PROPERTIES, LOW_CONFIDENCE_THRESHOLD,
};
pub use msg::Msg;
pub use records::{
    source_domain, ConfidenceTier, InvalidSourceUrl, PipelineId, PipelineRecord, PropertyResult,
    Status, StepId, StepRecord,
};
pub use seed::{demo_pipelines, demo_properties, demo_steps};
pub use simulation::{
    Simulation, StepAdvance, TickOutcome, COMPLETED_MESSAGE, CONFIDENCE_CAP, CONFIDENCE_INCREMENT,
    PROMOTED_MESSAGE, PROPERTIES_CAP, STEP_DURATION_LABEL,
};
pub use state::{AppState, RunId, SessionState};
pub use update::update;
pub use view_model::{AppViewModel, PropertyRowView};
