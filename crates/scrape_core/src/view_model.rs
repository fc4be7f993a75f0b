use serde::Serialize;

use crate::feedback::FeedbackItem;
use crate::records::{ConfidenceTier, PipelineRecord, PropertyResult, StepRecord};
use crate::state::{RunId, SessionState};

/// Everything the rendering surface draws, detached from the state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AppViewModel {
    pub session: SessionState,
    pub run_id: RunId,
    pub equipment_name: String,
    pub model_number: String,
    pub loading: bool,
    pub show_details: bool,
    pub pipelines: Vec<PipelineRecord>,
    pub steps: Vec<StepRecord>,
    pub current_step: usize,
    pub properties: Vec<PropertyRowView>,
    pub feedback: Vec<FeedbackItem>,
    pub selected: Vec<String>,
    pub tick_count: u64,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn properties_title(&self) -> String {
        format!(
            "Properties Found for {} {}",
            self.equipment_name.trim(),
            self.model_number.trim()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRowView {
    pub name: String,
    pub value: String,
    pub confidence: u8,
    pub tier: ConfidenceTier,
    pub source: String,
    pub verified: bool,
}

impl From<&PropertyResult> for PropertyRowView {
    fn from(property: &PropertyResult) -> Self {
        Self {
            name: property.name.clone(),
            value: property.value.clone(),
            confidence: property.confidence,
            tier: property.tier(),
            source: property.source.clone(),
            verified: property.verified,
        }
    }
}
