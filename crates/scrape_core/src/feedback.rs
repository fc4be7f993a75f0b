use serde::Serialize;

use crate::records::PropertyResult;

/// Below this, a found property is offered for a re-run.
pub const LOW_CONFIDENCE_THRESHOLD: u8 = 80;

/// Properties every equipment sheet is expected to carry.
pub const COMMON_PROPERTIES: [&str; 5] = [
    "Operating Temperature",
    "IP Rating",
    "Noise Level",
    "Efficiency Rating",
    "Maintenance Schedule",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackKind {
    LowConfidence,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub name: String,
    pub kind: FeedbackKind,
}

/// Low-confidence properties first, then missing common ones, each in list order.
pub fn feedback_items(properties: &[PropertyResult]) -> Vec<FeedbackItem> {
    let low = properties
        .iter()
        .filter(|p| p.confidence < LOW_CONFIDENCE_THRESHOLD)
        .map(|p| FeedbackItem {
            name: p.name.clone(),
            kind: FeedbackKind::LowConfidence,
        });
    let missing = COMMON_PROPERTIES
        .iter()
        .filter(|name| !properties.iter().any(|p| p.name == **name))
        .map(|name| FeedbackItem {
            name: name.to_string(),
            kind: FeedbackKind::Missing,
        });
    low.chain(missing).collect()
}
