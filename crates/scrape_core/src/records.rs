use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub type PipelineId = String;
pub type StepId = String;

/// Lifecycle shared by pipelines and steps.
///
/// `Failed` is absorbing and never produced by the simulator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::Processing => write!(f, "processing"),
            Status::Completed => write!(f, "completed"),
            Status::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("source url has no host: {url}")]
pub struct InvalidSourceUrl {
    pub url: String,
}

/// Display domain for a source url: the host without a leading `www.`.
pub fn source_domain(url: &str) -> Result<String, InvalidSourceUrl> {
    let invalid = || InvalidSourceUrl {
        url: url.to_string(),
    };
    let parsed = url::Url::parse(url.trim()).map_err(|_| invalid())?;
    let host = parsed.host_str().ok_or_else(invalid)?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    Ok(host.to_ascii_lowercase())
}

/// A simulated per-source scraping task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineRecord {
    pub id: PipelineId,
    pub url: String,
    pub domain: String,
    pub status: Status,
    pub confidence: u8,
    pub properties_found: u8,
    pub estimated_time: String,
    pub last_step: String,
}

impl PipelineRecord {
    /// Builds a record in `status`, deriving the domain from `url`.
    pub fn new(
        id: impl Into<PipelineId>,
        url: impl Into<String>,
        status: Status,
    ) -> Result<Self, InvalidSourceUrl> {
        let url = url.into();
        let domain = source_domain(&url)?;
        Ok(Self {
            id: id.into(),
            url,
            domain,
            status,
            confidence: 0,
            properties_found: 0,
            estimated_time: String::new(),
            last_step: String::new(),
        })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Completed | Status::Failed)
    }
}

/// A stage within the overall extraction process, shared by all pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub duration: Option<String>,
    pub details: Vec<String>,
    pub properties_found: Option<Vec<String>>,
}

impl StepRecord {
    pub fn new(
        id: impl Into<StepId>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status,
            duration: None,
            details: Vec::new(),
            properties_found: None,
        }
    }
}

/// Badge bucket for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn of(confidence: u8) -> Self {
        match confidence {
            90.. => ConfidenceTier::High,
            70..=89 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyResult {
    pub name: String,
    pub value: String,
    pub confidence: u8,
    pub source: String,
    pub verified: bool,
}

impl PropertyResult {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::of(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_strips_www_prefix() {
        assert_eq!(
            source_domain("https://www.manufacturer-specs.com/equipment/xg-2000").unwrap(),
            "manufacturer-specs.com"
        );
        assert_eq!(
            source_domain("https://equipmentdb.industrial.com/models/xg2000").unwrap(),
            "equipmentdb.industrial.com"
        );
    }

    #[test]
    fn domain_requires_a_host() {
        let err = source_domain("mailto:someone@example.com").unwrap_err();
        assert_eq!(err.url, "mailto:someone@example.com");
        assert!(source_domain("not a url").is_err());
    }

    #[test]
    fn tiers_follow_badge_thresholds() {
        assert_eq!(ConfidenceTier::of(100), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(90), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(89), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::of(70), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::of(69), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::of(0), ConfidenceTier::Low);
    }
}
