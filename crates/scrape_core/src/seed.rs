//! Literal demo content installed by `Simulation::start`.
use crate::records::{source_domain, PipelineRecord, PropertyResult, Status, StepRecord};

struct PipelineSeed {
    id: &'static str,
    url: &'static str,
    status: Status,
    confidence: u8,
    properties_found: u8,
    estimated_time: &'static str,
    last_step: &'static str,
}

const PIPELINES: [PipelineSeed; 3] = [
    PipelineSeed {
        id: "1",
        url: "https://www.manufacturer-specs.com/equipment/xg-2000",
        status: Status::Processing,
        confidence: 85,
        properties_found: 12,
        estimated_time: "2m 30s",
        last_step: "Extracting technical specifications...",
    },
    PipelineSeed {
        id: "2",
        url: "https://equipmentdb.industrial.com/models/xg2000",
        status: Status::Pending,
        confidence: 72,
        properties_found: 8,
        estimated_time: "3m 15s",
        last_step: "Queued for processing",
    },
    PipelineSeed {
        id: "3",
        url: "https://parts-catalog.machinery.net/xg-2000-specs",
        status: Status::Pending,
        confidence: 68,
        properties_found: 6,
        estimated_time: "4m 0s",
        last_step: "Waiting in queue",
    },
];

pub fn demo_pipelines() -> Vec<PipelineRecord> {
    PIPELINES
        .iter()
        .map(|seed| PipelineRecord {
            id: seed.id.to_string(),
            url: seed.url.to_string(),
            // Seeds are known-good; fall back to the raw url rather than fail a demo.
            domain: source_domain(seed.url).unwrap_or_else(|_| seed.url.to_string()),
            status: seed.status,
            confidence: seed.confidence,
            properties_found: seed.properties_found,
            estimated_time: seed.estimated_time.to_string(),
            last_step: seed.last_step.to_string(),
        })
        .collect()
}

pub fn demo_steps() -> Vec<StepRecord> {
    let mut analysis = StepRecord::new(
        "1",
        "Page Analysis",
        "Analyzing page structure and identifying data sections",
        Status::Completed,
    );
    analysis.duration = Some("0.8s".to_string());
    analysis.details = notes(&[
        "Detected manufacturer specification format",
        "Found technical data tables",
        "Identified 3 potential property sections",
    ]);

    let mut extraction = StepRecord::new(
        "2",
        "Content Extraction",
        "Extracting raw content from identified sections",
        Status::Processing,
    );
    extraction.details = notes(&[
        "Processing specification tables...",
        "Extracting product descriptions",
        "Parsing technical drawings metadata",
    ]);

    vec![
        analysis,
        extraction,
        StepRecord::new(
            "3",
            "Data Processing",
            "Processing and validating extracted properties",
            Status::Pending,
        ),
        StepRecord::new(
            "4",
            "Quality Verification",
            "Cross-referencing and verifying property accuracy",
            Status::Pending,
        ),
    ]
}

pub fn demo_properties() -> Vec<PropertyResult> {
    [
        ("Power Output", "2000 kW", 95, true),
        ("Fuel Type", "Diesel", 90, true),
        ("Dimensions (L×W×H)", "3.2m × 1.8m × 2.1m", 88, false),
        ("Weight", "4,250 kg", 85, false),
        ("Frequency", "50/60 Hz", 92, true),
    ]
    .into_iter()
    .map(|(name, value, confidence, verified)| PropertyResult {
        name: name.to_string(),
        value: value.to_string(),
        confidence,
        source: "manufacturer-specs.com".to_string(),
        verified,
    })
    .collect()
}

fn notes(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
