use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use scrape_core::{
    AppViewModel, ConfidenceTier, FeedbackKind, PipelineRecord, PropertyRowView, SessionState,
    Status, StepRecord, LOW_CONFIDENCE_THRESHOLD,
};

use super::constants::*;

/// One text frame of the dashboard.
pub fn render(view: &AppViewModel, started: Option<&DateTime<Utc>>) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "Equipment Property Scraper | {} {} | {} | tick {}",
        view.equipment_name.trim(),
        view.model_number.trim(),
        session_label(view.session),
        view.tick_count
    );
    if let Some(started) = started {
        let _ = writeln!(
            out,
            "Started: {}",
            started.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }
    let _ = writeln!(out, "{rule}");

    if view.pipelines.is_empty() {
        let hint = if view.loading { "Scraping..." } else { EMPTY_HINT };
        let _ = writeln!(out, "{hint}");
        return out;
    }
    if view.loading {
        let _ = writeln!(out, "Scraping...");
    }

    let _ = writeln!(out, "Scraping Pipelines");
    for (index, pipeline) in view.pipelines.iter().enumerate() {
        render_pipeline(&mut out, pipeline, index == 0);
    }

    if view.show_details {
        let _ = writeln!(out, "{rule}");
        render_steps(&mut out, &view.steps, view.current_step);
        let _ = writeln!(out, "{rule}");
        render_properties(&mut out, view);
    }
    out
}

pub fn render_json(view: &AppViewModel) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

fn render_pipeline(out: &mut String, pipeline: &PipelineRecord, top_result: bool) {
    let badge = if top_result { "  (top result)" } else { "" };
    let _ = writeln!(
        out,
        "  [{}] {}{}",
        pipeline.status, pipeline.domain, badge
    );
    let _ = writeln!(out, "      {}", pipeline.url);
    let _ = writeln!(
        out,
        "      Confidence: {}% | Properties: {} | ETA: {}",
        pipeline.confidence, pipeline.properties_found, pipeline.estimated_time
    );
    if pipeline.status == Status::Processing {
        let _ = writeln!(
            out,
            "      [{}] {}",
            progress_bar(pipeline.confidence),
            pipeline.last_step
        );
    } else {
        let _ = writeln!(out, "      {}", pipeline.last_step);
    }
}

fn render_steps(out: &mut String, steps: &[StepRecord], current_step: usize) {
    let _ = writeln!(out, "Extraction Steps");
    for (index, step) in steps.iter().enumerate() {
        let duration = step
            .duration
            .as_deref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();
        let current = if index == current_step && step.status == Status::Processing {
            "  <- current"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {} {}. {}{}{}",
            step_marker(step.status),
            index + 1,
            step.title,
            duration,
            current
        );
        let _ = writeln!(out, "      {}", step.description);
        for detail in &step.details {
            let _ = writeln!(out, "      - {detail}");
        }
        if let Some(found) = &step.properties_found {
            let _ = writeln!(out, "      found: {}", found.join(", "));
        }
    }
}

fn render_properties(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(
        out,
        "{} ({} Properties)",
        view.properties_title(),
        view.properties.len()
    );
    if view.properties.is_empty() {
        let _ = writeln!(out, "  {NO_PROPERTIES_HINT}");
    }
    for property in &view.properties {
        render_property(out, property, view);
    }
    for item in view
        .feedback
        .iter()
        .filter(|item| item.kind == FeedbackKind::Missing)
    {
        let _ = writeln!(
            out,
            "  {} {}  Missing  N/A",
            checkbox(view, &item.name),
            item.name
        );
        let _ = writeln!(out, "      {MISSING_HINT}");
    }
    if !view.selected.is_empty() {
        let _ = writeln!(
            out,
            "Re-run Pipeline for Selected Properties ({})",
            view.selected.len()
        );
    }
}

fn render_property(out: &mut String, property: &PropertyRowView, view: &AppViewModel) {
    let low = property.confidence < LOW_CONFIDENCE_THRESHOLD;
    let lead = if low {
        checkbox(view, &property.name)
    } else {
        "   "
    };
    let verified = if property.verified { " (verified)" } else { "" };
    let flag = if low { "  Low Confidence" } else { "" };
    let _ = writeln!(
        out,
        "  {} {}: {}  [{}% {}]{}{}",
        lead,
        property.name,
        property.value,
        property.confidence,
        tier_label(property.tier),
        verified,
        flag
    );
    let _ = writeln!(out, "      Source: {}", property.source);
}

fn checkbox(view: &AppViewModel, name: &str) -> &'static str {
    if view.selected.iter().any(|selected| selected == name) {
        "[x]"
    } else {
        "[ ]"
    }
}

fn progress_bar(confidence: u8) -> String {
    let filled = usize::from(confidence.min(100)) * PROGRESS_BAR_WIDTH / 100;
    let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH);
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(PROGRESS_BAR_WIDTH - filled));
    bar
}

fn session_label(session: SessionState) -> &'static str {
    match session {
        SessionState::Idle => "Idle",
        SessionState::Loading => "Loading",
        SessionState::Running => "Running",
        SessionState::Stopped => "Stopped",
    }
}

fn step_marker(status: Status) -> &'static str {
    match status {
        Status::Pending => "[ ]",
        Status::Processing => "[>]",
        Status::Completed => "[x]",
        Status::Failed => "[!]",
    }
}

fn tier_label(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => "high",
        ConfidenceTier::Medium => "medium",
        ConfidenceTier::Low => "low",
    }
}
