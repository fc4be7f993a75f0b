//! Owned progress simulation: pipeline ticks and sequential step advancement.
//!
//! The simulation never schedules anything itself. A driver calls [`Simulation::tick`]
//! on the pipeline cadence and [`Simulation::advance_step`] when the step delay
//! elapses; [`Simulation::stop`] makes both inert until the next `start`.

use crate::records::{PipelineId, PipelineRecord, PropertyResult, Status, StepId, StepRecord};
use crate::seed;

pub const CONFIDENCE_INCREMENT: u8 = 5;
pub const CONFIDENCE_CAP: u8 = 100;
pub const PROPERTIES_CAP: u8 = 15;
pub const STEP_DURATION_LABEL: &str = "1.2s";
pub const COMPLETED_MESSAGE: &str = "Extraction completed";
pub const PROMOTED_MESSAGE: &str = "Analyzing page structure...";

/// What a single pipeline tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was processing (or the simulation is stopped).
    Idle,
    Advanced { id: PipelineId },
    Completed {
        id: PipelineId,
        promoted: Option<PipelineId>,
    },
}

/// Result of completing the processing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAdvance {
    pub completed: StepId,
    pub promoted: Option<StepId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Simulation {
    equipment_name: String,
    model_number: String,
    pipelines: Vec<PipelineRecord>,
    steps: Vec<StepRecord>,
    properties: Vec<PropertyResult>,
    current_step: usize,
    ticks: u64,
    active: bool,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// An active simulation over caller-provided records.
    pub fn from_records(
        pipelines: Vec<PipelineRecord>,
        steps: Vec<StepRecord>,
        properties: Vec<PropertyResult>,
    ) -> Self {
        let current_step = processing_index(&steps).unwrap_or(0);
        Self {
            pipelines,
            steps,
            properties,
            current_step,
            active: true,
            ..Self::default()
        }
    }

    /// Replaces all prior state with the demo seed and activates the run.
    pub fn start(&mut self, equipment_name: &str, model_number: &str) {
        *self = Self::from_records(
            seed::demo_pipelines(),
            seed::demo_steps(),
            seed::demo_properties(),
        );
        self.equipment_name = equipment_name.trim().to_string();
        self.model_number = model_number.trim().to_string();
    }

    /// Advances the first processing pipeline by one increment.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        let Some(pipeline) = self
            .pipelines
            .iter_mut()
            .find(|p| p.status == Status::Processing)
        else {
            return TickOutcome::Idle;
        };

        pipeline.confidence = pipeline
            .confidence
            .saturating_add(CONFIDENCE_INCREMENT)
            .min(CONFIDENCE_CAP);
        pipeline.properties_found = pipeline.properties_found.saturating_add(1).min(PROPERTIES_CAP);

        if pipeline.confidence < CONFIDENCE_CAP {
            return TickOutcome::Advanced {
                id: pipeline.id.clone(),
            };
        }

        pipeline.status = Status::Completed;
        pipeline.last_step = COMPLETED_MESSAGE.to_string();
        let id = pipeline.id.clone();

        let promoted = self
            .pipelines
            .iter_mut()
            .find(|p| p.status == Status::Pending)
            .map(|next| {
                next.status = Status::Processing;
                next.last_step = PROMOTED_MESSAGE.to_string();
                next.id.clone()
            });

        TickOutcome::Completed { id, promoted }
    }

    /// Completes the processing step and activates the next pending one after it.
    pub fn advance_step(&mut self) -> Option<StepAdvance> {
        if !self.active {
            return None;
        }
        let index = processing_index(&self.steps)?;

        let step = &mut self.steps[index];
        step.status = Status::Completed;
        step.duration = Some(STEP_DURATION_LABEL.to_string());
        let completed = step.id.clone();

        let next = self
            .steps
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, s)| s.status == Status::Pending)
            .map(|(i, _)| i);

        let promoted = next.map(|i| {
            self.steps[i].status = Status::Processing;
            self.current_step = i;
            self.steps[i].id.clone()
        });

        Some(StepAdvance {
            completed,
            promoted,
        })
    }

    /// Halts advancement. Records are left exactly as they are.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// External assignment of the dormant `failed` state. Completed records are terminal.
    pub fn mark_pipeline_failed(&mut self, id: &str) -> bool {
        match self.pipelines.iter_mut().find(|p| p.id == id) {
            Some(pipeline) if !pipeline.is_terminal() => {
                pipeline.status = Status::Failed;
                true
            }
            _ => false,
        }
    }

    pub fn mark_step_failed(&mut self, id: &str) -> bool {
        match self.steps.iter_mut().find(|s| s.id == id) {
            Some(step) if !matches!(step.status, Status::Completed | Status::Failed) => {
                step.status = Status::Failed;
                true
            }
            _ => false,
        }
    }

    pub fn processing_pipeline(&self) -> Option<&PipelineRecord> {
        self.pipelines
            .iter()
            .find(|p| p.status == Status::Processing)
    }

    pub fn processing_step(&self) -> Option<&StepRecord> {
        self.steps.iter().find(|s| s.status == Status::Processing)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pipelines(&self) -> &[PipelineRecord] {
        &self.pipelines
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn properties(&self) -> &[PropertyResult] {
        &self.properties
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Pipeline ticks applied since `start`.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn equipment_name(&self) -> &str {
        &self.equipment_name
    }

    pub fn model_number(&self) -> &str {
        &self.model_number
    }
}

fn processing_index(steps: &[StepRecord]) -> Option<usize> {
    steps.iter().position(|s| s.status == Status::Processing)
}
