use serde::Serialize;

use crate::feedback::feedback_items;
use crate::simulation::{Simulation, TickOutcome};
use crate::view_model::{AppViewModel, PropertyRowView};

pub type RunId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Idle,
    /// Seeded, waiting out the start-up delay.
    Loading,
    Running,
    /// Horizon reached or stopped by the user; records stay as they were.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: SessionState,
    run_id: RunId,
    equipment_name: String,
    model_number: String,
    show_details: bool,
    simulation: Simulation,
    selected: Vec<String>,
    last_tick: Option<TickOutcome>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Outcome of the most recent pipeline tick of the current run.
    pub fn last_tick(&self) -> Option<&TickOutcome> {
        self.last_tick.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let properties = self.simulation.properties();
        AppViewModel {
            session: self.session,
            run_id: self.run_id,
            equipment_name: self.equipment_name.clone(),
            model_number: self.model_number.clone(),
            loading: self.session == SessionState::Loading,
            show_details: self.show_details,
            pipelines: self.simulation.pipelines().to_vec(),
            steps: self.simulation.steps().to_vec(),
            current_step: self.simulation.current_step(),
            properties: properties.iter().map(PropertyRowView::from).collect(),
            feedback: feedback_items(properties),
            selected: self.selected.clone(),
            tick_count: self.simulation.ticks(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_equipment_name(&mut self, text: String) {
        if self.equipment_name != text {
            self.equipment_name = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_model_number(&mut self, text: String) {
        if self.model_number != text {
            self.model_number = text;
            self.dirty = true;
        }
    }

    pub(crate) fn form_complete(&self) -> bool {
        !self.equipment_name.trim().is_empty() && !self.model_number.trim().is_empty()
    }

    /// Seeds a fresh simulation under a new run id.
    pub(crate) fn start_run(&mut self) -> RunId {
        self.run_id += 1;
        self.session = SessionState::Loading;
        self.show_details = false;
        self.selected.clear();
        self.last_tick = None;
        self.simulation
            .start(&self.equipment_name, &self.model_number);
        self.dirty = true;
        self.run_id
    }

    pub(crate) fn is_current(&self, run_id: RunId) -> bool {
        run_id == self.run_id
    }

    /// Timer messages only land on the current, running run.
    pub(crate) fn accepts_timer(&self, run_id: RunId) -> bool {
        self.is_current(run_id) && self.session == SessionState::Running
    }

    pub(crate) fn begin_running(&mut self) {
        self.session = SessionState::Running;
        self.dirty = true;
    }

    pub(crate) fn apply_tick(&mut self) {
        let outcome = self.simulation.tick();
        if outcome != TickOutcome::Idle {
            self.dirty = true;
        }
        self.last_tick = Some(outcome);
    }

    /// Returns true when another step became processing.
    pub(crate) fn apply_step_advance(&mut self) -> bool {
        match self.simulation.advance_step() {
            Some(advance) => {
                self.dirty = true;
                advance.promoted.is_some()
            }
            None => false,
        }
    }

    pub(crate) fn finish_run(&mut self) {
        self.simulation.stop();
        self.session = SessionState::Stopped;
        self.dirty = true;
    }

    pub(crate) fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
        self.dirty = true;
    }

    pub(crate) fn toggle_property(&mut self, name: String, checked: bool) {
        let selectable = feedback_items(self.simulation.properties())
            .iter()
            .any(|item| item.name == name);
        if !selectable {
            return;
        }
        let present = self.selected.contains(&name);
        if checked && !present {
            self.selected.push(name);
            self.dirty = true;
        } else if !checked && present {
            self.selected.retain(|selected| *selected != name);
            self.dirty = true;
        }
    }

    pub(crate) fn take_selection(&mut self) -> Vec<String> {
        let names = std::mem::take(&mut self.selected);
        if !names.is_empty() {
            self.dirty = true;
        }
        names
    }
}
