use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::EquipmentNameChanged(text) => {
            state.set_equipment_name(text);
            Vec::new()
        }
        Msg::ModelNumberChanged(text) => {
            state.set_model_number(text);
            Vec::new()
        }
        Msg::ScrapeClicked => {
            if !state.form_complete() {
                return (state, Vec::new());
            }
            // A new run replaces the old one wholesale; its timers carry a stale run id.
            let run_id = state.start_run();
            vec![Effect::StartRun { run_id }]
        }
        Msg::LoadingFinished { run_id } => {
            if !state.is_current(run_id) || state.session() != SessionState::Loading {
                return (state, Vec::new());
            }
            state.begin_running();
            let mut effects = vec![Effect::StartTicker { run_id }];
            if state.simulation().processing_step().is_some() {
                effects.push(Effect::ArmStepTimer { run_id });
            }
            effects
        }
        Msg::PipelineTick { run_id } => {
            if state.accepts_timer(run_id) {
                state.apply_tick();
            }
            Vec::new()
        }
        Msg::StepTimerFired { run_id } => {
            if state.accepts_timer(run_id) && state.apply_step_advance() {
                vec![Effect::ArmStepTimer { run_id }]
            } else {
                Vec::new()
            }
        }
        Msg::HorizonReached { run_id } => {
            if state.accepts_timer(run_id) {
                state.finish_run();
            }
            Vec::new()
        }
        Msg::StopClicked => match state.session() {
            SessionState::Loading | SessionState::Running => {
                state.finish_run();
                vec![Effect::StopRun {
                    run_id: state.run_id(),
                }]
            }
            SessionState::Idle | SessionState::Stopped => Vec::new(),
        },
        Msg::DetailsToggled => {
            state.toggle_details();
            Vec::new()
        }
        Msg::PropertyToggled { name, checked } => {
            state.toggle_property(name, checked);
            Vec::new()
        }
        Msg::RerunClicked => {
            let names = state.take_selection();
            if names.is_empty() {
                Vec::new()
            } else {
                vec![Effect::RerunProperties { names }]
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
