use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use engine_logging::{engine_debug, engine_info, set_sim_tick};
use scrape_core::{update, AppState, AppViewModel, Msg, SessionState, TickOutcome};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui;

/// Upper bound on how long the loop waits for an engine event before a render tick.
const RENDER_INTERVAL: Duration = Duration::from_millis(75);

pub struct RunOptions {
    pub equipment_name: String,
    pub model_number: String,
    pub config: AppConfig,
    pub json: bool,
    pub show_details: bool,
    pub rerun: Vec<String>,
}

pub fn run_app(options: RunOptions) -> Result<()> {
    logging::initialize(options.config.log);

    let runner = EffectRunner::new(options.config.simulator_settings())?;
    let stdout = io::stdout();
    let mut dashboard = Dashboard {
        state: AppState::new(),
        runner,
        out: stdout.lock(),
        json: options.json,
        started: None,
    };

    dashboard.dispatch(Msg::EquipmentNameChanged(options.equipment_name))?;
    dashboard.dispatch(Msg::ModelNumberChanged(options.model_number))?;
    dashboard.started = Some(Utc::now());
    dashboard.dispatch(Msg::ScrapeClicked)?;
    if dashboard.state.session() == SessionState::Idle {
        bail!("equipment name and model number must not be blank");
    }
    if options.show_details {
        dashboard.dispatch(Msg::DetailsToggled)?;
    }

    while dashboard.state.session() != SessionState::Stopped {
        let msg = dashboard
            .runner
            .next_msg(RENDER_INTERVAL)
            .unwrap_or(Msg::Tick);
        dashboard.dispatch(msg)?;
    }

    if !options.rerun.is_empty() {
        for name in options.rerun {
            dashboard.dispatch(Msg::PropertyToggled {
                name,
                checked: true,
            })?;
        }
        dashboard.dispatch(Msg::RerunClicked)?;
    }

    engine_info!(
        "Run {} finished after {} ticks",
        dashboard.state.run_id(),
        dashboard.state.simulation().ticks()
    );
    dashboard.runner.shutdown();
    Ok(())
}

struct Dashboard<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    json: bool,
    started: Option<DateTime<Utc>>,
}

impl<W: Write> Dashboard<W> {
    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let is_tick = matches!(msg, Msg::PipelineTick { .. });
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);

        if is_tick {
            set_sim_tick(state.simulation().ticks());
            log_tick(state.last_tick());
        }

        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            self.render(&view)?;
        }
        Ok(())
    }

    fn render(&mut self, view: &AppViewModel) -> Result<()> {
        let frame = if self.json {
            ui::render::render_json(view).context("failed to serialize view model")?
        } else {
            ui::render::render(view, self.started.as_ref())
        };
        writeln!(self.out, "{frame}").context("failed to write frame")?;
        self.out.flush().context("failed to flush frame")?;
        Ok(())
    }
}

fn log_tick(outcome: Option<&TickOutcome>) {
    match outcome {
        Some(TickOutcome::Completed { id, promoted }) => match promoted {
            Some(next) => {
                engine_info!("Pipeline {} completed; pipeline {} now processing", id, next)
            }
            None => engine_info!("Pipeline {} completed; no pipelines pending", id),
        },
        Some(TickOutcome::Advanced { .. }) | None => {}
        Some(TickOutcome::Idle) => engine_debug!("Pipeline tick with nothing processing"),
    }
}
