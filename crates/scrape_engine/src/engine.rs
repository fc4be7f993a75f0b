use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::rerun::{NoopRerunHandler, RerunHandler};
use crate::scheduler::{run_loading_delay, run_step_timer, run_ticker, ChannelEventSink};
use crate::{EngineEvent, RunId, SettingsError, SimulatorSettings};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid simulator settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    StartRun { run_id: RunId },
    StartTicker { run_id: RunId },
    ArmStepTimer { run_id: RunId },
    StopRun { run_id: RunId },
    Rerun { names: Vec<String> },
    Shutdown,
}

struct ActiveRun {
    run_id: RunId,
    token: CancellationToken,
}

/// Owns the timer thread. Commands for a run other than the latest are dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(settings: SimulatorSettings) -> Result<Self, EngineError> {
        Self::with_rerun_handler(settings, Arc::new(NoopRerunHandler))
    }

    pub fn with_rerun_handler(
        settings: SimulatorSettings,
        rerun_handler: Arc<dyn RerunHandler>,
    ) -> Result<Self, EngineError> {
        settings.validate()?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let sink = ChannelEventSink::new(event_tx);

        let worker = thread::spawn(move || {
            let mut current: Option<ActiveRun> = None;
            let mut reruns: Vec<JoinHandle<()>> = Vec::new();

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartRun { run_id } => {
                        if let Some(previous) = current.take() {
                            engine_debug!("Run {} replaced by run {}", previous.run_id, run_id);
                            previous.token.cancel();
                        }
                        let token = CancellationToken::new();
                        let (settings, sink, task_token) =
                            (settings.clone(), sink.clone(), token.clone());
                        runtime.spawn(async move {
                            run_loading_delay(run_id, &settings, &task_token, &sink).await;
                        });
                        current = Some(ActiveRun { run_id, token });
                    }
                    EngineCommand::StartTicker { run_id } => match active(&current, run_id) {
                        Some(token) => {
                            let (settings, sink) = (settings.clone(), sink.clone());
                            runtime.spawn(async move {
                                let ticks = run_ticker(run_id, &settings, &token, &sink).await;
                                engine_debug!("Ticker for run {} emitted {} ticks", run_id, ticks);
                            });
                        }
                        None => engine_debug!("Ignoring ticker start for stale run {}", run_id),
                    },
                    EngineCommand::ArmStepTimer { run_id } => match active(&current, run_id) {
                        Some(token) => {
                            let (settings, sink) = (settings.clone(), sink.clone());
                            runtime.spawn(async move {
                                run_step_timer(run_id, &settings, &token, &sink).await;
                            });
                        }
                        None => engine_debug!("Ignoring step timer for stale run {}", run_id),
                    },
                    EngineCommand::StopRun { run_id } => {
                        if let Some(run) = current.take_if(|run| run.run_id == run_id) {
                            engine_info!("Run {} stopped", run_id);
                            run.token.cancel();
                        }
                    }
                    EngineCommand::Rerun { names } => {
                        reruns.retain(|handle| !handle.is_finished());
                        let handler = rerun_handler.clone();
                        reruns.push(runtime.spawn(async move { handler.rerun(names).await }));
                    }
                    EngineCommand::Shutdown => break,
                }
            }

            if let Some(run) = current.take() {
                run.token.cancel();
            }
            // Re-run requests already accepted are allowed to finish.
            runtime.block_on(futures_util::future::join_all(reruns));
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            worker: Some(worker),
        })
    }

    pub fn start_run(&self, run_id: RunId) {
        self.send(EngineCommand::StartRun { run_id });
    }

    pub fn start_ticker(&self, run_id: RunId) {
        self.send(EngineCommand::StartTicker { run_id });
    }

    pub fn arm_step_timer(&self, run_id: RunId) {
        self.send(EngineCommand::ArmStepTimer { run_id });
    }

    pub fn stop_run(&self, run_id: RunId) {
        self.send(EngineCommand::StopRun { run_id });
    }

    pub fn rerun(&self, names: Vec<String>) {
        self.send(EngineCommand::Rerun { names });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Cancels the current run and waits for the timer thread to exit.
    pub fn shutdown(mut self) {
        self.stop_worker();
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }

    fn stop_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.send(EngineCommand::Shutdown);
            let _ = worker.join();
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

fn active(current: &Option<ActiveRun>, run_id: RunId) -> Option<CancellationToken> {
    current
        .as_ref()
        .filter(|run| run.run_id == run_id && !run.token.is_cancelled())
        .map(|run| run.token.clone())
}
