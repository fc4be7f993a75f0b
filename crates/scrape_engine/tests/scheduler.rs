use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use scrape_engine::{
    run_loading_delay, run_step_timer, run_ticker, EngineEvent, EventSink, SimulatorSettings,
};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Default, Clone)]
struct TestSink {
    events: Arc<Mutex<Vec<(Duration, EngineEvent)>>>,
    origin: Option<Instant>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            origin: Some(Instant::now()),
        }
    }

    fn take(&self) -> Vec<(Duration, EngineEvent)> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        let at = self.origin.map(|origin| origin.elapsed()).unwrap_or_default();
        self.events.lock().unwrap().push((at, event));
    }
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[tokio::test(start_paused = true)]
async fn ticker_emits_nine_ticks_then_horizon() {
    let settings = SimulatorSettings::default();
    let token = CancellationToken::new();
    let sink = TestSink::new();

    let emitted = run_ticker(4, &settings, &token, &sink).await;

    assert_eq!(emitted, 9);
    let events = sink.take();
    let expected: Vec<_> = (1..=9)
        .map(|tick| {
            (
                secs(2 * u64::from(tick)),
                EngineEvent::PipelineTick { run_id: 4, tick },
            )
        })
        .chain(std::iter::once((
            secs(20),
            EngineEvent::HorizonReached { run_id: 4 },
        )))
        .collect();
    assert_eq!(events, expected);
    assert!(token.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn cancelled_ticker_stops_emitting() {
    let settings = SimulatorSettings::default();
    let token = CancellationToken::new();
    let sink = TestSink::new();

    let ticker = {
        let (settings, token, sink) = (settings.clone(), token.clone(), sink.clone());
        tokio::spawn(async move { run_ticker(1, &settings, &token, &sink).await })
    };
    tokio::time::sleep(secs(5)).await;
    token.cancel();

    assert_eq!(ticker.await.unwrap(), 2);
    let events: Vec<_> = sink.take().into_iter().map(|(_, event)| event).collect();
    assert_eq!(
        events,
        vec![
            EngineEvent::PipelineTick { run_id: 1, tick: 1 },
            EngineEvent::PipelineTick { run_id: 1, tick: 2 },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn horizon_cancels_armed_step_timer() {
    let settings = SimulatorSettings {
        horizon_units: 5,
        ..SimulatorSettings::default()
    };
    let token = CancellationToken::new();
    let sink = TestSink::new();

    let ticker = {
        let (settings, token, sink) = (settings.clone(), token.clone(), sink.clone());
        tokio::spawn(async move { run_ticker(2, &settings, &token, &sink).await })
    };
    // Armed at 4 units, would fire at 7, after the horizon at 5.
    tokio::time::sleep(secs(4)).await;
    let fired = run_step_timer(2, &settings, &token, &sink).await;

    assert!(!fired);
    assert_eq!(ticker.await.unwrap(), 2);
    let last = sink.take().pop().unwrap();
    assert_eq!(last, (secs(5), EngineEvent::HorizonReached { run_id: 2 }));
}

#[tokio::test(start_paused = true)]
async fn step_timer_fires_after_delay() {
    let settings = SimulatorSettings::default();
    let token = CancellationToken::new();
    let sink = TestSink::new();

    assert!(run_step_timer(3, &settings, &token, &sink).await);
    assert_eq!(
        sink.take(),
        vec![(secs(3), EngineEvent::StepTimerFired { run_id: 3 })]
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_loading_delay_emits_nothing() {
    let settings = SimulatorSettings::default();
    let token = CancellationToken::new();
    let sink = TestSink::new();
    token.cancel();

    assert!(!run_loading_delay(1, &settings, &token, &sink).await);
    assert!(sink.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn loading_delay_uses_startup_units() {
    let settings = SimulatorSettings {
        time_unit: Duration::from_millis(250),
        startup_delay_units: 4,
        ..SimulatorSettings::default()
    };
    let token = CancellationToken::new();
    let sink = TestSink::new();

    assert!(run_loading_delay(9, &settings, &token, &sink).await);
    assert_eq!(
        sink.take(),
        vec![(secs(1), EngineEvent::LoadingFinished { run_id: 9 })]
    );
}
