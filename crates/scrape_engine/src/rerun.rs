use engine_logging::engine_info;

/// Slot for re-running extraction on selected property names.
#[async_trait::async_trait]
pub trait RerunHandler: Send + Sync {
    async fn rerun(&self, names: Vec<String>);
}

/// Accepts the request and does nothing beyond logging it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRerunHandler;

#[async_trait::async_trait]
impl RerunHandler for NoopRerunHandler {
    async fn rerun(&self, names: Vec<String>) {
        engine_info!(
            "Re-run requested for {} properties ({}); no re-computation is wired",
            names.len(),
            names.join(", ")
        );
    }
}
