//! Inbound port. Scheduler and CLI (adapters) call into the application.

/// One full fetch → extract → check pass.
#[async_trait::async_trait]
pub trait PipelinePort: Send + Sync {
    /// Run the pipeline once. Failures are logged, never returned.
    async fn run_once(&self);
}
