use crate::core::{Pipeline, RewriteReport};
use crate::utils::error::Result;

pub struct RewriteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RewriteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RewriteReport> {
        tracing::info!("Starting rewrite...");

        // Read
        let source = self.pipeline.extract().await?;
        tracing::info!("Read {} bytes from {}", source.content.len(), source.path);

        // Substitute
        let result = self.pipeline.transform(source).await?;
        for outcome in &result.outcomes {
            tracing::info!("{}: {} match(es) replaced", outcome.name, outcome.matches);
        }

        // Write
        let report = self.pipeline.load(result).await?;
        tracing::info!("Wrote {} bytes to {}", report.bytes_written, report.path);

        Ok(report)
    }
}
