use crate::domain::model::{RewriteReport, RewriteResult, RuleSpec, SourceText};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn target_path(&self) -> &str;
    fn rules(&self) -> &[RuleSpec];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceText>;
    async fn transform(&self, source: SourceText) -> Result<RewriteResult>;
    async fn load(&self, result: RewriteResult) -> Result<RewriteReport>;
}
