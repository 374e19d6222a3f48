use crate::core::rules::RuleSet;
use crate::core::{ConfigProvider, Pipeline, RewriteReport, RewriteResult, SourceText, Storage};
use crate::utils::error::{Result, RewriteError};
use crate::utils::validation;

/// 讀取目標檔、套用規則、寫回同一路徑
pub struct FieldRewriter<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rules: RuleSet,
}

impl<S: Storage, C: ConfigProvider> FieldRewriter<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        validation::validate_path("target_path", config.target_path())?;
        validation::validate_rules("rules", config.rules())?;

        let rules = RuleSet::compile(config.rules())?;
        tracing::debug!("Compiled {} substitution rule(s)", rules.len());
        Ok(Self {
            storage,
            config,
            rules,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FieldRewriter<S, C> {
    async fn extract(&self) -> Result<SourceText> {
        let path = self.config.target_path();
        tracing::debug!("Reading {}", path);

        let bytes = self.storage.read_file(path).await?;
        let content = String::from_utf8(bytes).map_err(|source| RewriteError::DecodeError {
            path: path.to_string(),
            source,
        })?;

        Ok(SourceText {
            path: path.to_string(),
            content,
        })
    }

    async fn transform(&self, source: SourceText) -> Result<RewriteResult> {
        let (content, outcomes) = self.rules.apply(&source.content);
        Ok(RewriteResult {
            path: source.path,
            content,
            outcomes,
        })
    }

    async fn load(&self, result: RewriteResult) -> Result<RewriteReport> {
        // 不論是否有變動都覆寫
        self.storage
            .write_file(&result.path, result.content.as_bytes())
            .await?;

        Ok(RewriteReport {
            path: result.path,
            outcomes: result.outcomes,
            bytes_written: result.content.len(),
        })
    }
}
