pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::RewriteConfig};
pub use core::{engine::RewriteEngine, rewriter::FieldRewriter, rules::RuleSet};
pub use utils::error::{Result, RewriteError};

use domain::model::RewriteReport;
use domain::ports::{ConfigProvider, Storage};

/// 建立改寫管道並執行一次：讀取、替換、寫回
pub async fn rewrite<S: Storage, C: ConfigProvider>(storage: S, config: C) -> Result<RewriteReport> {
    let pipeline = FieldRewriter::new(storage, config)?;
    RewriteEngine::new(pipeline).run().await
}
