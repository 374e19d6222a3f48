pub mod engine;
pub mod rewriter;
pub mod rules;

pub use crate::domain::model::{RewriteReport, RewriteResult, RuleOutcome, RuleSpec, SourceText};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
