use crate::core::rules::{default_rules, TARGET_PATH};
use crate::core::ConfigProvider;
use crate::domain::model::RuleSpec;
use crate::utils::error::{Result, RewriteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 以 TOML 描述的改寫設定
///
/// ```toml
/// target = "Frontend/src/data/courses.ts"
///
/// [[rules]]
/// name = "totalVideos"
/// pattern = 'totalVideos: \d+'
/// replacement = "totalVideos: 8"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteConfig {
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleSpec>,
}

fn default_target() -> String {
    TARGET_PATH.to_string()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            rules: default_rules(),
        }
    }
}

impl RewriteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RewriteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RewriteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| RewriteError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl ConfigProvider for RewriteConfig {
    fn target_path(&self) -> &str {
        &self.target
    }

    fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }
}

impl Validate for RewriteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("target", &self.target)?;
        validation::validate_rules("rules", &self.rules)
    }
}
