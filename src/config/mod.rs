pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::rules::{default_rules, TARGET_PATH};
    use crate::core::ConfigProvider;
    use crate::domain::model::RuleSpec;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    /// 目標路徑與規則固定不開放參數；旗標只影響日誌
    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "update-courses")]
    #[command(version)]
    #[command(about = "Rewrite totalVideos and duration fields in Frontend/src/data/courses.ts")]
    pub struct CliConfig {
        #[arg(short, long, help = "Enable verbose diagnostics on stderr")]
        pub verbose: bool,

        #[arg(skip = TARGET_PATH.to_string())]
        pub target_path: String,

        #[arg(skip = default_rules())]
        pub rules: Vec<RuleSpec>,
    }

    impl Default for CliConfig {
        fn default() -> Self {
            Self {
                verbose: false,
                target_path: TARGET_PATH.to_string(),
                rules: default_rules(),
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn target_path(&self) -> &str {
            &self.target_path
        }

        fn rules(&self) -> &[RuleSpec] {
            &self.rules
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("target_path", &self.target_path)?;
            validation::validate_rules("rules", &self.rules)
        }
    }

}
