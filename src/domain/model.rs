use serde::{Deserialize, Serialize};

/// 單一替換規則的描述：pattern 為正規表達式，replacement 以字面值插入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub name: String,
    pub matches: usize,
}

#[derive(Debug, Clone)]
pub struct RewriteResult {
    pub path: String,
    pub content: String,
    pub outcomes: Vec<RuleOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub path: String,
    pub outcomes: Vec<RuleOutcome>,
    pub bytes_written: usize,
}

impl RewriteReport {
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }

    /// 目標檔名（訊息用），取不到時退回完整路徑
    pub fn file_name(&self) -> &str {
        std::path::Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path)
    }
}
