use crate::domain::model::{RuleOutcome, RuleSpec};
use crate::utils::error::Result;
use regex::{NoExpand, Regex};

/// 預設目標檔案（相對於工作目錄）
pub const TARGET_PATH: &str = "Frontend/src/data/courses.ts";

pub const TOTAL_VIDEOS_PATTERN: &str = r"totalVideos: \d+";
pub const TOTAL_VIDEOS_REPLACEMENT: &str = "totalVideos: 8";

pub const DURATION_PATTERN: &str = r"duration: '[^']+'";
pub const DURATION_REPLACEMENT: &str = "duration: '2 Hours'";

/// 內建規則：先 totalVideos，再 duration
pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new("totalVideos", TOTAL_VIDEOS_PATTERN, TOTAL_VIDEOS_REPLACEMENT),
        RuleSpec::new("duration", DURATION_PATTERN, DURATION_REPLACEMENT),
    ]
}

#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    name: String,
    regex: Regex,
    replacement: String,
}

impl SubstitutionRule {
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        Ok(Self {
            name: spec.name.clone(),
            regex: Regex::new(&spec.pattern)?,
            replacement: spec.replacement.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 全域替換，回傳新內容與被替換的片段數
    pub fn apply(&self, text: &str) -> (String, usize) {
        let matches = self.regex.find_iter(text).count();
        if matches == 0 {
            return (text.to_string(), 0);
        }

        let replaced = self
            .regex
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned();
        (replaced, matches)
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(SubstitutionRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn defaults() -> Result<Self> {
        Self::compile(&default_rules())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 依序套用每條規則；後面的規則看到的是前面規則的輸出
    pub fn apply(&self, text: &str) -> (String, Vec<RuleOutcome>) {
        let mut content = text.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, matches) = rule.apply(&content);
            tracing::debug!("Rule '{}' replaced {} span(s)", rule.name(), matches);
            outcomes.push(RuleOutcome {
                name: rule.name().to_string(),
                matches,
            });
            content = next;
        }

        (content, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str) -> String {
        RuleSet::defaults().unwrap().apply(text).0
    }

    #[test]
    fn test_total_videos_any_digit_count() {
        assert_eq!(rewrite("totalVideos: 0"), "totalVideos: 8");
        assert_eq!(rewrite("totalVideos: 12"), "totalVideos: 8");
        assert_eq!(rewrite("totalVideos: 123456789"), "totalVideos: 8");
    }

    #[test]
    fn test_duration_any_quoted_content() {
        assert_eq!(rewrite("duration: 'Self Paced'"), "duration: '2 Hours'");
        assert_eq!(rewrite("duration: '45 mins'"), "duration: '2 Hours'");
    }

    #[test]
    fn test_scenario_both_fields_in_place() {
        let input = "{\n  id: 1,\n  totalVideos: 12,\n  duration: 'Self Paced',\n  level: 'Beginner'\n}\n";
        let expected = "{\n  id: 1,\n  totalVideos: 8,\n  duration: '2 Hours',\n  level: 'Beginner'\n}\n";

        let (output, outcomes) = RuleSet::defaults().unwrap().apply(input);
        assert_eq!(output, expected);
        assert_eq!(
            outcomes,
            vec![
                RuleOutcome { name: "totalVideos".to_string(), matches: 1 },
                RuleOutcome { name: "duration".to_string(), matches: 1 },
            ]
        );
    }

    #[test]
    fn test_global_substitution_replaces_every_occurrence() {
        let input = "a totalVideos: 3 b totalVideos: 45 c totalVideos: 678";
        let (output, outcomes) = RuleSet::defaults().unwrap().apply(input);

        assert_eq!(output, "a totalVideos: 8 b totalVideos: 8 c totalVideos: 8");
        assert_eq!(outcomes[0].matches, 3);
        assert_eq!(outcomes[1].matches, 0);
    }

    #[test]
    fn test_idempotent() {
        let input = "totalVideos: 40, duration: '10 Weeks', totalVideos: 2, title: 'Rust'";
        let once = rewrite(input);
        let twice = rewrite(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_text_outside_matches_untouched() {
        let input = "// 中文註解 totalVideos:12 duration: \"Self Paced\" duration: '' ñ\r\n";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_only_matched_span_is_replaced() {
        // 數字後面的字元不屬於匹配範圍
        assert_eq!(rewrite("totalVideos: 12abc"), "totalVideos: 8abc");
        assert_eq!(
            rewrite("xduration: 'a' + 'b'"),
            "xduration: '2 Hours' + 'b'"
        );
    }

    #[test]
    fn test_replacement_is_literal() {
        let spec = RuleSpec::new("price", r"price: (\d+)", "price: $1.00");
        let rule = SubstitutionRule::compile(&spec).unwrap();
        let (output, matches) = rule.apply("price: 5");
        assert_eq!(output, "price: $1.00");
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_invalid_pattern_fails_to_compile() {
        let specs = vec![RuleSpec::new("broken", "totalVideos: (", "x")];
        assert!(RuleSet::compile(&specs).is_err());
    }
}
