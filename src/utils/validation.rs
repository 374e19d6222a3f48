use crate::domain::model::RuleSpec;
use crate::utils::error::{Result, RewriteError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;

    regex::Regex::new(pattern).map_err(|e| RewriteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regular expression: {}", e),
    })?;
    Ok(())
}

pub fn validate_rules(field_name: &str, rules: &[RuleSpec]) -> Result<()> {
    if rules.is_empty() {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one substitution rule is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (index, rule) in rules.iter().enumerate() {
        let prefix = format!("{}[{}]", field_name, index);
        validate_non_empty_string(&format!("{}.name", prefix), &rule.name)?;
        validate_pattern(&format!("{}.pattern", prefix), &rule.pattern)?;

        if !seen.insert(rule.name.as_str()) {
            return Err(RewriteError::InvalidConfigValueError {
                field: format!("{}.name", prefix),
                value: rule.name.clone(),
                reason: "Duplicate rule name".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::default_rules;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("target_path", "Frontend/src/data/courses.ts").is_ok());
        assert!(validate_path("target_path", "").is_err());
        assert!(validate_path("target_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_pattern() {
        assert!(validate_pattern("pattern", r"totalVideos: \d+").is_ok());
        assert!(validate_pattern("pattern", "   ").is_err());
        assert!(validate_pattern("pattern", "duration: '[^'").is_err());
    }

    #[test]
    fn test_validate_rules() {
        assert!(validate_rules("rules", &default_rules()).is_ok());
        assert!(validate_rules("rules", &[]).is_err());

        let mut duplicated = default_rules();
        duplicated[1].name = duplicated[0].name.clone();
        let err = validate_rules("rules", &duplicated).unwrap_err();
        assert!(err.to_string().contains("Duplicate rule name"));
    }
}
