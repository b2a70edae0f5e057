use crate::utils::PassportError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: u32,
    pub max: u32,
}

impl Range {
    pub const fn new(min: u32, max: u32) -> Self {
        Range { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Bounds and enumerations applied by `FieldValidator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub birth_year: Range,
    pub issue_year: Range,
    pub expiration_year: Range,
    pub height_cm: Range,
    pub height_in: Range,
    pub eye_colors: Vec<String>,
    pub passport_id_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules {
            birth_year: Range::new(1920, 2002),
            issue_year: Range::new(2010, 2020),
            expiration_year: Range::new(2020, 2030),
            height_cm: Range::new(150, 193),
            height_in: Range::new(59, 76),
            eye_colors: ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            passport_id_length: 9,
        }
    }
}

impl ValidationRules {
    pub fn from_json(json: &str) -> Result<Self, PassportError> {
        let rules: ValidationRules = serde_json::from_str(json)?;
        rules.check()?;
        Ok(rules)
    }

    pub fn from_file(path: &Path) -> Result<Self, PassportError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn check(&self) -> Result<(), PassportError> {
        let ranges = [
            ("birth_year", self.birth_year),
            ("issue_year", self.issue_year),
            ("expiration_year", self.expiration_year),
            ("height_cm", self.height_cm),
            ("height_in", self.height_in),
        ];
        for (name, range) in ranges {
            if range.min > range.max {
                return Err(PassportError::ConfigError(format!(
                    "{}: min {} is greater than max {}",
                    name, range.min, range.max
                )));
            }
        }
        if self.passport_id_length == 0 {
            return Err(PassportError::ConfigError(
                "passport_id_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
