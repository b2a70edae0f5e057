use crate::models::*;
use crate::processing::RecordProcessor;
use crate::utils::PassportError;
use crate::validation::{FieldValidator, PresenceValidator};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which rule set decides a record's validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Required fields present and non-empty.
    Presence,
    /// Presence plus value format, range and enumeration checks.
    #[default]
    Strict,
}

pub struct BatchValidator {
    mode: ValidationMode,
    fields: FieldValidator,
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new(ValidationMode::default(), ValidationRules::default())
    }
}

impl BatchValidator {
    pub fn new(mode: ValidationMode, rules: ValidationRules) -> Self {
        BatchValidator {
            mode,
            fields: FieldValidator::new(rules),
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Number of records in `text` that pass the configured mode. Records
    /// that fail to parse count as invalid.
    pub fn count_valid(&self, text: &str) -> usize {
        RecordProcessor::parse_batch(text)
            .iter()
            .filter(|parsed| match parsed {
                Ok(passport) => self.is_valid(passport),
                Err(_) => false,
            })
            .count()
    }

    pub fn is_valid(&self, passport: &Passport) -> bool {
        match self.mode {
            ValidationMode::Presence => PresenceValidator::is_valid(passport),
            ValidationMode::Strict => self.fields.is_valid(passport),
        }
    }

    pub fn validate_text(&self, text: &str) -> BatchReport {
        let mut records = Vec::new();
        let mut valid_records = 0;
        let mut rejected_records = 0;

        for (index, parsed) in RecordProcessor::parse_batch(text).into_iter().enumerate() {
            let outcome = match parsed {
                Ok(passport) => {
                    let issues = self.issues_for(&passport);
                    let status = if issues.is_empty() {
                        valid_records += 1;
                        RecordStatus::Valid
                    } else {
                        RecordStatus::Invalid
                    };
                    debug!("record {}: {:?} ({} issues)", index, status, issues.len());
                    RecordOutcome { index, status, issues }
                }
                Err(err) => {
                    warn!("record {} rejected: {}", index, err);
                    rejected_records += 1;
                    RecordOutcome {
                        index,
                        status: RecordStatus::Rejected,
                        issues: vec![ValidationIssue {
                            field: None,
                            issue_type: ValidationIssueType::Parse,
                            message: err.to_string(),
                        }],
                    }
                }
            };
            records.push(outcome);
        }

        info!(
            "{} of {} records valid ({:?} mode), {} rejected",
            valid_records,
            records.len(),
            self.mode,
            rejected_records
        );

        BatchReport {
            total_records: records.len(),
            valid_records,
            rejected_records,
            records,
        }
    }

    pub fn validate_file(&self, path: &Path) -> Result<BatchReport, PassportError> {
        debug!("reading passport batch from {}", path.display());
        let text = fs::read_to_string(path)?;
        Ok(self.validate_text(&text))
    }

    fn issues_for(&self, passport: &Passport) -> Vec<ValidationIssue> {
        match self.mode {
            ValidationMode::Presence => PresenceValidator::validate(passport).issues,
            ValidationMode::Strict => self.fields.validate(passport).issues,
        }
    }
}
