use crate::utils::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Byr, // Birth Year
    Iyr, // Issue Year
    Eyr, // Expiration Year
    Hgt, // Height
    Hcl, // Hair Color
    Ecl, // Eye Color
    Pid, // Passport ID
    Cid, // Country ID
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::Byr,
        FieldName::Iyr,
        FieldName::Eyr,
        FieldName::Hgt,
        FieldName::Hcl,
        FieldName::Ecl,
        FieldName::Pid,
        FieldName::Cid,
    ];

    /// Every field except `cid`.
    pub const REQUIRED: [FieldName; 7] = [
        FieldName::Byr,
        FieldName::Iyr,
        FieldName::Eyr,
        FieldName::Hgt,
        FieldName::Hcl,
        FieldName::Ecl,
        FieldName::Pid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Byr => "byr",
            FieldName::Iyr => "iyr",
            FieldName::Eyr => "eyr",
            FieldName::Hgt => "hgt",
            FieldName::Hcl => "hcl",
            FieldName::Ecl => "ecl",
            FieldName::Pid => "pid",
            FieldName::Cid => "cid",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

/// One passport entry. Absent fields are `None`; a field written as `name:`
/// is present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passport {
    pub byr: Option<String>,
    pub iyr: Option<String>,
    pub eyr: Option<String>,
    pub hgt: Option<String>,
    pub hcl: Option<String>,
    pub ecl: Option<String>,
    pub pid: Option<String>,
    pub cid: Option<String>,
}

impl Passport {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Byr => &self.byr,
            FieldName::Iyr => &self.iyr,
            FieldName::Eyr => &self.eyr,
            FieldName::Hgt => &self.hgt,
            FieldName::Hcl => &self.hcl,
            FieldName::Ecl => &self.ecl,
            FieldName::Pid => &self.pid,
            FieldName::Cid => &self.cid,
        };
        value.as_deref()
    }

    /// Present and non-empty.
    pub fn has(&self, field: FieldName) -> bool {
        self.get(field).map_or(false, |value| !value.is_empty())
    }

    pub(crate) fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::Byr => &mut self.byr,
            FieldName::Iyr => &mut self.iyr,
            FieldName::Eyr => &mut self.eyr,
            FieldName::Hgt => &mut self.hgt,
            FieldName::Hcl => &mut self.hcl,
            FieldName::Ecl => &mut self.ecl,
            FieldName::Pid => &mut self.pid,
            FieldName::Cid => &mut self.cid,
        };
        *slot = Some(value);
    }

    pub fn field_count(&self) -> usize {
        FieldName::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Cm(u32),
    In(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssueType {
    Missing,
    Format,
    Range,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldName>,
    pub issue_type: ValidationIssueType,
    pub message: String,
}

impl ValidationIssue {
    pub fn missing(field: FieldName) -> Self {
        ValidationIssue {
            field: Some(field),
            issue_type: ValidationIssueType::Missing,
            message: format!("{} is missing", field),
        }
    }
}

#[derive(Debug)]
pub struct PresenceValidationResult {
    pub is_valid: bool,
    pub missing_fields: Vec<FieldName>,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug)]
pub struct FieldValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Valid,
    Invalid,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    pub status: RecordStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total_records: usize,
    pub valid_records: usize,
    pub rejected_records: usize,
    pub records: Vec<RecordOutcome>,
}
