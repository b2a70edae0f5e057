use crate::models::{FieldName, Passport};
use crate::utils::ParseError;
use std::str::FromStr;

/// Turns raw batch text into `Passport` records.
pub struct RecordProcessor;

impl RecordProcessor {
    /// Split batch text into raw record blocks on blank lines, in input order.
    ///
    /// Trailing whitespace at the end of the input does not produce an extra
    /// block, but blank blocks between records are kept and parse to empty
    /// passports.
    pub fn split_records(text: &str) -> Vec<String> {
        let normalized = text.replace("\r\n", "\n");
        let trimmed = normalized.trim_end();
        if trimmed.trim_start().is_empty() {
            return Vec::new();
        }

        trimmed.split("\n\n").map(|block| block.to_string()).collect()
    }

    /// Split one `name:value` token on its first colon.
    pub fn parse_field(token: &str) -> Result<(FieldName, String), ParseError> {
        let (name, value) = token
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidFieldSyntax(token.to_string()))?;
        let field = name.parse::<FieldName>()?;
        Ok((field, value.to_string()))
    }

    /// Build a passport from one record block. A repeated field keeps its
    /// last value.
    pub fn parse_record(block: &str) -> Result<Passport, ParseError> {
        let mut passport = Passport::default();
        for token in block.split_whitespace() {
            let (field, value) = Self::parse_field(token)?;
            passport.set(field, value);
        }
        Ok(passport)
    }

    /// Parse every block, keeping per-record failures alongside successes.
    pub fn parse_batch(text: &str) -> Vec<Result<Passport, ParseError>> {
        Self::split_records(text)
            .iter()
            .map(|block| Self::parse_record(block))
            .collect()
    }
}

impl FromStr for Passport {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordProcessor::parse_record(s)
    }
}
