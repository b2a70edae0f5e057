use crate::models::{FieldName, Passport, PresenceValidationResult, ValidationIssue};

pub struct PresenceValidator;

impl PresenceValidator {
    pub fn validate(passport: &Passport) -> PresenceValidationResult {
        let missing_fields: Vec<FieldName> = FieldName::REQUIRED
            .iter()
            .copied()
            .filter(|field| !passport.has(*field))
            .collect();

        let issues = missing_fields
            .iter()
            .map(|field| ValidationIssue::missing(*field))
            .collect();

        PresenceValidationResult {
            is_valid: missing_fields.is_empty(),
            missing_fields,
            issues,
        }
    }

    /// All required fields present and non-empty; `cid` is ignored.
    pub fn is_valid(passport: &Passport) -> bool {
        FieldName::REQUIRED.iter().all(|field| passport.has(*field))
    }
}
