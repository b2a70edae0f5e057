use crate::models::{
    FieldName, FieldValidationResult, Height, Passport, Range, ValidationIssue,
    ValidationIssueType, ValidationRules,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEIGHT_PATTERN: Regex = Regex::new(r"^([0-9]+)(cm|in)$").unwrap();
    static ref HAIR_COLOR_PATTERN: Regex = Regex::new(r"^#[0-9a-f]{6}$").unwrap();
}

impl Height {
    /// Parse `<digits>cm` or `<digits>in`. Returns `None` when the unit is
    /// missing or the number does not fit.
    pub fn parse(value: &str) -> Option<Height> {
        let caps = HEIGHT_PATTERN.captures(value)?;
        let amount = caps[1].parse::<u32>().ok()?;
        match &caps[2] {
            "cm" => Some(Height::Cm(amount)),
            _ => Some(Height::In(amount)),
        }
    }
}

/// Checks the content of every required field against `ValidationRules`.
pub struct FieldValidator {
    rules: ValidationRules,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(ValidationRules::default())
    }
}

impl FieldValidator {
    pub fn new(rules: ValidationRules) -> Self {
        FieldValidator { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn validate(&self, passport: &Passport) -> FieldValidationResult {
        let issues: Vec<ValidationIssue> = FieldName::REQUIRED
            .iter()
            .filter_map(|field| self.check_field(passport, *field).err())
            .collect();

        FieldValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Same verdict as `validate`, stopping at the first failing field.
    pub fn is_valid(&self, passport: &Passport) -> bool {
        FieldName::REQUIRED
            .iter()
            .all(|field| self.check_field(passport, *field).is_ok())
    }

    fn check_field(&self, passport: &Passport, field: FieldName) -> Result<(), ValidationIssue> {
        let value = match passport.get(field) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ValidationIssue::missing(field)),
        };

        match field {
            FieldName::Byr => check_year(field, value, self.rules.birth_year),
            FieldName::Iyr => check_year(field, value, self.rules.issue_year),
            FieldName::Eyr => check_year(field, value, self.rules.expiration_year),
            FieldName::Hgt => self.check_height(value),
            FieldName::Hcl => {
                if HAIR_COLOR_PATTERN.is_match(value) {
                    Ok(())
                } else {
                    Err(issue(field, ValidationIssueType::Format, format!("{:?} is not a #rrggbb colour", value)))
                }
            }
            FieldName::Ecl => {
                if self.rules.eye_colors.iter().any(|color| color == value) {
                    Ok(())
                } else {
                    Err(issue(field, ValidationIssueType::Format, format!("{:?} is not a known eye colour", value)))
                }
            }
            FieldName::Pid => {
                let length = self.rules.passport_id_length;
                if value.len() == length && value.bytes().all(|b| b.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(issue(field, ValidationIssueType::Format, format!("{:?} is not a {}-digit number", value, length)))
                }
            }
            FieldName::Cid => Ok(()),
        }
    }

    fn check_height(&self, value: &str) -> Result<(), ValidationIssue> {
        let height = Height::parse(value).ok_or_else(|| {
            issue(FieldName::Hgt, ValidationIssueType::Format, format!("{:?} is not <number>cm or <number>in", value))
        })?;

        let (amount, range, unit) = match height {
            Height::Cm(cm) => (cm, self.rules.height_cm, "cm"),
            Height::In(inches) => (inches, self.rules.height_in, "in"),
        };
        if range.contains(amount) {
            Ok(())
        } else {
            Err(out_of_range(FieldName::Hgt, amount, range, unit))
        }
    }
}

fn check_year(field: FieldName, value: &str, range: Range) -> Result<(), ValidationIssue> {
    let year = value.parse::<u32>().map_err(|_| {
        issue(field, ValidationIssueType::Parse, format!("{:?} is not a year", value))
    })?;
    if range.contains(year) {
        Ok(())
    } else {
        Err(out_of_range(field, year, range, ""))
    }
}

fn out_of_range(field: FieldName, value: u32, range: Range, unit: &str) -> ValidationIssue {
    issue(
        field,
        ValidationIssueType::Range,
        format!("{}{} is outside {}{}..={}{}", value, unit, range.min, unit, range.max, unit),
    )
}

fn issue(field: FieldName, issue_type: ValidationIssueType, message: String) -> ValidationIssue {
    ValidationIssue {
        field: Some(field),
        issue_type,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980 hcl:#623a2f";

    fn with(field: &str, value: &str) -> Passport {
        let block: Vec<String> = VALID
            .split_whitespace()
            .map(|token| {
                if token.starts_with(&format!("{}:", field)) {
                    format!("{}:{}", field, value)
                } else {
                    token.to_string()
                }
            })
            .collect();
        block.join(" ").parse().unwrap()
    }

    fn accepts(field: &str, value: &str) -> bool {
        let validator = FieldValidator::default();
        let passport = with(field, value);
        let verdict = validator.is_valid(&passport);
        assert_eq!(verdict, validator.validate(&passport).is_valid);
        verdict
    }

    #[test]
    fn baseline_record_is_valid() {
        assert!(FieldValidator::default().is_valid(&VALID.parse().unwrap()));
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(accepts("byr", "1920"));
        assert!(!accepts("byr", "1919"));
        assert!(accepts("byr", "2002"));
        assert!(!accepts("byr", "2003"));

        assert!(accepts("iyr", "2010"));
        assert!(!accepts("iyr", "2009"));
        assert!(accepts("iyr", "2020"));
        assert!(!accepts("iyr", "2021"));

        assert!(accepts("eyr", "2020"));
        assert!(!accepts("eyr", "2019"));
        assert!(accepts("eyr", "2030"));
        assert!(!accepts("eyr", "2031"));
    }

    #[test]
    fn non_numeric_year_is_invalid_not_fatal() {
        assert!(!accepts("byr", "abc"));
        let result = FieldValidator::default().validate(&with("byr", "abc"));
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Parse);
    }

    #[test]
    fn height_needs_unit_and_range() {
        assert!(accepts("hgt", "150cm"));
        assert!(accepts("hgt", "193cm"));
        assert!(!accepts("hgt", "194cm"));
        assert!(accepts("hgt", "59in"));
        assert!(accepts("hgt", "76in"));
        assert!(!accepts("hgt", "77in"));
        assert!(!accepts("hgt", "190"));
        assert!(!accepts("hgt", "cm"));
        assert!(!accepts("hgt", "99999999999999999999cm"));
    }

    #[test]
    fn height_parse_reads_unit() {
        assert_eq!(Height::parse("172cm"), Some(Height::Cm(172)));
        assert_eq!(Height::parse("60in"), Some(Height::In(60)));
        assert_eq!(Height::parse("60 in"), None);
    }

    #[test]
    fn hair_color_is_lowercase_hex() {
        assert!(accepts("hcl", "#123abc"));
        assert!(!accepts("hcl", "#123abz"));
        assert!(!accepts("hcl", "123abc"));
        assert!(!accepts("hcl", "#123ABC"));
        assert!(!accepts("hcl", "#123abcd"));
    }

    #[test]
    fn eye_color_is_enumerated() {
        for color in ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"] {
            assert!(accepts("ecl", color));
        }
        assert!(!accepts("ecl", "wat"));
    }

    #[test]
    fn passport_id_is_nine_digits() {
        assert!(accepts("pid", "000000001"));
        assert!(!accepts("pid", "0123456789"));
        assert!(!accepts("pid", "01234567a"));
    }

    #[test]
    fn present_but_wrong_record_collects_every_issue() {
        let passport: Passport = "eyr:1972 cid:100 hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926"
            .parse()
            .unwrap();
        let result = FieldValidator::default().validate(&passport);
        assert!(!result.is_valid);
        let fields: Vec<_> = result.issues.iter().filter_map(|i| i.field).collect();
        assert_eq!(fields, vec![FieldName::Eyr, FieldName::Hgt, FieldName::Pid]);
    }

    #[test]
    fn missing_field_fails_before_any_format_check() {
        let passport: Passport = VALID.replace("ecl:grn", "").parse().unwrap();
        let result = FieldValidator::default().validate(&passport);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Missing);
    }

    #[test]
    fn custom_rules_change_the_verdict() {
        let mut rules = ValidationRules::default();
        rules.birth_year = Range::new(1900, 1910);
        let validator = FieldValidator::new(rules);
        assert!(!validator.is_valid(&VALID.parse().unwrap()));
        assert!(validator.is_valid(&with("byr", "1905")));
    }
}
