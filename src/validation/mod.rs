pub mod fields;
pub mod presence;

pub use fields::FieldValidator;
pub use presence::PresenceValidator;

use crate::models::Passport;

impl Passport {
    /// Structural check: every required field is present and non-empty.
    pub fn is_valid(&self) -> bool {
        PresenceValidator::is_valid(self)
    }

    /// Presence plus the default format, range and enumeration rules.
    pub fn is_valid_strict(&self) -> bool {
        FieldValidator::default().is_valid(self)
    }
}
