pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod batch_validator;

pub use batch_validator::{BatchValidator, ValidationMode};
