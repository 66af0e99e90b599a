//! Required-field validation

use crate::form::{Field, FormInput, ValidationErrors};

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Flags every empty field. Numeric checks happen later, when the
/// calculator parses the input.
pub fn validate(input: &FormInput) -> ValidationErrors {
    Field::ALL
        .into_iter()
        .filter(|field| input.is_empty(*field))
        .map(|field| (field, REQUIRED_MESSAGE))
        .collect()
}
