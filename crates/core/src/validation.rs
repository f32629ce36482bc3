//! Entity validation helpers.
//!
//! Entities declare their field rules with `#[derive(Validate)]`; these
//! helpers run them and convert failures into [`CoreError::InvalidPayload`]
//! naming every offending field.

use validator::Validate;

use crate::error::CoreError;

/// Run an entity's declared rules.
pub fn validate_entity<T: Validate>(entity: &T) -> Result<(), CoreError> {
    entity.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        CoreError::InvalidPayload(format!("Invalid or missing fields: {}", fields.join(", ")))
    })
}

/// Validate a card color tag.
///
/// An empty string means "no color"; anything else must be `#RRGGBB`.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    if color.is_empty() {
        return Ok(());
    }

    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidPayload(format!(
            "Invalid color '{color}'. Must be empty or in #RRGGBB hex format"
        )))
    }
}
