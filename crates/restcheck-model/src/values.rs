//! Attribute-value validity checks.

use crate::error::{CheckError, Result};
use crate::traits::{AttributeValue, ValidatedModel};
use tracing::debug;

/// Check that the model accepts every listed value for the attribute.
///
/// Each value is assigned to a fresh instance from `build`; the check
/// fails on the first value that produces errors on the attribute.
pub fn check_allows_values<M, F>(build: F, attribute: &str, values: &[AttributeValue]) -> Result<()>
where
    M: ValidatedModel,
    F: Fn() -> M,
{
    debug!(attribute, values = values.len(), "checking allowed values");

    for value in values {
        let mut instance = build();
        instance.set_attribute(attribute, value.clone());

        let errors = instance.errors_on(attribute);
        if !errors.is_empty() {
            return Err(CheckError::ValueRejected {
                attribute: attribute.to_string(),
                value: value.to_string(),
                errors: errors.join("; "),
            });
        }
    }

    Ok(())
}

/// Check that every listed value invalidates the model and puts errors on
/// the attribute.
pub fn check_denies_values<M, F>(build: F, attribute: &str, values: &[AttributeValue]) -> Result<()>
where
    M: ValidatedModel,
    F: Fn() -> M,
{
    debug!(attribute, values = values.len(), "checking denied values");

    for value in values {
        let mut instance = build();
        instance.set_attribute(attribute, value.clone());

        if instance.is_valid() {
            return Err(CheckError::ValueAccepted {
                attribute: attribute.to_string(),
                value: value.to_string(),
            });
        }
        if instance.errors_on(attribute).is_empty() {
            return Err(CheckError::NoAttributeErrors {
                attribute: attribute.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
