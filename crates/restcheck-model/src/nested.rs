//! Nested-attribute support checks.

use crate::error::{CheckError, Result};
use crate::traits::NestedAttributes;

/// Check that the model accepts nested attributes for every association.
pub fn check_accepts_nested_attributes<M>(model: &M, associations: &[&str]) -> Result<()>
where
    M: NestedAttributes,
{
    for &association in associations {
        if !model.accepts_nested_attributes_for(association) {
            return Err(CheckError::NestedAttributesNotAccepted {
                association: association.to_string(),
            });
        }
    }
    Ok(())
}
