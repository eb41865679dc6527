//! Associated-record validation checks.

use crate::error::{CheckError, Result};
use crate::traits::ValidatesAssociated;

/// Check that every listed association is validated with the parent.
pub fn check_validates_associated<M>(model: &M, associations: &[&str]) -> Result<()>
where
    M: ValidatesAssociated,
{
    let validated = model.validated_associations();
    for &association in associations {
        if !validated.iter().any(|a| a == association) {
            return Err(CheckError::AssociationNotValidated {
                association: association.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_validates_associated;
    use crate::error::CheckError;
    use crate::traits::ValidatesAssociated;

    struct Library;

    impl ValidatesAssociated for Library {
        fn validated_associations(&self) -> Vec<String> {
            vec!["books".to_string()]
        }
    }

    #[test]
    fn passes_for_validated_associations() {
        assert!(check_validates_associated(&Library, &["books"]).is_ok());
    }

    #[test]
    fn names_the_missing_association() {
        let err = check_validates_associated(&Library, &["books", "members"]).unwrap_err();
        assert_eq!(
            err,
            CheckError::AssociationNotValidated {
                association: "members".to_string()
            }
        );
    }
}
