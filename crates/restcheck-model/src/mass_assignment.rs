//! Mass-assignment protection checks.

use crate::error::{CheckError, Result};
use crate::traits::AttributeIntrospect;
use tracing::debug;

/// Check that every listed attribute accepts mass assignment.
///
/// With `strict`, additionally check that every attribute NOT listed is
/// protected, so the allow-list is exhaustive.
pub fn check_mass_assignment<M>(model: &M, allowed: &[&str], strict: bool) -> Result<()>
where
    M: AttributeIntrospect,
{
    let assignable = model.mass_assignable_attributes();
    debug!(allowed = allowed.len(), strict, "checking mass assignment");

    for &attribute in allowed {
        if !assignable.iter().any(|a| a == attribute) {
            return Err(CheckError::AttributeProtected {
                attribute: attribute.to_string(),
            });
        }
    }

    if strict {
        for attribute in model.attribute_names() {
            if allowed.contains(&attribute.as_str()) {
                continue;
            }
            if assignable.iter().any(|a| *a == attribute) {
                return Err(CheckError::AttributeNotProtected { attribute });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_mass_assignment;
    use crate::error::CheckError;
    use crate::traits::AttributeIntrospect;

    struct Post;

    impl AttributeIntrospect for Post {
        fn attribute_names(&self) -> Vec<String> {
            ["title", "body", "author_id", "published_at"]
                .map(String::from)
                .to_vec()
        }

        fn mass_assignable_attributes(&self) -> Vec<String> {
            ["title", "body"].map(String::from).to_vec()
        }
    }

    #[test]
    fn listed_attributes_must_be_assignable() {
        assert!(check_mass_assignment(&Post, &["title", "body"], false).is_ok());

        let err = check_mass_assignment(&Post, &["author_id"], false).unwrap_err();
        assert_eq!(
            err,
            CheckError::AttributeProtected {
                attribute: "author_id".to_string()
            }
        );
    }

    #[test]
    fn strict_mode_requires_everything_else_protected() {
        assert!(check_mass_assignment(&Post, &["title", "body"], true).is_ok());

        // Listing only `title` leaves `body` assignable but unlisted.
        let err = check_mass_assignment(&Post, &["title"], true).unwrap_err();
        assert_eq!(
            err,
            CheckError::AttributeNotProtected {
                attribute: "body".to_string()
            }
        );
    }

    #[test]
    fn non_strict_mode_ignores_unlisted_attributes() {
        assert!(check_mass_assignment(&Post, &["title"], false).is_ok());
    }
}
