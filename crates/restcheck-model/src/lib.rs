//! Model assertion checks for the restcheck toolkit.
//!
//! Each check verifies one convention a web-application model is expected
//! to follow: which attribute values validate, which attributes accept mass
//! assignment, which associations accept nested attributes or are validated
//! with the parent, which callbacks are registered, and which methods are
//! delegated to a collaborator.
//!
//! The checks never look a model up by name. Host test suites implement the
//! trait seams in [`traits`] for their own types and pass instances (or
//! factories) in explicitly; delegation checks inject a [`RecordingTarget`]
//! test double instead of patching methods at runtime.

pub mod traits;

mod associated;
mod callbacks;
mod delegation;
mod error;
mod mass_assignment;
mod nested;
mod values;

pub use associated::check_validates_associated;
pub use callbacks::check_callback;
pub use delegation::{
    check_delegates, DelegationOptions, DelegationPrefix, Delegator, NilTarget, RecordingTarget,
};
pub use error::{CheckError, Result};
pub use mass_assignment::check_mass_assignment;
pub use nested::check_accepts_nested_attributes;
pub use traits::{
    AttributeIntrospect, AttributeValue, CallbackIntrospect, CallbackKind, NestedAttributes,
    ValidatedModel, ValidatesAssociated,
};
pub use values::{check_allows_values, check_denies_values};
