//! Check failure types.
//!
//! Every failure states what was expected and what was found, so a failed
//! check reads like an assertion message when bubbled up through a test.

use crate::traits::CallbackKind;
use thiserror::Error;

/// Result alias for model checks.
pub type Result<T> = std::result::Result<T, CheckError>;

/// A model check that did not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// An allowed value produced validation errors.
    #[error("expected no errors when `{attribute}` is set to {value}, found: {errors}")]
    ValueRejected {
        /// Attribute under check.
        attribute: String,
        /// Rendered value.
        value: String,
        /// Errors the model reported.
        errors: String,
    },

    /// A denied value left the model valid.
    #[error("expected the model to be invalid when `{attribute}` is set to {value}")]
    ValueAccepted {
        /// Attribute under check.
        attribute: String,
        /// Rendered value.
        value: String,
    },

    /// A denied value invalidated the model but left the attribute clean.
    #[error("expected errors on `{attribute}` when set to {value}")]
    NoAttributeErrors {
        /// Attribute under check.
        attribute: String,
        /// Rendered value.
        value: String,
    },

    /// A listed attribute is not mass-assignable.
    #[error("expected `{attribute}` to be mass-assignable, but it is protected")]
    AttributeProtected {
        /// Offending attribute.
        attribute: String,
    },

    /// A non-listed attribute is mass-assignable in strict mode.
    #[error("expected `{attribute}` to be protected from mass assignment, but it is assignable")]
    AttributeNotProtected {
        /// Offending attribute.
        attribute: String,
    },

    /// The model does not accept nested attributes for an association.
    #[error("nested attributes are not accepted for `{association}`")]
    NestedAttributesNotAccepted {
        /// Offending association.
        association: String,
    },

    /// A callback check was invoked without any method names.
    #[error("at least one callback method is required")]
    NoCallbackMethods,

    /// A method is not registered for the callback kind.
    #[error("`{method}` is not called {kind}")]
    CallbackNotRegistered {
        /// Expected callback method.
        method: String,
        /// Lifecycle stage checked.
        kind: CallbackKind,
    },

    /// An association is not validated with the parent.
    #[error("associated `{association}` is not validated")]
    AssociationNotValidated {
        /// Offending association.
        association: String,
    },

    /// A derived delegation prefix needs a plain method-name target.
    #[error("cannot derive a delegation prefix from target `{target}`")]
    InvalidDelegationPrefix {
        /// Offending target name.
        target: String,
    },

    /// Invoking the delegating method failed outright.
    #[error("`{method}` is not delegated to `{target}`")]
    NotDelegated {
        /// Delegating method.
        method: String,
        /// Delegation target.
        target: String,
    },

    /// The target saw the delegated call an unexpected number of times.
    #[error("expected `{target}` to receive `{method}` exactly once, got {count} calls")]
    DelegationCallCount {
        /// Delegated method.
        method: String,
        /// Delegation target.
        target: String,
        /// Observed call count.
        count: usize,
    },

    /// Delegation tolerated a missing target it should have rejected.
    #[error("delegation of `{method}` allows a nil `{target}`, but it should not")]
    DelegationAcceptsNil {
        /// Delegating method.
        method: String,
        /// Delegation target.
        target: String,
    },

    /// Delegation rejected a missing target it should have tolerated.
    #[error("delegation of `{method}` must allow a nil `{target}`, but it does not")]
    DelegationRejectsNil {
        /// Delegating method.
        method: String,
        /// Delegation target.
        target: String,
    },
}
