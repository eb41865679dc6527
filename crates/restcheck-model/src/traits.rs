//! Trait seams for model introspection.
//!
//! These traits are the boundary between the checks and the host
//! application: attribute enumeration, validation, nested-attribute
//! support, callback registration, and associated-record validation are
//! all supplied by the model under test, never discovered by reflection.

use std::fmt;

/// A value assigned to a model attribute during a validity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// No value (the attribute is cleared).
    Nil,
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
}

impl AttributeValue {
    /// Shorthand for [`AttributeValue::Nil`].
    #[must_use]
    pub fn nil() -> Self {
        Self::Nil
    }
}

impl fmt::Display for AttributeValue {
    /// Failure-message rendering: `nil` bare, everything else quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Int(i) => write!(f, "\"{i}\""),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Attribute enumeration for mass-assignment checks.
pub trait AttributeIntrospect {
    /// All attribute names of the model.
    fn attribute_names(&self) -> Vec<String>;

    /// Attribute names that accept mass assignment.
    fn mass_assignable_attributes(&self) -> Vec<String>;
}

/// A model whose attribute values can be set and validated.
pub trait ValidatedModel {
    /// Assign a value to the named attribute.
    fn set_attribute(&mut self, name: &str, value: AttributeValue);

    /// Validation errors recorded against the named attribute.
    fn errors_on(&self, name: &str) -> Vec<String>;

    /// Whether the model as a whole currently passes validation.
    fn is_valid(&self) -> bool;
}

/// Nested-attribute support introspection.
pub trait NestedAttributes {
    /// Whether the model accepts nested attributes for the association.
    fn accepts_nested_attributes_for(&self, association: &str) -> bool;
}

/// Lifecycle stage a callback can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Before the model is saved.
    BeforeSave,
    /// After the model is saved.
    AfterSave,
    /// Before the model is first created.
    BeforeCreate,
    /// After the model is first created.
    AfterCreate,
    /// Before an existing model is updated.
    BeforeUpdate,
    /// After an existing model is updated.
    AfterUpdate,
    /// Before the model is destroyed.
    BeforeDestroy,
    /// After the model is destroyed.
    AfterDestroy,
    /// After the model is instantiated.
    AfterInitialize,
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BeforeSave => "before save",
            Self::AfterSave => "after save",
            Self::BeforeCreate => "before create",
            Self::AfterCreate => "after create",
            Self::BeforeUpdate => "before update",
            Self::AfterUpdate => "after update",
            Self::BeforeDestroy => "before destroy",
            Self::AfterDestroy => "after destroy",
            Self::AfterInitialize => "after initialize",
        };
        f.write_str(name)
    }
}

/// Callback registration introspection.
pub trait CallbackIntrospect {
    /// Method names registered for the given callback kind.
    fn callbacks(&self, kind: CallbackKind) -> Vec<String>;
}

/// Associated-record validation introspection.
pub trait ValidatesAssociated {
    /// Associations whose records are validated together with the parent.
    fn validated_associations(&self) -> Vec<String>;
}
