//! Fixture models implementing the introspection traits.
//!
//! These stand in for host-application models in tests: a validated
//! `Widget`, a `Profile` with callbacks and nested attributes, and a
//! `PrintQueue` that delegates to an optional printer.

use restcheck_model::{
    AttributeIntrospect, AttributeValue, CallbackIntrospect, CallbackKind, Delegator,
    NestedAttributes, NilTarget, RecordingTarget, ValidatedModel, ValidatesAssociated,
};
use std::collections::BTreeMap;
use std::sync::Arc;

const WIDGET_COUNTRIES: &[&str] = &["England", "Russia"];

/// A validated model: `country` must come from a fixed list, `zipcode`
/// must be five digits. Unset attributes are not validated.
#[derive(Debug, Default)]
pub struct Widget {
    attributes: BTreeMap<String, AttributeValue>,
}

impl Widget {
    /// A widget with no attributes set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn str_attribute(&self, name: &str) -> Option<String> {
        match self.attributes.get(name) {
            Some(AttributeValue::Str(s)) => Some(s.clone()),
            Some(AttributeValue::Int(i)) => Some(i.to_string()),
            Some(AttributeValue::Nil) | None => None,
        }
    }
}

impl ValidatedModel for Widget {
    fn set_attribute(&mut self, name: &str, value: AttributeValue) {
        self.attributes.insert(name.to_string(), value);
    }

    fn errors_on(&self, name: &str) -> Vec<String> {
        match name {
            "country" => match self.str_attribute("country") {
                Some(country) if !WIDGET_COUNTRIES.contains(&country.as_str()) => {
                    vec!["is not included in the list".to_string()]
                }
                _ => Vec::new(),
            },
            "zipcode" => match self.str_attribute("zipcode") {
                Some(zipcode)
                    if zipcode.len() != 5 || !zipcode.chars().all(|c| c.is_ascii_digit()) =>
                {
                    vec!["is not a valid zipcode".to_string()]
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn is_valid(&self) -> bool {
        ["country", "zipcode"]
            .iter()
            .all(|name| self.errors_on(name).is_empty())
    }
}

impl AttributeIntrospect for Widget {
    fn attribute_names(&self) -> Vec<String> {
        ["name", "country", "zipcode", "secret_token"]
            .map(String::from)
            .to_vec()
    }

    fn mass_assignable_attributes(&self) -> Vec<String> {
        ["name", "country", "zipcode"].map(String::from).to_vec()
    }
}

/// A model with callbacks, nested attributes, and a validated association.
#[derive(Debug, Default)]
pub struct Profile;

impl NestedAttributes for Profile {
    fn accepts_nested_attributes_for(&self, association: &str) -> bool {
        matches!(association, "address" | "avatar")
    }
}

impl CallbackIntrospect for Profile {
    fn callbacks(&self, kind: CallbackKind) -> Vec<String> {
        match kind {
            CallbackKind::BeforeSave => vec!["strip_whitespace".to_string()],
            CallbackKind::AfterCreate => vec!["send_welcome_email".to_string()],
            _ => Vec::new(),
        }
    }
}

impl ValidatesAssociated for Profile {
    fn validated_associations(&self) -> Vec<String> {
        vec!["address".to_string()]
    }
}

/// Delegates `print` and `flush` to an optional printer target.
#[derive(Debug)]
pub struct PrintQueue {
    printer: Option<Arc<RecordingTarget>>,
    allow_nil: bool,
}

impl PrintQueue {
    /// A queue that requires a printer.
    #[must_use]
    pub fn wired(printer: Option<Arc<RecordingTarget>>) -> Self {
        Self {
            printer,
            allow_nil: false,
        }
    }

    /// A queue that silently drops calls when no printer is attached.
    #[must_use]
    pub fn nil_tolerant(printer: Option<Arc<RecordingTarget>>) -> Self {
        Self {
            printer,
            allow_nil: true,
        }
    }
}

impl Delegator for PrintQueue {
    fn invoke(&self, method: &str) -> Result<(), NilTarget> {
        let delegated = method.strip_prefix("printer_").unwrap_or(method);
        match &self.printer {
            Some(printer) => {
                printer.record(delegated);
                Ok(())
            }
            None if self.allow_nil => Ok(()),
            None => Err(NilTarget),
        }
    }
}
