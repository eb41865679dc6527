//! Delegation checks with injected test doubles.
//!
//! Instead of stubbing the delegation target at runtime, the caller
//! supplies a factory that wires the model under test to either a
//! [`RecordingTarget`] or no target at all. The check then verifies that
//! the delegating method reaches the target exactly once, and that a
//! missing target is tolerated or rejected per the `allow_nil` setting.

use crate::error::{CheckError, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Returned by [`Delegator::invoke`] when the delegation target is missing
/// and the delegation does not allow that.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("delegation target is nil")]
pub struct NilTarget;

/// Implemented by models whose delegating methods can be invoked by name.
pub trait Delegator {
    /// Invoke the named delegating method.
    fn invoke(&self, method: &str) -> std::result::Result<(), NilTarget>;
}

/// Test double standing in for a delegation target; records every call
/// made against it.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    calls: Mutex<Vec<String>>,
}

impl RecordingTarget {
    /// Record a call to the named method.
    pub fn record(&self, method: &str) {
        self.calls.lock().push(method.to_string());
    }

    /// All recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of times the named method was called.
    #[must_use]
    pub fn times_called(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|m| *m == method).count()
    }
}

/// How the delegating method's public name is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DelegationPrefix {
    /// The public name is the method name itself.
    #[default]
    None,
    /// The public name is prefixed with the target name (`printer_print`).
    TargetName,
    /// The public name is prefixed with a custom token.
    Custom(String),
}

/// Delegation under check: target name, prefix mode, nil tolerance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationOptions {
    to: String,
    prefix: DelegationPrefix,
    allow_nil: bool,
}

impl DelegationOptions {
    /// Delegation to the named target, unprefixed, rejecting nil targets.
    #[must_use]
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            to: target.into(),
            prefix: DelegationPrefix::None,
            allow_nil: false,
        }
    }

    /// Derive the public method prefix from the target name.
    #[must_use]
    pub fn prefixed(mut self) -> Self {
        self.prefix = DelegationPrefix::TargetName;
        self
    }

    /// Use a custom public method prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = DelegationPrefix::Custom(prefix.into());
        self
    }

    /// Tolerate a missing target instead of failing.
    #[must_use]
    pub fn allow_nil(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    /// The delegation target's name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.to
    }

    /// Whether a missing target is tolerated.
    #[must_use]
    pub fn allows_nil(&self) -> bool {
        self.allow_nil
    }

    /// Public name of the delegating method for `method`.
    #[must_use]
    pub fn public_name(&self, method: &str) -> String {
        match &self.prefix {
            DelegationPrefix::None => method.to_string(),
            DelegationPrefix::TargetName => format!("{}_{method}", self.to),
            DelegationPrefix::Custom(prefix) => format!("{prefix}_{method}"),
        }
    }

    /// A derived prefix only makes sense for a plain method-name target.
    fn validate(&self) -> Result<()> {
        if self.prefix == DelegationPrefix::TargetName
            && !self
                .to
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        {
            return Err(CheckError::InvalidDelegationPrefix {
                target: self.to.clone(),
            });
        }
        Ok(())
    }
}

/// Check that every listed method is delegated to the target.
///
/// `build` constructs the model under test, wired either to the supplied
/// recording target or to no target at all.
pub fn check_delegates<M, F>(build: F, methods: &[&str], options: &DelegationOptions) -> Result<()>
where
    M: Delegator,
    F: Fn(Option<Arc<RecordingTarget>>) -> M,
{
    options.validate()?;
    debug!(
        target = options.target(),
        methods = methods.len(),
        allow_nil = options.allows_nil(),
        "checking delegation"
    );

    for &method in methods {
        let public_name = options.public_name(method);

        let target = Arc::new(RecordingTarget::default());
        let model = build(Some(Arc::clone(&target)));
        model
            .invoke(&public_name)
            .map_err(|NilTarget| CheckError::NotDelegated {
                method: method.to_string(),
                target: options.target().to_string(),
            })?;

        let count = target.times_called(method);
        if count != 1 {
            return Err(CheckError::DelegationCallCount {
                method: method.to_string(),
                target: options.target().to_string(),
                count,
            });
        }

        let detached = build(None);
        match (detached.invoke(&public_name), options.allows_nil()) {
            (Err(NilTarget), false) | (Ok(()), true) => {}
            (Ok(()), false) => {
                return Err(CheckError::DelegationAcceptsNil {
                    method: method.to_string(),
                    target: options.target().to_string(),
                });
            }
            (Err(NilTarget), true) => {
                return Err(CheckError::DelegationRejectsNil {
                    method: method.to_string(),
                    target: options.target().to_string(),
                });
            }
        }
    }

    Ok(())
}
