//! Callback-registration checks.

use crate::error::{CheckError, Result};
use crate::traits::{CallbackIntrospect, CallbackKind};

/// Check that every listed method is registered for the callback kind.
///
/// An empty method list is a caller error and fails fast.
pub fn check_callback<M>(model: &M, methods: &[&str], kind: CallbackKind) -> Result<()>
where
    M: CallbackIntrospect,
{
    if methods.is_empty() {
        return Err(CheckError::NoCallbackMethods);
    }

    let registered = model.callbacks(kind);
    for &method in methods {
        if !registered.iter().any(|m| m == method) {
            return Err(CheckError::CallbackNotRegistered {
                method: method.to_string(),
                kind,
            });
        }
    }

    Ok(())
}
