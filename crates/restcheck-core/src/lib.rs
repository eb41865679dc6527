//! Core types for the restcheck test-helper toolkit.
//!
//! This crate provides the foundational value types shared by the rest of
//! the workspace:
//! - REST action kinds and HTTP methods
//! - Route expectations and their parameter mappings
//! - Resource-token inflection (pluralize/singularize/underscore)
//! - Error types

pub mod error;
mod action;
mod inflect;
mod route;

pub use action::ActionKind;
pub use error::{Error, Result};
pub use inflect::{pluralize, singularize, underscore};
pub use route::{HttpMethod, RouteExpectation, RouteOptions, RouteParams};
