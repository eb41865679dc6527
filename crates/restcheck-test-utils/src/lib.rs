//! Testing utilities for the restcheck workspace.
//!
//! - [`fixtures`] - ready-made models implementing the introspection traits
//! - [`strategies`] - proptest strategies for core types
//! - [`assertions`] - route-expectation assertion helpers

pub mod assertions;
pub mod fixtures;
pub mod strategies;

pub use assertions::{assert_covers_rest_actions, assert_member_ids, assert_paths_resolved};
pub use fixtures::{PrintQueue, Profile, Widget};

// Re-export for convenience in downstream test modules.
pub use pretty_assertions;
