//! Proptest strategies for restcheck types.

use proptest::prelude::*;
use restcheck_core::{ActionKind, RouteOptions};

/// Strategy for snake_case resource tokens (one to three words).
pub fn resource_token_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}(_[a-z]{3,10}){0,2}"
}

/// Strategy for a single REST action.
pub fn action_strategy() -> impl Strategy<Value = ActionKind> {
    prop::sample::select(ActionKind::ALL.to_vec())
}

/// Strategy for an explicit action list, possibly empty.
pub fn action_list_strategy() -> impl Strategy<Value = Vec<ActionKind>> {
    prop::collection::vec(action_strategy(), 0..=7)
}

/// Strategy for route options: either mode, with or without an override.
pub fn route_options_strategy() -> impl Strategy<Value = RouteOptions> {
    (any::<bool>(), prop::option::of(resource_token_strategy())).prop_map(
        |(singular, controller)| {
            let mut options = RouteOptions::new();
            if singular {
                options = options.singular();
            }
            if let Some(controller) = controller {
                options = options.controller(controller);
            }
            options
        },
    )
}
