//! Route expectation construction.

use restcheck_core::{
    pluralize, singularize, underscore, ActionKind, Error, HttpMethod, Result, RouteExpectation,
    RouteOptions, RouteParams,
};
use tracing::debug;

/// Builds the expected routes for a RESTful resource.
///
/// The resource token is supplied explicitly by the caller, already stripped
/// of any test-suffix convention; it is case-normalized here. With no
/// explicit action list the full REST set is used, minus `index` in
/// singular mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteExpectationBuilder {
    resource: String,
    actions: Vec<ActionKind>,
    options: RouteOptions,
}

impl RouteExpectationBuilder {
    /// Start building expectations for the given resource token.
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            actions: Vec::new(),
            options: RouteOptions::new(),
        }
    }

    /// Restrict the build to an explicit list of actions, in caller order.
    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = ActionKind>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Restrict the build to actions named by string tokens.
    ///
    /// Unknown tokens are rejected eagerly rather than silently skipped.
    pub fn actions_from_str<'a>(
        mut self,
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        for token in tokens {
            self.actions.push(token.parse()?);
        }
        Ok(self)
    }

    /// Apply route options.
    #[must_use]
    pub fn options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Produce one expectation per action, preserving order.
    pub fn build(&self) -> Result<Vec<RouteExpectation>> {
        let resource = underscore(&self.resource);
        if resource.is_empty() {
            return Err(Error::EmptyResource);
        }

        let plural = !self.options.is_singular();
        let segment = match self.options.controller_override() {
            Some(name) => underscore(name),
            None if plural => pluralize(&resource),
            None => singularize(&resource),
        };

        let actions: Vec<ActionKind> = if self.actions.is_empty() {
            ActionKind::ALL
                .into_iter()
                .filter(|action| plural || *action != ActionKind::Index)
                .collect()
        } else {
            self.actions.clone()
        };

        debug!(
            resource = %resource,
            segment = %segment,
            plural,
            actions = actions.len(),
            "building route expectations"
        );

        Ok(actions
            .into_iter()
            .map(|action| expectation_for(&resource, &segment, action, plural))
            .collect())
    }
}

/// Expected routes for the default action set of a resource.
pub fn rest_routes(resource: &str, options: RouteOptions) -> Result<Vec<RouteExpectation>> {
    RouteExpectationBuilder::new(resource)
        .options(options)
        .build()
}

fn expectation_for(
    resource: &str,
    segment: &str,
    action: ActionKind,
    plural: bool,
) -> RouteExpectation {
    let member = format!("/{segment}{}", if plural { "/1" } else { "" });
    let (method, path) = match action {
        ActionKind::Index => (HttpMethod::Get, format!("/{segment}")),
        ActionKind::Show => (HttpMethod::Get, member),
        ActionKind::New => (HttpMethod::Get, format!("/{segment}/new")),
        ActionKind::Create => (HttpMethod::Post, format!("/{segment}")),
        ActionKind::Edit => (HttpMethod::Get, format!("{member}/edit")),
        ActionKind::Update => (HttpMethod::Put, member),
        ActionKind::Destroy => (HttpMethod::Delete, member),
    };

    let id = (plural && action.is_member()).then_some(1);

    RouteExpectation {
        method,
        path,
        params: RouteParams {
            controller: resource.to_string(),
            action,
            id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{rest_routes, RouteExpectationBuilder};
    use pretty_assertions::assert_eq;
    use restcheck_core::{ActionKind, Error, HttpMethod, RouteOptions};
    use test_case::test_case;

    #[test]
    fn default_plural_build_covers_all_seven_actions_in_order() {
        let routes = RouteExpectationBuilder::new("widget").build().unwrap();

        let actions: Vec<ActionKind> = routes.iter().map(|r| r.params.action).collect();
        assert_eq!(actions, ActionKind::ALL.to_vec());

        let rendered: Vec<String> = routes.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "GET /widgets => widget#index",
                "GET /widgets/1 => widget#show (id: 1)",
                "GET /widgets/new => widget#new",
                "POST /widgets => widget#create",
                "GET /widgets/1/edit => widget#edit (id: 1)",
                "PUT /widgets/1 => widget#update (id: 1)",
                "DELETE /widgets/1 => widget#destroy (id: 1)",
            ]
        );
    }

    #[test]
    fn default_singular_build_skips_index_and_ids() {
        let routes = rest_routes("profile", RouteOptions::new().singular()).unwrap();

        assert_eq!(routes.len(), 6);
        assert!(routes.iter().all(|r| r.params.action != ActionKind::Index));
        assert!(routes.iter().all(|r| r.params.id.is_none()));

        let rendered: Vec<String> = routes.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "GET /profile => profile#show",
                "GET /profile/new => profile#new",
                "POST /profile => profile#create",
                "GET /profile/edit => profile#edit",
                "PUT /profile => profile#update",
                "DELETE /profile => profile#destroy",
            ]
        );
    }

    #[test_case(ActionKind::Index, HttpMethod::Get, "/widgets", None)]
    #[test_case(ActionKind::Show, HttpMethod::Get, "/widgets/1", Some(1))]
    #[test_case(ActionKind::New, HttpMethod::Get, "/widgets/new", None)]
    #[test_case(ActionKind::Create, HttpMethod::Post, "/widgets", None)]
    #[test_case(ActionKind::Edit, HttpMethod::Get, "/widgets/1/edit", Some(1))]
    #[test_case(ActionKind::Update, HttpMethod::Put, "/widgets/1", Some(1))]
    #[test_case(ActionKind::Destroy, HttpMethod::Delete, "/widgets/1", Some(1))]
    fn plural_action_table(action: ActionKind, method: HttpMethod, path: &str, id: Option<u64>) {
        let routes = RouteExpectationBuilder::new("widget")
            .actions([action])
            .build()
            .unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, method);
        assert_eq!(routes[0].path, path);
        assert_eq!(routes[0].params.controller, "widget");
        assert_eq!(routes[0].params.action, action);
        assert_eq!(routes[0].params.id, id);
    }

    #[test_case(ActionKind::Show, HttpMethod::Get, "/profile")]
    #[test_case(ActionKind::New, HttpMethod::Get, "/profile/new")]
    #[test_case(ActionKind::Create, HttpMethod::Post, "/profile")]
    #[test_case(ActionKind::Edit, HttpMethod::Get, "/profile/edit")]
    #[test_case(ActionKind::Update, HttpMethod::Put, "/profile")]
    #[test_case(ActionKind::Destroy, HttpMethod::Delete, "/profile")]
    fn singular_action_table(action: ActionKind, method: HttpMethod, path: &str) {
        let routes = RouteExpectationBuilder::new("profile")
            .options(RouteOptions::new().singular())
            .actions([action])
            .build()
            .unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, method);
        assert_eq!(routes[0].path, path);
        assert_eq!(routes[0].params.id, None);
    }

    #[test]
    fn explicit_index_in_singular_mode_is_honored() {
        // The default set drops index in singular mode, but an explicit
        // request still builds a collection route without an id.
        let routes = RouteExpectationBuilder::new("profile")
            .options(RouteOptions::new().singular())
            .actions([ActionKind::Index])
            .build()
            .unwrap();

        assert_eq!(routes[0].path, "/profile");
        assert_eq!(routes[0].params.id, None);
    }

    #[test]
    fn controller_override_wins_over_inflection() {
        let routes = RouteExpectationBuilder::new("person")
            .options(RouteOptions::new().controller("Folks"))
            .actions([ActionKind::Index, ActionKind::Show])
            .build()
            .unwrap();

        assert_eq!(routes[0].path, "/folks");
        assert_eq!(routes[1].path, "/folks/1");
        // Params still dispatch to the resource's own controller token.
        assert_eq!(routes[0].params.controller, "person");
    }

    #[test]
    fn override_applies_in_singular_mode_too() {
        let routes = RouteExpectationBuilder::new("account")
            .options(RouteOptions::new().singular().controller("MyAccount"))
            .build()
            .unwrap();

        assert!(routes.iter().all(|r| r.path.starts_with("/my_account")));
    }

    #[test]
    fn create_uses_the_resolved_segment() {
        let routes = RouteExpectationBuilder::new("category")
            .actions([ActionKind::Create])
            .build()
            .unwrap();

        assert_eq!(routes[0].path, "/categories");
    }

    #[test]
    fn camel_case_resource_tokens_are_normalized() {
        let routes = RouteExpectationBuilder::new("AdminUser")
            .actions([ActionKind::Index])
            .build()
            .unwrap();

        assert_eq!(routes[0].path, "/admin_users");
        assert_eq!(routes[0].params.controller, "admin_user");
    }

    #[test]
    fn caller_action_order_is_preserved() {
        let routes = RouteExpectationBuilder::new("widget")
            .actions([ActionKind::Destroy, ActionKind::New, ActionKind::Show])
            .build()
            .unwrap();

        let actions: Vec<ActionKind> = routes.iter().map(|r| r.params.action).collect();
        assert_eq!(
            actions,
            vec![ActionKind::Destroy, ActionKind::New, ActionKind::Show]
        );
    }

    #[test]
    fn string_action_tokens_parse_or_fail_fast() {
        let routes = RouteExpectationBuilder::new("widget")
            .actions_from_str(["show", "update"])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(routes.len(), 2);

        let err = RouteExpectationBuilder::new("widget")
            .actions_from_str(["shwo"])
            .unwrap_err();
        assert_eq!(err, Error::UnknownAction("shwo".to_string()));
    }

    #[test]
    fn empty_resource_token_is_rejected() {
        let err = RouteExpectationBuilder::new("").build().unwrap_err();
        assert_eq!(err, Error::EmptyResource);
    }

    #[test]
    fn build_is_deterministic() {
        let builder = RouteExpectationBuilder::new("widget");
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }
}
