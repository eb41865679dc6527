//! REST action kinds.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven canonical REST controller actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// List the collection.
    Index,
    /// Show a single member.
    Show,
    /// Render the creation form.
    New,
    /// Create a new member.
    Create,
    /// Render the edit form.
    Edit,
    /// Update a member.
    Update,
    /// Delete a member.
    Destroy,
}

impl ActionKind {
    /// All REST actions in canonical route order.
    pub const ALL: [Self; 7] = [
        Self::Index,
        Self::Show,
        Self::New,
        Self::Create,
        Self::Edit,
        Self::Update,
        Self::Destroy,
    ];

    /// Lowercase action name as it appears in route parameters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Show => "show",
            Self::New => "new",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }

    /// Whether the action addresses a single member of a collection.
    ///
    /// Member actions carry an `id` route parameter in plural mode.
    #[must_use]
    pub fn is_member(self) -> bool {
        matches!(self, Self::Show | Self::Edit | Self::Update | Self::Destroy)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(Self::Index),
            "show" => Ok(Self::Show),
            "new" => Ok(Self::New),
            "create" => Ok(Self::Create),
            "edit" => Ok(Self::Edit),
            "update" => Ok(Self::Update),
            "destroy" => Ok(Self::Destroy),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ActionKind;
    use crate::error::Error;
    use test_case::test_case;

    #[test_case("index", ActionKind::Index)]
    #[test_case("show", ActionKind::Show)]
    #[test_case("new", ActionKind::New)]
    #[test_case("create", ActionKind::Create)]
    #[test_case("edit", ActionKind::Edit)]
    #[test_case("update", ActionKind::Update)]
    #[test_case("destroy", ActionKind::Destroy)]
    fn parses_known_actions(token: &str, expected: ActionKind) {
        assert_eq!(token.parse::<ActionKind>().unwrap(), expected);
        assert_eq!(expected.as_str(), token);
    }

    #[test]
    fn rejects_unknown_actions() {
        let err = "delete".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, Error::UnknownAction("delete".to_string()));
    }

    #[test]
    fn canonical_order_covers_all_actions() {
        assert_eq!(ActionKind::ALL.len(), 7);
        assert_eq!(ActionKind::ALL[0], ActionKind::Index);
        assert_eq!(ActionKind::ALL[6], ActionKind::Destroy);
    }

    #[test]
    fn member_actions_are_show_edit_update_destroy() {
        let members: Vec<_> = ActionKind::ALL
            .iter()
            .filter(|a| a.is_member())
            .copied()
            .collect();
        assert_eq!(
            members,
            vec![
                ActionKind::Show,
                ActionKind::Edit,
                ActionKind::Update,
                ActionKind::Destroy
            ]
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActionKind::Destroy).unwrap(),
            "\"destroy\""
        );
    }
}
