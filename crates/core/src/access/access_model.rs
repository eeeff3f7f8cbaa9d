//! Caller identity models.

use serde::{Deserialize, Serialize};

/// An authenticated user as seen by the access policy.
///
/// `is_admin` is copied from the persisted user record when the caller is
/// resolved; it is never derived from the username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub is_admin: bool,
}

/// Whoever is issuing the current request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Caller {
    #[default]
    Anonymous,
    User(Identity),
}

impl Caller {
    pub fn user(user_id: impl Into<String>, is_admin: bool) -> Self {
        Caller::User(Identity {
            user_id: user_id.into(),
            is_admin,
        })
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Caller::Anonymous => None,
            Caller::User(identity) => Some(identity),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|i| i.is_admin)
    }
}

/// Operations gated by the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create, read, update or delete the caller's own events.
    ManageOwnEvents,
    /// List the shared categories.
    ReadCategories,
    /// Create, recolor or delete shared categories.
    ManageCategories,
    /// Remove the caller's own account.
    ManageOwnAccount,
}
