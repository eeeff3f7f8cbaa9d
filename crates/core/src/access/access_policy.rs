//! Authorization rules for every event and category operation.

use log::warn;

use super::access_model::{Action, Caller, Identity};
use crate::errors::{Error, Result};

/// Checks whether `caller` may perform `action`.
///
/// Anonymous callers are rejected with [`Error::Unauthenticated`] for every
/// action. Authenticated users may manage their own events and account and
/// read categories; only admins may manage categories.
pub fn authorize(caller: &Caller, action: Action) -> Result<&Identity> {
    let Some(identity) = caller.identity() else {
        return Err(Error::Unauthenticated);
    };

    match action {
        Action::ManageOwnEvents | Action::ReadCategories | Action::ManageOwnAccount => {
            Ok(identity)
        }
        Action::ManageCategories if identity.is_admin => Ok(identity),
        Action::ManageCategories => {
            warn!(
                "User {} attempted a category mutation without admin rights",
                identity.user_id
            );
            Err(Error::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const ALL_ACTIONS: [Action; 4] = [
        Action::ManageOwnEvents,
        Action::ReadCategories,
        Action::ManageCategories,
        Action::ManageOwnAccount,
    ];

    #[test]
    fn test_anonymous_is_rejected_everywhere() {
        for action in ALL_ACTIONS {
            let err = authorize(&Caller::Anonymous, action).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        }
    }

    #[test]
    fn test_regular_user_cannot_manage_categories() {
        let caller = Caller::user("u1", false);
        assert!(authorize(&caller, Action::ManageOwnEvents).is_ok());
        assert!(authorize(&caller, Action::ReadCategories).is_ok());
        assert!(authorize(&caller, Action::ManageOwnAccount).is_ok());
        let err = authorize(&caller, Action::ManageCategories).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_admin_can_do_everything() {
        let caller = Caller::user("root", true);
        for action in ALL_ACTIONS {
            let identity = authorize(&caller, action).unwrap();
            assert_eq!(identity.user_id, "root");
        }
    }
}
