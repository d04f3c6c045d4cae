//! Authorization for expense access
//!
//! Every read, update, or delete of a specific expense passes through
//! [`ensure_owner`] first. Creation is exempt: a new record has no prior
//! owner to check against, it is simply stamped with the requester's id.
//! Category listing is shared reference data and is never guarded.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, UserIdentity};

/// Allow access iff the requester owns the expense
pub fn ensure_owner(expense: &Expense, requester: &UserIdentity) -> TrackerResult<()> {
    if expense.is_owned_by(requester.id) {
        Ok(())
    } else {
        Err(TrackerError::NotOwner)
    }
}

/// Resolves the identity of the current requester
///
/// Session handling lives outside this crate; the CLI resolves the identity
/// from persisted settings, a server would resolve it from its auth layer.
pub trait IdentityResolver {
    fn current_user(&self) -> TrackerResult<UserIdentity>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Expense, Money, UserIdentity};
    use chrono::NaiveDate;

    fn expense_owned_by(owner: &UserIdentity) -> Expense {
        Expense::new(
            owner.id,
            CategoryId::new(),
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_owner_allowed() {
        let owner = UserIdentity::new("alex");
        let expense = expense_owned_by(&owner);
        assert!(ensure_owner(&expense, &owner).is_ok());
    }

    #[test]
    fn test_other_user_denied() {
        let owner = UserIdentity::new("alex");
        let stranger = UserIdentity::new("sam");
        let expense = expense_owned_by(&owner);
        assert!(matches!(
            ensure_owner(&expense, &stranger),
            Err(TrackerError::NotOwner)
        ));
    }

    #[test]
    fn test_same_id_different_username_allowed() {
        // Authorization compares ids only; the username is display data.
        let owner = UserIdentity::new("alex");
        let renamed = UserIdentity {
            id: owner.id,
            username: "alexandra".to_string(),
        };
        let expense = expense_owned_by(&owner);
        assert!(ensure_owner(&expense, &renamed).is_ok());
    }
}
