//! User repository, credential hasher and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, Registration, User};
use crate::access::Caller;
use crate::errors::Result;

/// Trait defining the contract for user persistence.
///
/// Username lookups are case-insensitive; the store enforces case-insensitive
/// uniqueness of usernames.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Inserts a user. A username collision surfaces as a unique violation.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;

    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Replaces the password hash and sets the admin flag in one write.
    /// Returns the number of updated rows.
    async fn promote_admin(&self, user_id: &str, password_hash: String) -> Result<usize>;

    /// Deletes a user and, through the store's cascade, all of their events.
    async fn delete(&self, user_id: &str) -> Result<usize>;
}

/// Password hashing collaborator.
///
/// The core only stores the opaque hash and consumes the boolean verdict.
pub trait CredentialHasherTrait: Send + Sync {
    fn hash_password(&self, plaintext: &str) -> Result<String>;

    fn verify_password(&self, plaintext: &str, password_hash: &str) -> bool;
}

/// Trait defining the contract for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a regular (non-admin) user.
    async fn register(&self, registration: Registration) -> Result<User>;

    /// Checks credentials and returns the matching user.
    fn authenticate(&self, username: &str, password: &str) -> Result<User>;

    /// Builds the caller for a session's user id, reading the stored admin flag.
    fn resolve_caller(&self, user_id: Option<&str>) -> Result<Caller>;

    /// Creates or repairs the reserved admin account. Out-of-band only.
    async fn provision_admin(&self, password: &str) -> Result<User>;

    /// Deletes the caller's own account together with their events.
    async fn delete_account(&self, caller: &Caller) -> Result<()>;
}
