use log::{debug, info};
use std::sync::Arc;

use super::users_model::{NewUser, Registration, User};
use super::users_traits::{CredentialHasherTrait, UserRepositoryTrait, UserServiceTrait};
use crate::access::{authorize, Action, Caller};
use crate::constants::{MIN_PASSWORD_LENGTH, RESERVED_ADMIN_USERNAME};
use crate::errors::{DatabaseError, Error, Result, ValidationError};

/// Service for registration, login and caller resolution
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn CredentialHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn CredentialHasherTrait>,
    ) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, registration: Registration) -> Result<User> {
        let username = registration.validate()?;

        if self.repository.find_by_username(&username)?.is_some() {
            return Err(ValidationError::UsernameTaken.into());
        }

        let password_hash = self.hasher.hash_password(&registration.password)?;
        let new_user = NewUser {
            username,
            password_hash,
            is_admin: false,
        };

        // A concurrent registration can still win the race; the unique index decides.
        let user = self
            .repository
            .create(new_user)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::UniqueViolation(_)) => {
                    Error::Validation(ValidationError::UsernameTaken)
                }
                other => other,
            })?;

        debug!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        match self.repository.find_by_username(username)? {
            Some(user) if self.hasher.verify_password(password, &user.password_hash) => Ok(user),
            _ => Err(Error::InvalidCredentials),
        }
    }

    fn resolve_caller(&self, user_id: Option<&str>) -> Result<Caller> {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            return Ok(Caller::Anonymous);
        };

        Ok(match self.repository.get_by_id(user_id)? {
            Some(user) => Caller::user(user.id, user.is_admin),
            None => {
                debug!("Session refers to unknown user {}; treating as anonymous", user_id);
                Caller::Anonymous
            }
        })
    }

    async fn provision_admin(&self, password: &str) -> Result<User> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }
        let password_hash = self.hasher.hash_password(password)?;

        if let Some(existing) = self.repository.find_by_username(RESERVED_ADMIN_USERNAME)? {
            self.repository
                .promote_admin(&existing.id, password_hash.clone())
                .await?;
            info!("Reset credentials of admin account {}", existing.id);
            return Ok(User {
                password_hash,
                is_admin: true,
                ..existing
            });
        }

        let user = self
            .repository
            .create(NewUser {
                username: RESERVED_ADMIN_USERNAME.to_string(),
                password_hash,
                is_admin: true,
            })
            .await?;
        info!("Created admin account {}", user.id);
        Ok(user)
    }

    async fn delete_account(&self, caller: &Caller) -> Result<()> {
        let identity = authorize(caller, Action::ManageOwnAccount)?;
        let deleted = self.repository.delete(&identity.user_id).await?;
        if deleted == 0 {
            return Err(Error::MissingOrForbidden);
        }
        info!("Deleted account {}", identity.user_id);
        Ok(())
    }
}
