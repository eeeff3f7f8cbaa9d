use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use workschedule_core::users::{NewUser, User, UserRepositoryTrait};
use workschedule_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db =
                    NewUserDB::new(Uuid::now_v7().to_string(), new_user, Utc::now().naive_utc());

                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(User::from(result_db))
            })
            .await
    }

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(user_db.map(User::from))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        // The column is declared COLLATE NOCASE, so this match ignores case.
        let user_db = users::table
            .filter(users::username.eq(username))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(user_db.map(User::from))
    }

    async fn promote_admin(&self, user_id: &str, password_hash: String) -> Result<usize> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::update(users::table.find(user_id))
                    .set((
                        users::password_hash.eq(password_hash),
                        users::is_admin.eq(true),
                    ))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete(&self, user_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(users::table.find(user_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use tempfile::tempdir;
    use workschedule_core::errors::{DatabaseError, Error};

    async fn create_test_repository() -> (UserRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        (UserRepository::new(pool, writer), temp_dir)
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let (repo, _temp_dir) = create_test_repository().await;
        let user = repo.create(new_user("alice")).await.unwrap();
        assert!(!user.is_admin);

        let by_id = repo.get_by_id(&user.id).unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = repo.find_by_username("ALICE").unwrap().unwrap();
        assert_eq!(by_name.id, user.id);

        assert!(repo.get_by_id("missing").unwrap().is_none());
        assert!(repo.find_by_username("bob").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_unique_ignoring_case() {
        let (repo, _temp_dir) = create_test_repository().await;
        repo.create(new_user("alice")).await.unwrap();

        let err = repo.create(new_user("Alice")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_promote_admin_sets_hash_and_flag_together() {
        let (repo, _temp_dir) = create_test_repository().await;
        let user = repo.create(new_user("carol")).await.unwrap();
        assert!(!user.is_admin);

        assert_eq!(
            repo.promote_admin(&user.id, "new-hash".to_string())
                .await
                .unwrap(),
            1
        );
        let stored = repo.get_by_id(&user.id).unwrap().unwrap();
        assert!(stored.is_admin);
        assert_eq!(stored.password_hash, "new-hash");

        assert_eq!(
            repo.promote_admin("missing", "other".to_string())
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let (repo, _temp_dir) = create_test_repository().await;
        let user = repo.create(new_user("dave")).await.unwrap();
        assert_eq!(repo.delete(&user.id).await.unwrap(), 1);
        assert_eq!(repo.delete(&user.id).await.unwrap(), 0);
        assert!(repo.get_by_id(&user.id).unwrap().is_none());
    }
}
