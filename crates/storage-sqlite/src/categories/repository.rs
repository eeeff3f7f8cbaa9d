use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sql_types::{Text, Timestamp};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use workschedule_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use workschedule_core::Result;

use super::model::CategoryDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::categories;

/// Insert-or-recolor keyed on the partial unique index over global names.
/// The stored name keeps the spelling of the first insert.
const UPSERT_GLOBAL_SQL: &str = "
    INSERT INTO categories (id, owner_user_id, name, color, created_at, updated_at)
    VALUES (?, NULL, ?, ?, ?, ?)
    ON CONFLICT (name) WHERE owner_user_id IS NULL
    DO UPDATE SET color = excluded.color, updated_at = excluded.updated_at
    RETURNING id, owner_user_id, name, color, created_at, updated_at
";

pub struct CategoryRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn upsert_global(&self, category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let now = Utc::now().naive_utc();
                let result_db = diesel::sql_query(UPSERT_GLOBAL_SQL)
                    .bind::<Text, _>(Uuid::now_v7().to_string())
                    .bind::<Text, _>(&category.name)
                    .bind::<Text, _>(&category.color)
                    .bind::<Timestamp, _>(now)
                    .bind::<Timestamp, _>(now)
                    .get_result::<CategoryDB>(conn)
                    .into_core()?;
                debug!("Upserted global category {} ({})", result_db.name, result_db.id);
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn delete_global(&self, category_id: &str) -> Result<usize> {
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // events.category_id is ON DELETE SET NULL
                diesel::delete(
                    categories::table
                        .filter(categories::id.eq(category_id))
                        .filter(categories::owner_user_id.is_null()),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    fn list_global(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let categories_db = categories::table
            .filter(categories::owner_user_id.is_null())
            .order((categories::name.asc(), categories::id.asc()))
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .into_core()?;
        Ok(categories_db.into_iter().map(Category::from).collect())
    }

    fn get_by_id(&self, category_id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = categories::table
            .find(category_id)
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(category_db.map(Category::from))
    }
}
