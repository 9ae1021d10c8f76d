// ChefRepository: MySQL access for the CHEF table
//
// Implements:
// - List all chefs (ordered by id) and a paged, sortable variant
// - Read chef by id or exact username
// - Create chef (returns generated id)
// - Update / delete chef by id
// - Username search, plain and paged
//
// Paging is done by the database (LIMIT/OFFSET) with a separate COUNT(*)
// for the totals.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Page, PageOptions, Result};
use crate::modules::chefs::models::Chef;

const CHEF_COLUMNS: &str = "id, username, email, password, is_admin";

/// Persistence operations for chefs
#[async_trait]
pub trait ChefRepository: Send + Sync {
    /// All chefs ordered by id
    async fn get_all_chefs(&self) -> Result<Vec<Chef>>;

    /// One page of chefs, sorted as requested
    async fn get_all_chefs_paged(&self, options: &PageOptions) -> Result<Page<Chef>>;

    /// Chef by id, `None` when no row matches
    async fn get_chef_by_id(&self, id: i32) -> Result<Option<Chef>>;

    /// Chef whose username equals `username`, `None` when no row matches
    async fn get_chef_by_username(&self, username: &str) -> Result<Option<Chef>>;

    /// Insert a chef and return the generated id; `chef.id` is ignored
    async fn create_chef(&self, chef: &Chef) -> Result<i32>;

    /// Overwrite every column of the row identified by `chef.id`
    async fn update_chef(&self, chef: &Chef) -> Result<()>;

    /// Remove the row identified by `chef.id`
    async fn delete_chef(&self, chef: &Chef) -> Result<()>;

    /// Chefs whose username contains `term`, ordered by id
    async fn search_chefs_by_term(&self, term: &str) -> Result<Vec<Chef>>;

    /// One page of the username search
    async fn search_chefs_by_term_paged(
        &self,
        term: &str,
        options: &PageOptions,
    ) -> Result<Page<Chef>>;
}

/// Repository for chef database operations
#[derive(Clone)]
pub struct MySqlChefRepository {
    pool: MySqlPool,
}

impl MySqlChefRepository {
    /// Create a new chef repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let found: Option<i32> = sqlx::query_scalar("SELECT id FROM CHEF WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl ChefRepository for MySqlChefRepository {
    async fn get_all_chefs(&self) -> Result<Vec<Chef>> {
        let chefs = sqlx::query_as::<_, Chef>(&format!(
            "SELECT {} FROM CHEF ORDER BY id",
            CHEF_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(chefs)
    }

    async fn get_all_chefs_paged(&self, options: &PageOptions) -> Result<Page<Chef>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM CHEF")
            .fetch_one(&self.pool)
            .await?;

        // order_by_clause only ever renders whitelisted column names
        let chefs = sqlx::query_as::<_, Chef>(&format!(
            "SELECT {} FROM CHEF {} LIMIT ? OFFSET ?",
            CHEF_COLUMNS,
            options.order_by_clause()
        ))
        .bind(options.limit())
        .bind(options.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(options, total.max(0) as u64, chefs))
    }

    async fn get_chef_by_id(&self, id: i32) -> Result<Option<Chef>> {
        let chef = sqlx::query_as::<_, Chef>(&format!(
            "SELECT {} FROM CHEF WHERE id = ?",
            CHEF_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chef)
    }

    async fn get_chef_by_username(&self, username: &str) -> Result<Option<Chef>> {
        let chef = sqlx::query_as::<_, Chef>(&format!(
            "SELECT {} FROM CHEF WHERE username = ?",
            CHEF_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chef)
    }

    async fn create_chef(&self, chef: &Chef) -> Result<i32> {
        let result = sqlx::query(
            r#"
            INSERT INTO CHEF (username, email, password, is_admin)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&chef.username)
        .bind(&chef.email)
        .bind(&chef.password)
        .bind(chef.is_admin)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, &format!("Chef '{}'", chef.username)))?;

        i32::try_from(result.last_insert_id()).map_err(|_| {
            AppError::internal(format!(
                "Generated chef id {} does not fit the id column",
                result.last_insert_id()
            ))
        })
    }

    async fn update_chef(&self, chef: &Chef) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE CHEF
            SET username = ?, email = ?, password = ?, is_admin = ?
            WHERE id = ?
            "#,
        )
        .bind(&chef.username)
        .bind(&chef.email)
        .bind(&chef.password)
        .bind(chef.is_admin)
        .bind(chef.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, &format!("Chef '{}'", chef.username)))?;

        // MySQL may report 0 affected rows for an unchanged row
        if result.rows_affected() == 0 && !self.exists(chef.id).await? {
            return Err(AppError::not_found(format!("Chef with id {} not found", chef.id)));
        }

        Ok(())
    }

    async fn delete_chef(&self, chef: &Chef) -> Result<()> {
        let result = sqlx::query("DELETE FROM CHEF WHERE id = ?")
            .bind(chef.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Chef with id {} not found", chef.id)));
        }

        Ok(())
    }

    async fn search_chefs_by_term(&self, term: &str) -> Result<Vec<Chef>> {
        let chefs = sqlx::query_as::<_, Chef>(&format!(
            "SELECT {} FROM CHEF WHERE username LIKE ? ORDER BY id",
            CHEF_COLUMNS
        ))
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(chefs)
    }

    async fn search_chefs_by_term_paged(
        &self,
        term: &str,
        options: &PageOptions,
    ) -> Result<Page<Chef>> {
        let pattern = contains_pattern(term);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM CHEF WHERE username LIKE ?")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let chefs = sqlx::query_as::<_, Chef>(&format!(
            "SELECT {} FROM CHEF WHERE username LIKE ? {} LIMIT ? OFFSET ?",
            CHEF_COLUMNS,
            options.order_by_clause()
        ))
        .bind(&pattern)
        .bind(options.limit())
        .bind(options.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(options, total.max(0) as u64, chefs))
    }
}

/// `%term%` with LIKE wildcards in `term` matched literally
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
