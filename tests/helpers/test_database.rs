// Test Database Helpers
//
// The MySQL-backed suites run only when TEST_DATABASE_URL points at a
// reachable server; otherwise `create_test_pool` returns None and the test
// returns early.

use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::time::Duration;

/// Connect to the test database and apply migrations
pub async fn create_test_pool() -> Option<MySqlPool> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping MySQL-backed test");
        return None;
    };

    let pool = match MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Test database at {} unreachable ({}), skipping", database_url, e);
            return None;
        }
    };

    chefstore::config::database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}
