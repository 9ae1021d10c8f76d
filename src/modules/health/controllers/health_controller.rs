use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// A connection could be acquired and answered `SELECT 1`
    pub database: bool,
    /// The CHEF table exists and is readable
    pub chef_table: bool,
}

/// GET /health - Liveness probe
/// Does not touch the database
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
pub async fn readiness_check(pool: web::Data<MySqlPool>) -> impl Responder {
    let mut checks = ReadinessChecks {
        database: false,
        chef_table: false,
    };

    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => checks.database = true,
        Err(e) => tracing::error!(error = %e, "Database readiness check failed"),
    }

    if checks.database {
        match sqlx::query("SELECT id FROM CHEF LIMIT 1")
            .fetch_optional(pool.get_ref())
            .await
        {
            Ok(_) => checks.chef_table = true,
            Err(e) => tracing::error!(error = %e, "CHEF table is not readable"),
        }
    }

    let ready = checks.database && checks.chef_table;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
