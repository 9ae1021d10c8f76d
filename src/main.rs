use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use chefstore::chefs::{ChefRepository, ChefService, MySqlChefRepository};
use chefstore::config::{database, Config};
use chefstore::middleware::RequestId;
use chefstore::{chefs, health};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(std::io::Error::other)?;
    config.validate().map_err(std::io::Error::other)?;

    // Initialize tracing; JSON lines in production
    let json_logs = config.app.env == "production";
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("chefstore={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    tracing::info!(environment = %config.app.env, "Starting chefstore");

    let db_pool = config
        .database
        .create_pool()
        .await
        .map_err(std::io::Error::other)?;

    tracing::info!(
        max_connections = config.database.max_connections,
        "Database pool initialized"
    );

    if config.database.run_migrations {
        database::run_migrations(&db_pool)
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!("Migrations applied");
    }

    let chef_repo: Arc<dyn ChefRepository> = Arc::new(MySqlChefRepository::new(db_pool.clone()));
    let chef_service = Arc::new(ChefService::new(chef_repo));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(chef_service.clone()))
            .configure(health::configure)
            .configure(chefs::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
