use my_list_service::controllers::user_list::UserListController;
use my_list_service::domain::user_list::{ListService, UserListRepository};
use my_list_service::infrastructure::auth::{
    FixedIdentityResolver, HeaderIdentityResolver, IdentityResolver,
};
use my_list_service::infrastructure::config::{Config, LogFormat};
use my_list_service::infrastructure::db::connect_or_exit;
use my_list_service::infrastructure::http::{build_router, start_http_server};
use my_list_service::infrastructure::repositories::PgUserListRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting My List Service on {}:{}",
        config.host,
        config.port
    );

    let pool = connect_or_exit(&config.database_url).await;
    tracing::info!("Database connection verified and migrations applied");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let repository: Arc<dyn UserListRepository> = Arc::new(PgUserListRepository::new(pool));

    let identity: Arc<dyn IdentityResolver> = match &config.identity_header {
        Some(header) => {
            tracing::info!(header = %header, fallback = %config.default_user_id, "Resolving users from request header");
            Arc::new(HeaderIdentityResolver::new(header.clone(), config.default_user_id.clone()))
        }
        None => {
            tracing::info!(user_id = %config.default_user_id, "Serving a single fixed user");
            Arc::new(FixedIdentityResolver::new(config.default_user_id.clone()))
        }
    };

    let list_service = Arc::new(ListService::new(repository.clone()));
    let list_controller = Arc::new(UserListController::new(list_service));

    let app = build_router(repository, identity, list_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "my_list_service=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
