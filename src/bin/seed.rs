use my_list_service::infrastructure::config::Config;
use my_list_service::infrastructure::db::connect_or_exit;
use my_list_service::infrastructure::repositories::PgUserListRepository;
use my_list_service::infrastructure::seed::seed_user_list;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "my_list_service=info,seed=info".into()),
        )
        .init();

    let pool = Arc::new(connect_or_exit(&config.database_url).await);
    tracing::info!("Database connected for seeding");

    let repository = PgUserListRepository::new(pool.clone());
    if let Err(e) = seed_user_list(&repository, &config.default_user_id).await {
        tracing::error!(error = %e, "Error seeding database");
        std::process::exit(1);
    }

    pool.close().await;
    Ok(())
}
