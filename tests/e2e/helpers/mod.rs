use anyhow::Result;
use axum::{extract::Request, Router, ServiceExt};
use my_list_service::infrastructure::config::{Config, Environment, LogFormat, DEFAULT_USER_ID};
use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;

pub mod api_client;

use api_client::TestClient;
use db_pool::{DatabasePool, PooledDatabase};
use fixtures::TestFixtures;

/// Header the test server reads the user id from
pub const USER_HEADER: &str = "x-user-id";

// Docker client for test containers
static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// Shared PostgreSQL container for all tests
static SHARED_CONTAINER: Lazy<SharedContainer> = Lazy::new(SharedContainer::new);

static DB_POOL: Lazy<DatabasePool> = Lazy::new(|| DatabasePool::new(SHARED_CONTAINER.port));

/// Shared container that lives for the duration of all tests
struct SharedContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

impl SharedContainer {
    fn new() -> Self {
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        println!("Started shared PostgreSQL container on port {}", port);

        Self {
            _container: container,
            port,
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub pool: PgPool,
    pub config: Config,
    pub fixtures: TestFixtures,
    _db: PooledDatabase,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let pooled_db = DB_POOL
                .get_database()
                .await
                .expect("Failed to get database from pool");

            let config = Config {
                database_url: pooled_db.database_url.clone(),
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                default_user_id: DEFAULT_USER_ID.to_string(),
                identity_header: Some(USER_HEADER.to_string()),
            };

            let app = create_app(&config, pooled_db.pool.clone())
                .await
                .expect("Failed to create app");

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            let app = my_list_service::infrastructure::http::into_app(app);
            tokio::spawn(async move {
                axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
                    .await
                    .unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            let client = TestClient::new(&base_url);
            let fixtures = TestFixtures::new(pooled_db.pool.clone());

            Self {
                client,
                pool: pooled_db.pool.clone(),
                config,
                fixtures,
                _db: pooled_db,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The leased database is returned by PooledDatabase::drop
        }
    }
}

async fn create_app(config: &Config, pool: PgPool) -> Result<Router> {
    use my_list_service::{
        controllers::user_list::UserListController,
        domain::user_list::{ListService, UserListRepository},
        infrastructure::{
            auth::{HeaderIdentityResolver, IdentityResolver},
            http::build_router,
            repositories::PgUserListRepository,
        },
    };

    let pool = Arc::new(pool);
    let repository: Arc<dyn UserListRepository> = Arc::new(PgUserListRepository::new(pool));
    let header = config
        .identity_header
        .clone()
        .unwrap_or_else(|| USER_HEADER.to_string());
    let identity: Arc<dyn IdentityResolver> = Arc::new(HeaderIdentityResolver::new(
        header,
        config.default_user_id.clone(),
    ));

    let list_service = Arc::new(ListService::new(repository.clone()));
    let list_controller = Arc::new(UserListController::new(list_service));

    Ok(build_router(repository, identity, list_controller))
}
