use axum::{
    extract::Request,
    middleware,
    routing::{delete, get, post},
    Router, ServiceExt,
};
use std::sync::Arc;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, user_list::UserListController};
use crate::domain::user_list::UserListRepository;
use crate::infrastructure::auth::{identity_middleware, request_id_middleware, IdentityResolver};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(
    repository: Arc<dyn UserListRepository>,
    identity: Arc<dyn IdentityResolver>,
    list_controller: Arc<UserListController>,
) -> Router {
    // List routes (user resolved by the identity middleware)
    let list_routes = Router::new()
        .route("/", get(UserListController::list_items))
        .route("/add", post(UserListController::add_item))
        .route("/remove/:contentId", delete(UserListController::remove_item))
        .route("/remove", delete(UserListController::remove_item_without_id))
        .with_state(list_controller)
        .layer(middleware::from_fn_with_state(identity, identity_middleware));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(repository)
        .nest("/api/my-list", list_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Wrap the router so `/api/my-list/` and `/api/my-list/add/` reach the same
/// handlers as their slash-less forms. Must sit outside the router, since
/// router layers run after route matching.
pub fn into_app(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    let app = into_app(app);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
