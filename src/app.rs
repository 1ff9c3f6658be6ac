// app.rs - Router assembly
//
// Routes:
//   GET    /health
//   GET    /menus            list for X-Business-ID
//   POST   /menus            create for X-Business-ID
//   GET    /menus/:id        fetch
//   PUT    /menus/:id        partial update
//   DELETE /menus/:id        delete
//
// Item routes match any path under /menus/ and read the id from the first
// segment, so `/menus/` itself and `/menus//x` reach the handler and get a
// 400 rather than a router 404.

use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::middleware::{cors_layer, handle_timeout_error, preflight_no_content};
use crate::services::MenuService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub menus: MenuService,
}

impl AppState {
    pub fn new(menus: MenuService) -> Self {
        Self { menus }
    }
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/menus", menu_collection())
        .route("/menus/", menu_item())
        .route("/menus/*rest", menu_item())
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(preflight_no_content))
                .layer(cors_layer(&config.cors_origins))
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(config.request_timeout()),
        )
}

fn menu_collection() -> MethodRouter<AppState> {
    get(handlers::menu_list)
        .post(handlers::menu_create)
        .fallback(handlers::method_not_allowed)
}

fn menu_item() -> MethodRouter<AppState> {
    get(handlers::menu_get)
        .put(handlers::menu_update)
        .delete(handlers::menu_delete)
        .fallback(handlers::method_not_allowed)
}
