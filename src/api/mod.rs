mod handlers;
mod middleware;

pub use middleware::RateLimiter;

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::store::Cookbook;

pub fn create_router(cookbook: Cookbook) -> Router {
    create_router_with_config(cookbook, ServiceConfig::local())
}

pub fn create_router_with_config(cookbook: Cookbook, config: ServiceConfig) -> Router {
    let mut router = Router::new()
        .route("/parse", post(handlers::parse))
        .route("/entry", post(handlers::create_entry))
        .route("/entry/{name}", get(handlers::get_entry))
        .route("/summary", get(handlers::summary))
        .route("/health", get(handlers::health))
        .with_state(cookbook);

    if let Some(limiter) = config.rate_limiter {
        router = router.layer(from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origins.as_deref()))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    }
}
