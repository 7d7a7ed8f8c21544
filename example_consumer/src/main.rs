//! Example consumer: an axum service that attaches endpoints to its post payloads.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Then: `curl http://127.0.0.1:3000/posts/1`

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use endpoint_resources::{
    resource_many, resource_one, EndpointError, EndpointResource, EndpointsConfig, Entity,
    HandlerGroup, HandlerRef, Resolver, RouteKey,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

const POST_CONTROLLER: &str = "PostController";

#[derive(Clone, Serialize)]
struct Post {
    id: i64,
    title: String,
}

impl Entity for Post {
    fn route_key(&self) -> RouteKey {
        self.id.into()
    }
}

impl EndpointResource for Post {
    fn declare_endpoints(group: &mut HandlerGroup) {
        group.controller(POST_CONTROLLER);
    }
}

#[derive(Clone)]
struct AppState {
    resolver: Resolver,
    posts: Arc<Vec<Post>>,
}

async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, EndpointError> {
    resource_many(&state.resolver, &state.posts)
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::response::Response, EndpointError> {
    match state.posts.iter().find(|p| p.id == id) {
        Some(post) => Ok(resource_one(&state.resolver, post)?.into_response()),
        None => Ok(axum::http::StatusCode::NOT_FOUND.into_response()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("endpoint_resources=info")),
        )
        .init();

    let config = EndpointsConfig::from_env()?;
    let mut routes = config.route_table();
    routes
        .get("/posts", HandlerRef::method(POST_CONTROLLER, "index"))
        .get("/posts/:post", HandlerRef::method(POST_CONTROLLER, "show"))
        .delete("/posts/:post", HandlerRef::method(POST_CONTROLLER, "destroy"));

    let state = AppState {
        resolver: Resolver::from_config(&config, routes),
        posts: Arc::new(vec![
            Post { id: 1, title: "Hello".into() },
            Post { id: 2, title: "Endpoints".into() },
        ]),
    };

    let app = Router::new()
        .route("/posts", get(index))
        .route("/posts/:post", get(show))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Example consumer listening on http://127.0.0.1:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
