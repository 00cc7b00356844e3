use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting Taskboard API in {:?} mode", config.environment);

    // Bring the schema up to date; a missing database is reported by /health
    // rather than preventing startup.
    if let Err(e) = crate::database::DatabaseManager::migrate().await {
        tracing::warn!("migrations not applied: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("TASKBOARD_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Taskboard API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected API behind the JWT guard
        .merge(protected_routes());

    if crate::config::config().security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    if crate::config::config().api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn public_routes() -> Router {
    use axum::routing::post;
    use handlers::public::{auth, columns, users};

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users/:email", get(users::search))
        .route(
            "/column",
            get(columns::list)
                .post(columns::create)
                .patch(columns::rename)
                .delete(columns::delete),
        )
}

fn protected_routes() -> Router {
    use axum::routing::post;
    use handlers::protected::{profile, projects, tasks};

    Router::new()
        .route("/newproject", post(projects::create))
        .route("/projects", get(projects::list))
        .route("/projectmember/:project_id", get(projects::members))
        .route("/profile", get(profile::get).put(profile::update))
        .route("/profiles", get(profile::teammates))
        .route("/membertask", get(tasks::pending))
        .route(
            "/task",
            get(tasks::list)
                .post(tasks::create)
                .put(tasks::update)
                .patch(tasks::update_state)
                .delete(tasks::delete),
        )
        .route_layer(axum::middleware::from_fn(
            middleware::jwt_auth_middleware,
        ))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Taskboard API",
        "version": version,
        "description": "Project/task-management backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "auth": "/register, /login (public)",
            "users": "/users/:email (public - fuzzy search)",
            "columns": "/column (public)",
            "projects": "/newproject, /projects, /projectmember/:project_id (bearer token)",
            "profiles": "/profile, /profiles (bearer token)",
            "tasks": "/task, /membertask (bearer token)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
