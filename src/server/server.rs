mod error;
mod server_config;

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use log::info;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use error::ServerError;
use server_config::AppConfig;

use investor_registry::backend::JsonStore;
use investor_registry::investor::Balance;
use investor_registry::{Investor, InvestorRegistry};

const SERVER_CONFIG: &str = "resources/server.toml";

struct AppState {
    registry: InvestorRegistry,
    store: Mutex<JsonStore>,
}

/// Record fields as submitted by callers; the id comes from the path.
#[derive(Debug, Deserialize)]
struct InvestorForm {
    name: String,
    email: String,
    balance: Balance,
}

async fn index() -> &'static str {
    "investor registry"
}

async fn register_investor(
    State(app): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<InvestorForm>,
) -> Result<StatusCode, ServerError> {
    let mut store = app.store.lock().expect("world state lock poisoned");
    app.registry
        .register_investor(&mut *store, &id, &form.name, &form.email, form.balance)?;
    store.save()?;
    Ok(StatusCode::CREATED)
}

async fn update_investor(
    State(app): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<InvestorForm>,
) -> Result<(), ServerError> {
    let mut store = app.store.lock().expect("world state lock poisoned");
    app.registry
        .update_investor(&mut *store, &id, &form.name, &form.email, form.balance)?;
    store.save()?;
    Ok(())
}

async fn view_investor(
    State(app): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Investor>, ServerError> {
    let store = app.store.lock().expect("world state lock poisoned");
    let investor = app.registry.view_investor(&*store, &id)?;
    Ok(Json(investor))
}

async fn investor_exists(
    State(app): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ServerError> {
    let store = app.store.lock().expect("world state lock poisoned");
    let exists = app.registry.investor_exists(&*store, &id)?;
    Ok(Json(exists))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::read(SERVER_CONFIG)?;
    let store = JsonStore::open(&config.state_file)?;
    let app_state = Arc::new(AppState {
        registry: InvestorRegistry::new(),
        store: Mutex::new(store),
    });

    let app = Router::new()
        .route("/", get(index))
        .route(
            "/investors/:id",
            post(register_investor).put(update_investor).get(view_investor),
        )
        .route("/investors/:id/exists", get(investor_exists))
        .with_state(app_state);

    info!("listening on {}", config.listen);
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
