use anyhow::Context;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, MovieService, SeaOrmAuthService, SeaOrmMovieService};
use metrics_exporter_prometheus::PrometheusHandle;

pub mod auth;
mod error;
mod movies;
mod observability;
pub mod page;
mod search;
pub mod session;
mod settings;
pub mod validation;
pub mod views;

pub use error::ApiError;

/// Everything a request handler may touch. Built once at startup and shared
/// behind an `Arc`; per-caller state lives in the session, never here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth: Arc<dyn AuthService>,

    pub movies: Arc<dyn MovieService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

/// Connect the store, apply pending migrations and wire the services.
pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    store.init_schema(false).await?;

    let auth = Arc::new(SeaOrmAuthService::new(store.clone())) as Arc<dyn AuthService>;
    let movies = Arc::new(SeaOrmMovieService::new(store.clone())) as Arc<dyn MovieService>;

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        auth,
        movies,
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let config = state.config();

    let key = Key::try_from(config.security.secret_key.as_bytes())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Invalid session secret key")?;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.server.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.server.session_idle_minutes,
        )))
        .with_signed(key);

    let protected_routes = create_protected_router(state.clone());

    Ok(Router::new()
        .merge(protected_routes)
        .route("/", get(movies::index).post(movies::index_submit))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/search", get(search::search_page).post(search::search))
        .fallback(error::not_found)
        .layer(session_layer)
        .layer(middleware::from_fn(
            observability::security_headers_middleware,
        ))
        .layer(middleware::from_fn(observability::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/logout", get(auth::logout).post(auth::logout))
        .route(
            "/movie/edit/{id}",
            get(movies::edit_page).post(movies::edit),
        )
        .route("/movie/delete/{id}", post(movies::delete))
        .route(
            "/settings",
            get(settings::settings_page).post(settings::update_settings),
        )
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn_with_state(state, auth::require_login))
}
