use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{get, post},
};
use rand::{SeedableRng, rngs::StdRng};
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::{error::AppError, routes::api};

#[derive(Clone)]
pub struct AppState {
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// A fixed seed makes every plan reproducible, `None` draws from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut rng = self.rng.lock().map_err(|_| AppError::RngPoisoned)?;
        Ok(f(&mut *rng))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/plan/captains", post(api::plan_captains))
        .route("/api/plan/participants", post(api::plan_participants))
        .route("/api/rosters", post(api::rosters))
        .route("/api/event/assign-captains", post(api::assign_captains))
        .route(
            "/api/event/assign-participants",
            post(api::assign_participants),
        )
        .route(
            "/api/event/cancel-participant",
            post(api::cancel_participant),
        )
        .route("/api/event/finalize", post(api::finalize))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
