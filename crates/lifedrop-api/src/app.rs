//! Application builder — wires repositories, services, and state into an
//! Axum app and runs it.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use lifedrop_auth::guard::RoleGuard;
use lifedrop_auth::password::PasswordHasher;
use lifedrop_auth::token::decoder::SessionVerifier;
use lifedrop_auth::token::encoder::SessionEncoder;
use lifedrop_core::config::AppConfig;
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::funding::FundingRepository;
use lifedrop_database::repositories::notification::NotificationRepository;
use lifedrop_database::repositories::request::RequestRepository;
use lifedrop_database::repositories::user::UserRepository;
use lifedrop_service::funding::FundingService;
use lifedrop_service::notification::NotificationService;
use lifedrop_service::payment::PaymentClient;
use lifedrop_service::request::RequestService;
use lifedrop_service::stats::StatsService;
use lifedrop_service::user::UserService;
use lifedrop_worker::scheduler::WorkerScheduler;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let config = Arc::new(config);

    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let request_repo = Arc::new(RequestRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let funding_repo = Arc::new(FundingRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let session_encoder = Arc::new(SessionEncoder::new(&config.auth));
    let session_verifier = Arc::new(SessionVerifier::new(&config.auth));
    let role_guard = Arc::new(RoleGuard::new(Arc::clone(&user_repo)));
    let password_hasher = Arc::new(PasswordHasher::new());

    // ── Services ─────────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&role_guard),
    ));
    let request_service = Arc::new(RequestService::new(
        Arc::clone(&request_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
        Arc::clone(&role_guard),
    ));
    let funding_service = Arc::new(FundingService::new(
        Arc::clone(&funding_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
        Arc::clone(&role_guard),
    ));
    let stats_service = Arc::new(StatsService::new(
        Arc::clone(&user_repo),
        Arc::clone(&request_repo),
        Arc::clone(&funding_repo),
        Arc::clone(&role_guard),
    ));
    let payment_client = Arc::new(PaymentClient::new(config.payment.clone())?);

    Ok(AppState {
        config,
        db_pool,
        session_encoder,
        session_verifier,
        role_guard,
        user_repo,
        request_repo,
        notification_repo,
        funding_repo,
        user_service,
        request_service,
        notification_service,
        funding_service,
        stats_service,
        payment_client,
    })
}

/// Runs the LifeDrop server with the given configuration and database pool.
///
/// Starts the background worker (notification retention, optional expiry
/// sweep) when enabled, serves HTTP until a shutdown signal, then stops the
/// worker.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let state = build_state(config, db_pool)?;

    let worker = if state.config.worker.enabled {
        let scheduler = WorkerScheduler::new(
            state.config.worker.clone(),
            Arc::clone(&state.notification_repo),
            Arc::clone(&state.request_repo),
        )
        .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        None
    };

    let app = build_router(state.clone());

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "LifeDrop server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(worker) = worker {
        worker.shutdown().await?;
    }

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives a termination signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
