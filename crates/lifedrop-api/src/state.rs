//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use lifedrop_auth::guard::RoleGuard;
use lifedrop_auth::token::decoder::SessionVerifier;
use lifedrop_auth::token::encoder::SessionEncoder;
use lifedrop_core::config::AppConfig;
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

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; everything is read-only
/// after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token encoder
    pub session_encoder: Arc<SessionEncoder>,
    /// Session token verifier
    pub session_verifier: Arc<SessionVerifier>,
    /// Role guard (store-of-record role checks)
    pub role_guard: Arc<RoleGuard>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Donation request repository
    pub request_repo: Arc<RequestRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,
    /// Funding repository
    pub funding_repo: Arc<FundingRepository>,

    // ── Services ─────────────────────────────────────────────
    /// User service
    pub user_service: Arc<UserService>,
    /// Request lifecycle service
    pub request_service: Arc<RequestService>,
    /// Notification fan-out engine
    pub notification_service: Arc<NotificationService>,
    /// Funding service
    pub funding_service: Arc<FundingService>,
    /// Stats service
    pub stats_service: Arc<StatsService>,
    /// Payment processor client
    pub payment_client: Arc<PaymentClient>,
}
