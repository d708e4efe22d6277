//! # lifedrop-service
//!
//! Business logic service layer for LifeDrop. Each service orchestrates
//! repositories and auth to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod funding;
pub mod matcher;
pub mod notification;
pub mod payment;
pub mod request;
pub mod stats;
pub mod user;

pub use funding::FundingService;
pub use notification::NotificationService;
pub use payment::PaymentClient;
pub use request::RequestService;
pub use stats::StatsService;
pub use user::UserService;
