//! Notification fan-out engine.

pub mod service;

pub use service::NotificationService;
