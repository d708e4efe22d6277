//! # lifedrop-worker
//!
//! Scheduled maintenance for LifeDrop. Two jobs:
//!
//! - **Notification retention purge** — unconditionally removes
//!   notifications older than the retention window (30 days by default),
//!   read or not. This is the storage-level expiry mechanism; it is never
//!   invoked per-request.
//! - **Request expiry sweep** (optional, off by default) — a periodic run
//!   of the same sweep the read paths perform. It supplements sweep-on-read
//!   without replacing it.

pub mod jobs;
pub mod scheduler;

pub use scheduler::WorkerScheduler;
