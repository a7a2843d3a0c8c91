//! Shared types for the tuition billing platform
//!
//! Data models and ID/time utilities used by the billing engine and, via
//! API serialization, the administrative frontend.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
