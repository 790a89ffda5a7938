//! # dk-core
//!
//! Error definitions and process-wide settings shared by the other datekit
//! crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `invalid_date!` macros.
pub mod errors;

/// Global library settings (evaluation instant, holiday latency).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationInstant, Settings, DEFAULT_HOLIDAY_LATENCY};
