//! # State Error Types
//!
//! The shop store has no runtime error path: storage and decode failures are
//! logged and absorbed. What remains are wiring defects, which are reported
//! loudly.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Condition                         │  Handling                          │
//! │  ──────────────────────────────────┼─────────────────────────────────── │
//! │  malformed persisted snapshot      │  treated as no state, warn!        │
//! │  slot read / write failure         │  in-memory only, warn!             │
//! │  store used outside its provider   │  StateError::OutsideProvider       │
//! │  mounted without a Tokio runtime   │  StateError::NoRuntime             │
//! │  empty storage key                 │  StateError::InvalidConfig         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for store wiring.
pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    /// The provider that owned the store has been unmounted.
    #[error("use_shop must be used within ShopProvider")]
    OutsideProvider,

    /// `mount` was called outside a Tokio runtime.
    #[error("Shop store must be mounted inside a Tokio runtime")]
    NoRuntime,

    /// Store configuration is unusable.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}
