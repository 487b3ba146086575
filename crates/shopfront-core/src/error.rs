//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Snapshot encoding, catalog loading             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-storage errors (separate crate)                             │
//! │  └── StorageError     - Slot read/write failures                       │
//! │                                                                         │
//! │  shopfront-state errors                                                │
//! │  └── StateError       - Wiring defects (store used outside provider)   │
//! │                                                                         │
//! │  NOTE: persisted-state decoding has no error type. Malformed data      │
//! │        means "no prior state", see `snapshot`.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Snapshot could not be serialized.
    #[error("Failed to encode snapshot: {0}")]
    SnapshotEncode(#[source] serde_json::Error),

    /// Catalog document is not a list of product records.
    #[error("Invalid catalog: {0}")]
    CatalogFormat(#[source] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., two catalog products with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
