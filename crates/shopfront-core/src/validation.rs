//! # Validation Module
//!
//! Input checks for data entering the system from outside the store:
//! catalog files and command-line arguments.
//!
//! The store itself never validates. Any id is a valid key and a zero
//! quantity is a no-op, so its operations cannot fail.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_product_id, validate_quantity};
//!
//! assert!(validate_product_id("mint-01").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product id accepted from outside.
pub const MAX_PRODUCT_ID_LEN: usize = 128;

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_PRODUCT_ID_LEN`] characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.chars().count() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity supplied by a user.
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}
