use std::borrow::Borrow;
use validator::ValidationError;

/// Reject NaN and infinities. `range` validation lets NaN through, since every
/// comparison against it is false.
pub fn validate_finite(value: impl Borrow<f64>) -> Result<(), ValidationError> {
    if value.borrow().is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
