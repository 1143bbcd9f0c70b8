//! Error types for the toy core.
//!
//! Only construction and configuration can fail. Everything that happens
//! while the world is ticking degrades to a no-op instead of erroring, so
//! these errors never escape a running schedule.

use thiserror::Error;

/// The main error type.
#[derive(Debug, Error)]
pub enum ToyError {
    /// A timer was given a zero, negative or non-finite duration.
    #[error("Invalid duration: {0} (must be a finite number of seconds > 0)")]
    InvalidDuration(f32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate a duration in seconds.
pub fn check_duration(seconds: f32) -> Result<f32, ToyError> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(ToyError::InvalidDuration(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_duration_accepts_positive() {
        assert!(check_duration(0.001).is_ok());
        assert!(check_duration(200.0).is_ok());
    }

    #[test]
    fn test_check_duration_rejects_zero_negative_nan() {
        assert!(matches!(check_duration(0.0), Err(ToyError::InvalidDuration(_))));
        assert!(matches!(check_duration(-1.0), Err(ToyError::InvalidDuration(_))));
        assert!(matches!(
            check_duration(f32::NAN),
            Err(ToyError::InvalidDuration(_))
        ));
        assert!(matches!(
            check_duration(f32::INFINITY),
            Err(ToyError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_error_message() {
        let e = ToyError::InvalidDuration(-2.0);
        assert!(e.to_string().contains("-2"));
    }
}
