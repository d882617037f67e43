use thiserror::Error;

/// Top-level error type for the tubefly crate.
#[derive(Debug, Error)]
pub enum TubeflyError {
    #[error(transparent)]
    InvalidCurve(#[from] InvalidCurveError),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors raised while constructing a closed curve.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidCurveError {
    #[error("a closed curve needs at least 3 control points, got {count}")]
    TooFewPoints { count: usize },

    #[error("control point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("control points are collinear")]
    Collinear,
}

/// Errors raised for out-of-range call arguments.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidArgumentError {
    #[error("{parameter} must be greater than zero")]
    Zero { parameter: &'static str },

    #[error("{parameter} = {value} must not be negative")]
    Negative { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite")]
    NonFinite { parameter: &'static str },

    #[error("{parameter} = {value} is out of range ({min}, {max})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid argument: {0}")]
    Invalid(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Failure reported by an external render backend.
#[derive(Debug, Error)]
#[error("render backend failed: {0}")]
pub struct BackendError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl BackendError {
    /// Wraps any backend error.
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}

/// Convenience type alias for results using [`TubeflyError`].
pub type Result<T> = std::result::Result<T, TubeflyError>;

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(InvalidArgumentError::NonFinite { parameter }.into());
    }
    if value <= 0.0 {
        return Err(InvalidArgumentError::NonPositive { parameter, value }.into());
    }
    Ok(())
}

/// Checks that `value` is finite and not negative.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(InvalidArgumentError::NonFinite { parameter }.into());
    }
    if value < 0.0 {
        return Err(InvalidArgumentError::Negative { parameter, value }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_and_nan() {
        assert!(ensure_positive("x", 1.0).is_ok());
        assert!(matches!(
            ensure_positive("x", 0.0),
            Err(TubeflyError::InvalidArgument(InvalidArgumentError::NonPositive { .. }))
        ));
        assert!(matches!(
            ensure_positive("x", f64::NAN),
            Err(TubeflyError::InvalidArgument(InvalidArgumentError::NonFinite { .. }))
        ));
    }

    #[test]
    fn non_negative_check_accepts_zero() {
        assert!(ensure_non_negative("x", 0.0).is_ok());
        assert!(ensure_non_negative("x", -0.5).is_err());
        assert!(ensure_non_negative("x", f64::INFINITY).is_err());
    }

    #[test]
    fn messages_name_the_parameter() {
        let err = TubeflyError::from(InvalidArgumentError::Zero { parameter: "count" });
        assert_eq!(err.to_string(), "count must be greater than zero");
        let err = TubeflyError::from(InvalidCurveError::TooFewPoints { count: 2 });
        assert!(err.to_string().contains("got 2"));
    }
}
