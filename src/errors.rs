//! Error types for parameter validation and geometry evaluation

use crate::float_types::Real;

/// Rejections raised while constructing [`WaveDriveParams`](crate::params::WaveDriveParams).
///
/// Construction fails as a whole; no partially validated record is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// (NonPositiveDimension) A length that must be strictly positive is zero or negative
    #[error("(NonPositiveDimension) {name} must be greater than zero, got {value}")]
    NonPositiveDimension { name: &'static str, value: Real },
    /// (NegativeTolerance) The roller clearance is below zero
    #[error("(NegativeTolerance) roller_tolerance must not be negative, got {0}")]
    NegativeTolerance(Real),
    /// (TooFewRollers) Not enough rolling elements to form an orbit
    #[error("(TooFewRollers) at least {minimum} rollers are required, got {count}")]
    TooFewRollers { count: usize, minimum: usize },
    /// (TooManyRollers) More rolling elements than a drive supports
    #[error("(TooManyRollers) at most {maximum} rollers are supported, got {count}")]
    TooManyRollers { count: usize, maximum: usize },
    /// (NonFiniteValue) A NaN or infinite input
    #[error("(NonFiniteValue) {name} is NaN or infinite")]
    NonFiniteValue { name: &'static str },
}

/// Failures while sampling the eccentric orbit.
///
/// These only occur when the feasibility gate was skipped; callers should treat
/// them as a contract violation rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (DomainError) The orbit radicand went negative at `theta`
    #[error("(DomainError) negative square root while sampling the orbit at theta = {theta} (radicand = {radicand})")]
    Domain { theta: Real, radicand: Real },
    /// (NonFiniteCoordinate) A sampled coordinate is NaN or infinite
    #[error("(NonFiniteCoordinate) sample {index} produced a NaN or infinite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Umbrella error for the full evaluation pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveDriveError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
