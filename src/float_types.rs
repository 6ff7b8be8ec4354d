// Our Real scalar type. Every derivation in the crate runs in double precision.
pub type Real = f64;

/// Default comparison tolerance for radius and coordinate checks.
pub const EPSILON: Real = 1e-9;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
