//! Documented bounds of the rating engine.
//!
//! Temperatures are in °C. The ambient bounds bracket recorded extremes
//! (world lowest −82.2 °C at Vostok, 1983; world highest 58.2 °C in Libya,
//! 1922) with margin; the conductor ceiling sits above the melting point
//! of copper (1083 °C).

/// Minimum ambient temperature [°C].
pub const TA_MIN: f64 = -90.0;

/// Maximum ambient temperature [°C].
pub const TA_MAX: f64 = 90.0;

/// Minimum conductor temperature [°C].
pub const TC_MIN: f64 = -90.0;

/// Maximum conductor temperature [°C].
pub const TC_MAX: f64 = 2000.0;

/// Maximum number of bisection iterations before a solve is abandoned.
pub const ITER_MAX: usize = 20_000;
