use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// An error returned when a value falls outside a documented bound.
///
/// This single kind covers every failure mode of the rating engine:
/// malformed physical properties, out-of-bounds temperature or current
/// arguments, and iteration-cap exhaustion in the bisection solvers.
/// Nothing is retried internally; every failure propagates to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// A scalar argument fell below its documented minimum.
    #[error("{name} is {value} but the allowed minimum is {min}")]
    BelowMinimum {
        name: &'static str,
        value: f64,
        min: f64,
    },

    /// A scalar argument exceeded its documented maximum.
    #[error("{name} is {value} but the allowed maximum is {max}")]
    AboveMaximum {
        name: &'static str,
        value: f64,
        max: f64,
    },

    /// A physical property failed its construction-time constraint.
    #[error("{name} is out of range")]
    Constraint {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A bisection solve hit the iteration cap before the requested
    /// tolerance was reached. Never reported as an approximate success.
    #[error("bisection stopped after {max_iters} iterations without converging")]
    IterationLimit { max_iters: usize },
}

impl RangeError {
    /// Tags a [`ConstraintError`] with the name of the offending value.
    pub(crate) fn constraint(name: &'static str, source: ConstraintError) -> Self {
        Self::Constraint { name, source }
    }

    /// Checks that `value` lies in the closed interval `[min, max]`.
    pub(crate) fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if value < min {
            return Err(Self::BelowMinimum { name, value, min });
        }
        if value > max {
            return Err(Self::AboveMaximum { name, value, max });
        }
        Ok(())
    }
}
