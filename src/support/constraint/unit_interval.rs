mod closed;
mod open;

pub use closed::UnitInterval;
pub use open::UnitIntervalOpen;

/// Supplies 0 and 1 for types used in the unit interval constraints.
///
/// Implement this trait for your type `T` if you want to use it with
/// `Constrained<T, UnitInterval>` or `Constrained<T, UnitIntervalOpen>`.
/// Implementations should ensure that `zero() ≤ one()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}
