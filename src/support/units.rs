//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature,
//! length, current). This module provides extensions that are useful for
//! modeling but aren't included in [`uom`].
//!
//! ## Resistance per unit length
//!
//! Conductor data sheets quote DC resistance per unit length, typically in
//! Ω/km, a quantity [`uom`] has no name for. [`LinearResistance`] fills
//! the gap, and [`ohms_per_kilometer`] / [`in_ohms_per_kilometer`] convert
//! between it and the data-sheet convention:
//!
//! ```
//! use ampacity_models::support::units::{in_ohms_per_kilometer, ohms_per_kilometer};
//!
//! let r25 = ohms_per_kilometer(0.089_360);
//! assert!((in_ohms_per_kilometer(r25) - 0.089_360).abs() < 1e-12);
//! ```

use uom::si::{
    ISQ, Quantity, SI,
    electrical_resistance::ohm,
    f64::{ElectricalResistance, Length},
    length::kilometer,
};
use uom::typenum::{N2, N3, P1, Z0};

/// Electrical resistance per unit length, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`LinearResistance`] from a value in Ω/km.
#[must_use]
pub fn ohms_per_kilometer(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / Length::new::<kilometer>(1.0)
}

/// Returns a [`LinearResistance`] as a value in Ω/km.
#[must_use]
pub fn in_ohms_per_kilometer(resistance: LinearResistance) -> f64 {
    (resistance * Length::new::<kilometer>(1.0)).get::<ohm>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn round_trips_ohms_per_kilometer() {
        let r = ohms_per_kilometer(0.089_360);
        assert_relative_eq!(in_ohms_per_kilometer(r), 0.089_360, max_relative = 1e-15);
    }

    #[test]
    fn stores_ohms_per_meter() {
        let r = ohms_per_kilometer(1000.0);
        assert_relative_eq!(r.value, 1.0, max_relative = 1e-15);
    }
}
