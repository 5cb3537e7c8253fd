use uom::si::f64::Length;

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalOpen},
    units::LinearResistance,
};

use super::error::RangeError;

/// The physical and electrical properties the rating engine consumes.
///
/// This is an immutable snapshot of the three values that matter to the
/// heat balance: resistance per unit length at 25 °C, outer diameter, and
/// the temperature coefficient of resistance. Construction validates each
/// value once; a [`ThermalModel`](super::ThermalModel) copies the snapshot,
/// so nothing that happens to the source record afterwards can affect an
/// already-built model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorProperties {
    r25: Constrained<LinearResistance, StrictlyPositive>,
    diameter: Constrained<Length, StrictlyPositive>,
    alpha: Constrained<f64, UnitIntervalOpen>,
}

impl ConductorProperties {
    /// Builds a validated property snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Constraint`] if `r25` or `diameter` is not
    /// strictly positive, or if `alpha` is outside the open interval
    /// (0, 1) per °C.
    pub fn new(r25: LinearResistance, diameter: Length, alpha: f64) -> Result<Self, RangeError> {
        Ok(Self {
            r25: StrictlyPositive::new(r25).map_err(|e| RangeError::constraint("r25", e))?,
            diameter: StrictlyPositive::new(diameter)
                .map_err(|e| RangeError::constraint("diameter", e))?,
            alpha: UnitIntervalOpen::new(alpha).map_err(|e| RangeError::constraint("alpha", e))?,
        })
    }

    /// Resistance per unit length at 25 °C.
    #[must_use]
    pub fn r25(&self) -> LinearResistance {
        self.r25.into_inner()
    }

    /// Outer diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.into_inner()
    }

    /// Temperature coefficient of resistance [1/°C].
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha.into_inner()
    }
}
