//! Inversions of the heat balance by bisection.
//!
//! The forward current has no closed-form inverse in either temperature,
//! but it is monotone: non-decreasing in conductor temperature and
//! non-increasing in ambient temperature. Each solver exploits one of
//! those directions with a plain midpoint bisection whose loop shape is
//! part of this crate's numeric contract: the interval halves until its
//! width drops below the model's `delta_temp`, the last midpoint is the
//! answer, and exhausting the iteration cap is an error rather than an
//! approximate success.

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::ConstraintError;

use super::{
    error::RangeError,
    limits::{ITER_MAX, TA_MAX, TA_MIN, TC_MAX, TC_MIN},
    model::ThermalModel,
};

impl ThermalModel {
    /// Conductor temperature reached when carrying `current` at
    /// `ambient_temp`, to within `delta_temp`.
    ///
    /// Bisects over conductor temperatures in `[ta, TC_MAX]`: a midpoint
    /// whose forward current exceeds the target is too hot and becomes the
    /// new upper bound, otherwise it becomes the new lower bound.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the ambient temperature is out of
    /// bounds, if the target current is negative, non-finite, or above
    /// `current(ta, TC_MAX)` (unreachable at any valid conductor
    /// temperature), or if the iteration cap is exhausted.
    pub fn conductor_temperature(
        &self,
        ambient_temp: ThermodynamicTemperature,
        current: ElectricCurrent,
    ) -> Result<ThermodynamicTemperature, RangeError> {
        let ta = ambient_temp.get::<degree_celsius>();
        RangeError::check("ta", ta, TA_MIN, TA_MAX)?;

        let ic = finite_amperes(current)?;
        let ic_max = self.current_at(ta, TC_MAX);
        RangeError::check("ic", ic, 0.0, ic_max)?;

        let mut low = ta;
        let mut high = TC_MAX;
        let mut mid = 0.0;
        let delta = self.delta_temp().get::<delta_celsius>();
        let mut iterations = 0;

        while high - low > delta {
            mid = 0.5 * (low + high);
            if self.current_at(ta, mid) > ic {
                high = mid;
            } else {
                low = mid;
            }
            iterations += 1;
            if iterations > ITER_MAX {
                return Err(RangeError::IterationLimit {
                    max_iters: ITER_MAX,
                });
            }
        }

        Ok(ThermodynamicTemperature::new::<degree_celsius>(mid))
    }

    /// Ambient temperature at which carrying `current` holds the conductor
    /// at `conductor_temp`, to within `delta_temp`.
    ///
    /// Bisects over ambient temperatures in `[TA_MIN, min(TA_MAX, tc)]`;
    /// the current is non-increasing in ambient temperature, so a midpoint
    /// whose forward current exceeds the target becomes the new lower
    /// bound.
    ///
    /// If the search interval is already narrower than `delta_temp` (the
    /// degenerate `tc = TC_MIN` corner), the result is 0 °C. That is a
    /// preserved legacy convention, not a physically meaningful answer.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the conductor temperature is out of
    /// bounds, if the target current is non-finite or outside
    /// `[current(TA_MAX, tc), current(TA_MIN, tc)]`, or if the iteration
    /// cap is exhausted.
    pub fn ambient_temperature(
        &self,
        conductor_temp: ThermodynamicTemperature,
        current: ElectricCurrent,
    ) -> Result<ThermodynamicTemperature, RangeError> {
        let tc = conductor_temp.get::<degree_celsius>();
        RangeError::check("tc", tc, TC_MIN, TC_MAX)?;

        let ic = finite_amperes(current)?;
        // Current falls as ambient rises, so the bounds swap ends.
        let ic_min = self.current_at(TA_MAX, tc);
        let ic_max = self.current_at(TA_MIN, tc);
        RangeError::check("ic", ic, ic_min, ic_max)?;

        let mut low = TA_MIN;
        let mut high = TA_MAX.min(tc);
        let mut mid = 0.0;
        let delta = self.delta_temp().get::<delta_celsius>();
        let mut iterations = 0;

        while high - low > delta {
            mid = 0.5 * (low + high);
            if self.current_at(mid, tc) > ic {
                low = mid;
            } else {
                high = mid;
            }
            iterations += 1;
            if iterations > ITER_MAX {
                return Err(RangeError::IterationLimit {
                    max_iters: ITER_MAX,
                });
            }
        }

        Ok(ThermodynamicTemperature::new::<degree_celsius>(mid))
    }
}

/// Extracts a finite ampere value, rejecting NaN and infinities before
/// they can poison a bisection.
fn finite_amperes(current: ElectricCurrent) -> Result<f64, RangeError> {
    let ic = current.get::<ampere>();
    if ic.is_nan() {
        return Err(RangeError::constraint("ic", ConstraintError::NotANumber));
    }
    Ok(ic)
}
