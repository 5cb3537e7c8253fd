//! Empirical terms of the steady-state heat balance.
//!
//! The correlations below come from the classic overhead-conductor rating
//! literature and are tied to a specific unit system: conductor diameter in
//! inches, wind speed in ft/h, air properties in lb/ft³, lb/(ft·h) and
//! W/(ft·°C), heat flows in W/ft, and temperatures in °C. Callers convert
//! at the boundary; inside this module everything is a bare `f64` in those
//! units so the published coefficients apply verbatim.

use super::model::ConvectionFormula;

/// Reynolds-style factor above which the CLASSIC correlation switches from
/// its low-flow to its high-flow form. A hard threshold, no blending.
const CLASSIC_CROSSOVER: f64 = 12_000.0;

/// Properties of the air film at the mean film temperature.
#[derive(Debug, Clone, Copy)]
pub(super) struct AirProperties {
    /// Relative density [lb/ft³].
    pub density: f64,
    /// Absolute viscosity [lb/(ft·h)].
    pub viscosity: f64,
    /// Thermal conductivity [W/(ft·°C)].
    pub conductivity: f64,
}

impl AirProperties {
    /// Evaluates the empirical fits at film temperature `tm` [°C] and
    /// barometric pressure `pb` [cmHg].
    pub(super) fn at(tm: f64, pb: f64) -> Self {
        Self {
            density: 0.290_157_7 * pb / (273.0 + tm),
            viscosity: 0.041_65 + 0.000_111 * tm,
            conductivity: 0.007_39 + 0.000_022_7 * tm,
        }
    }
}

/// Barometric pressure [cmHg] at `altitude` [m].
pub(super) fn barometric_pressure(altitude: f64) -> f64 {
    10f64.powf(1.880_813_592 - altitude / 18_336.0)
}

/// Natural-convection heat loss [W/ft] for diameter `d` [in] and
/// temperature rise `dt` [°C].
pub(super) fn natural_convection(air: AirProperties, d: f64, dt: f64) -> f64 {
    0.283 * air.density.sqrt() * d.powf(0.75) * dt.powf(1.25)
}

/// Convective heat loss [W/ft] with wind speed `v` [ft/h].
///
/// `natural` is the still-air loss from [`natural_convection`]; with zero
/// wind it is returned untouched. Otherwise two forced-convection
/// correlations compete and the formula choice arbitrates: IEEE takes the
/// largest of the three, CLASSIC picks one correlation outright based on
/// the dimensionless flow factor.
pub(super) fn convection(
    air: AirProperties,
    d: f64,
    dt: f64,
    v: f64,
    formula: ConvectionFormula,
    natural: f64,
) -> f64 {
    if v == 0.0 {
        return natural;
    }

    let factor = d * air.density * v / air.viscosity;
    let qc1 = 0.1695 * air.conductivity * dt * factor.powf(0.6);
    let qc2 = air.conductivity * dt * (1.01 + 0.371 * factor.powf(0.52));

    match formula {
        ConvectionFormula::Ieee => natural.max(qc1).max(qc2),
        ConvectionFormula::Classic => {
            if factor < CLASSIC_CROSSOVER {
                qc2
            } else {
                qc1
            }
        }
    }
}

/// Radiative heat loss [W/ft] between conductor at `tc` and ambient at
/// `ta` [°C], for diameter `d` [in] and emissivity `e`.
pub(super) fn radiation(d: f64, e: f64, tc: f64, ta: f64) -> f64 {
    let lk = ((tc + 273.0) / 100.0).powi(4);
    let mk = ((ta + 273.0) / 100.0).powi(4);
    0.138 * d * e * (lk - mk)
}

/// Solar heat gain [W/ft] for diameter `d` [in] and sun-effect factor `s`.
pub(super) fn solar_gain(d: f64, s: f64) -> f64 {
    3.87 * d * s
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn barometric_pressure_drops_with_altitude() {
        let sea_level = barometric_pressure(0.0);
        assert_relative_eq!(sea_level, 76.0, epsilon = 0.1);
        assert!(barometric_pressure(300.0) < sea_level);
        assert!(barometric_pressure(3000.0) < barometric_pressure(300.0));
    }

    #[test]
    fn air_properties_track_film_temperature() {
        let pb = barometric_pressure(300.0);
        let cold = AirProperties::at(0.0, pb);
        let warm = AirProperties::at(37.5, pb);

        // Warmer air is thinner but more viscous and more conductive.
        assert!(warm.density < cold.density);
        assert!(warm.viscosity > cold.viscosity);
        assert!(warm.conductivity > cold.conductivity);
    }

    #[test]
    fn ieee_takes_the_largest_correlation() {
        let air = AirProperties::at(37.5, barometric_pressure(300.0));
        let d = 25.17 / 25.4;
        let dt = 25.0;
        let natural = natural_convection(air, d, dt);

        let ieee = convection(air, d, dt, 7200.0, ConvectionFormula::Ieee, natural);
        let classic = convection(air, d, dt, 7200.0, ConvectionFormula::Classic, natural);

        assert!(ieee >= classic);
        assert!(ieee >= natural);
    }

    #[test]
    fn zero_wind_keeps_natural_convection() {
        let air = AirProperties::at(37.5, barometric_pressure(300.0));
        let d = 25.17 / 25.4;
        let natural = natural_convection(air, d, 25.0);

        let qc = convection(air, d, 25.0, 0.0, ConvectionFormula::Ieee, natural);
        assert_relative_eq!(qc, natural);
    }

    #[test]
    fn classic_switches_correlation_at_the_crossover() {
        let air = AirProperties::at(37.5, barometric_pressure(300.0));
        let d = 25.17 / 25.4;
        let dt = 25.0;
        let natural = natural_convection(air, d, dt);

        // Wind speeds straddling the crossover factor.
        let v_at = |factor: f64| factor * air.viscosity / (d * air.density);
        let below = convection(
            air,
            d,
            dt,
            v_at(CLASSIC_CROSSOVER - 1.0),
            ConvectionFormula::Classic,
            natural,
        );
        let above = convection(
            air,
            d,
            dt,
            v_at(CLASSIC_CROSSOVER + 1.0),
            ConvectionFormula::Classic,
            natural,
        );

        let qc1_above = 0.1695 * air.conductivity * dt * (CLASSIC_CROSSOVER + 1.0f64).powf(0.6);
        let qc2_below =
            air.conductivity * dt * (1.01 + 0.371 * (CLASSIC_CROSSOVER - 1.0f64).powf(0.52));
        assert_relative_eq!(below, qc2_below, max_relative = 1e-9);
        assert_relative_eq!(above, qc1_above, max_relative = 1e-9);
    }

    #[test]
    fn radiation_is_zero_at_equal_temperatures() {
        assert_relative_eq!(radiation(1.0, 0.5, 40.0, 40.0), 0.0);
        assert!(radiation(1.0, 0.5, 50.0, 25.0) > 0.0);
    }
}
