use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, Length, TemperatureInterval, ThermodynamicTemperature, Velocity},
    length::{inch, meter},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    velocity::foot_per_second,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive, UnitInterval},
    units::LinearResistance,
};

use super::{
    error::RangeError,
    heat_balance,
    limits::{TA_MAX, TA_MIN, TC_MAX, TC_MIN},
    properties::ConductorProperties,
};

/// Selects which empirical forced-convection correlation governs the heat
/// balance when wind is present.
///
/// The two choices reproduce the two published variants of the rating
/// method and give slightly different currents; see
/// [`ThermalModel::current`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConvectionFormula {
    /// Takes the most conservative (largest) of the natural and both
    /// forced correlations. The default.
    #[default]
    Ieee,
    /// Picks a single forced correlation by flow regime, switching at a
    /// hard dimensionless-factor threshold.
    Classic,
}

impl ConvectionFormula {
    /// Parses the legacy string selector.
    ///
    /// `"CLASSIC"` maps to [`ConvectionFormula::Classic`]; any other token
    /// falls back to [`ConvectionFormula::Ieee`], deliberately mirroring
    /// the permissive behavior of the data sets this crate ingests.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "CLASSIC" {
            Self::Classic
        } else {
            Self::Ieee
        }
    }

    /// The canonical string for this formula.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Ieee => "IEEE",
            Self::Classic => "CLASSIC",
        }
    }
}

/// Steady-state thermal model of one bare overhead conductor.
///
/// Owns an immutable copy of the conductor's physical snapshot (taken from
/// [`ConductorProperties`] at construction) and a mutable environment.
/// Every setter revalidates its own bound and leaves the model untouched
/// on failure, so a constructed model is valid for its whole lifetime.
///
/// The model is intentionally cheap to share single-threaded (see the
/// envelope module); it performs no locking and assumes a single writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalModel {
    // Physical snapshot.
    r25: LinearResistance,
    diameter: Length,
    alpha: f64,
    // Environment.
    altitude: Length,
    air_velocity: Velocity,
    sun_effect: f64,
    emissivity: f64,
    formula: ConvectionFormula,
    delta_temp: TemperatureInterval,
}

impl ThermalModel {
    /// Builds a model from validated properties with default environment:
    /// altitude 300 m, wind 2 ft/s, full sun, emissivity 0.5, IEEE
    /// formula, bisection tolerance 0.0001 °C.
    #[must_use]
    pub fn new(properties: &ConductorProperties) -> Self {
        Self {
            r25: properties.r25(),
            diameter: properties.diameter(),
            alpha: properties.alpha(),
            altitude: Length::new::<meter>(300.0),
            air_velocity: Velocity::new::<foot_per_second>(2.0),
            sun_effect: 1.0,
            emissivity: 0.5,
            formula: ConvectionFormula::default(),
            delta_temp: TemperatureInterval::new::<delta_celsius>(0.0001),
        }
    }

    /// Resistance per unit length at 25 °C (snapshot).
    #[must_use]
    pub fn r25(&self) -> LinearResistance {
        self.r25
    }

    /// Conductor outer diameter (snapshot).
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Temperature coefficient of resistance [1/°C] (snapshot).
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Altitude above sea level.
    #[must_use]
    pub fn altitude(&self) -> Length {
        self.altitude
    }

    /// Sets the altitude. Must be non-negative.
    pub fn set_altitude(&mut self, altitude: Length) -> Result<(), RangeError> {
        NonNegative::new(altitude).map_err(|e| RangeError::constraint("altitude", e))?;
        self.altitude = altitude;
        Ok(())
    }

    /// Speed of the air stream across the conductor.
    #[must_use]
    pub fn air_velocity(&self) -> Velocity {
        self.air_velocity
    }

    /// Sets the air velocity. Must be non-negative; zero means still air.
    pub fn set_air_velocity(&mut self, air_velocity: Velocity) -> Result<(), RangeError> {
        NonNegative::new(air_velocity).map_err(|e| RangeError::constraint("air_velocity", e))?;
        self.air_velocity = air_velocity;
        Ok(())
    }

    /// Sun-effect factor in [0, 1]: 1 is full sun, 0 is full shade.
    #[must_use]
    pub fn sun_effect(&self) -> f64 {
        self.sun_effect
    }

    /// Sets the sun-effect factor. Must lie in [0, 1].
    pub fn set_sun_effect(&mut self, sun_effect: f64) -> Result<(), RangeError> {
        UnitInterval::new(sun_effect).map_err(|e| RangeError::constraint("sun_effect", e))?;
        self.sun_effect = sun_effect;
        Ok(())
    }

    /// Surface emissivity in [0, 1].
    #[must_use]
    pub fn emissivity(&self) -> f64 {
        self.emissivity
    }

    /// Sets the emissivity. Must lie in [0, 1].
    pub fn set_emissivity(&mut self, emissivity: f64) -> Result<(), RangeError> {
        UnitInterval::new(emissivity).map_err(|e| RangeError::constraint("emissivity", e))?;
        self.emissivity = emissivity;
        Ok(())
    }

    /// Convection formula in effect.
    #[must_use]
    pub fn formula(&self) -> ConvectionFormula {
        self.formula
    }

    /// Sets the convection formula. Infallible; the enum is closed.
    pub fn set_formula(&mut self, formula: ConvectionFormula) {
        self.formula = formula;
    }

    /// Convergence tolerance of the bisection solvers.
    #[must_use]
    pub fn delta_temp(&self) -> TemperatureInterval {
        self.delta_temp
    }

    /// Sets the bisection tolerance. Must be strictly positive.
    ///
    /// Tighter tolerances cost iterations; looser ones cost precision. The
    /// solved temperatures are only ever accurate to this interval.
    pub fn set_delta_temp(&mut self, delta_temp: TemperatureInterval) -> Result<(), RangeError> {
        StrictlyPositive::new(delta_temp.get::<delta_celsius>())
            .map_err(|e| RangeError::constraint("delta_temp", e))?;
        self.delta_temp = delta_temp;
        Ok(())
    }

    /// DC resistance per unit length at conductor temperature `conductor_temp`.
    ///
    /// Linear in temperature: `r25 · (1 + α·(tc − 25 °C))`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the temperature is outside
    /// [[`TC_MIN`](super::limits::TC_MIN), [`TC_MAX`](super::limits::TC_MAX)].
    pub fn resistance(
        &self,
        conductor_temp: ThermodynamicTemperature,
    ) -> Result<LinearResistance, RangeError> {
        let tc = conductor_temp.get::<degree_celsius>();
        RangeError::check("tc", tc, TC_MIN, TC_MAX)?;
        Ok(self.resistance_at(tc))
    }

    /// Steady-state current that holds the conductor at `conductor_temp`
    /// given `ambient_temp`.
    ///
    /// Balances resistive heat generation against convective and radiative
    /// loss net of solar gain. Two defined edge cases yield exactly 0 A
    /// rather than an error: an ambient at or above the conductor
    /// temperature, and a solar gain exceeding the total heat loss (the
    /// conductor already sits at that temperature unpowered).
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if either temperature is outside its
    /// documented bounds.
    pub fn current(
        &self,
        ambient_temp: ThermodynamicTemperature,
        conductor_temp: ThermodynamicTemperature,
    ) -> Result<ElectricCurrent, RangeError> {
        let ta = ambient_temp.get::<degree_celsius>();
        let tc = conductor_temp.get::<degree_celsius>();
        RangeError::check("ta", ta, TA_MIN, TA_MAX)?;
        RangeError::check("tc", tc, TC_MIN, TC_MAX)?;
        Ok(ElectricCurrent::new::<ampere>(self.current_at(ta, tc)))
    }

    /// Resistance at `tc` [°C], bounds already checked by the caller.
    pub(super) fn resistance_at(&self, tc: f64) -> LinearResistance {
        self.r25 * (1.0 + self.alpha * (tc - 25.0))
    }

    /// Heat-balance current [A] for in-bounds temperatures [°C].
    ///
    /// This is the hot inner loop of the bisection solvers, so it works on
    /// bare Celsius floats; the public wrappers own validation and unit
    /// conversion.
    pub(super) fn current_at(&self, ta: f64, tc: f64) -> f64 {
        if ta >= tc {
            return 0.0;
        }

        // The correlations want inches, ft/h, Ω/ft and cmHg.
        let d = self.diameter.get::<inch>();
        let v = self.air_velocity.get::<foot_per_second>() * 3600.0;
        let rc = self.resistance_at(tc).value * 0.3048;
        let pb = heat_balance::barometric_pressure(self.altitude.get::<meter>());

        let tm = 0.5 * (tc + ta);
        let air = heat_balance::AirProperties::at(tm, pb);

        let natural = heat_balance::natural_convection(air, d, tc - ta);
        let qc = heat_balance::convection(air, d, tc - ta, v, self.formula, natural);
        let qr = heat_balance::radiation(d, self.emissivity, tc, ta);
        let qs = heat_balance::solar_gain(d, self.sun_effect);

        if qc + qr < qs {
            // Net heat loss is negative: the sun alone keeps the conductor
            // above this temperature.
            return 0.0;
        }
        ((qc + qr - qs) / rc).sqrt()
    }
}
