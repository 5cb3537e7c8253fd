//! Steady-state thermal rating of a bare overhead conductor.
//!
//! A [`ThermalModel`] owns an immutable snapshot of a conductor's physical
//! properties plus a mutable set of environmental parameters, and exposes
//! the four operations of the rating engine:
//!
//! - [`ThermalModel::resistance`]: DC resistance at a conductor temperature.
//! - [`ThermalModel::current`]: steady-state current from the heat balance
//!   between resistive generation, convective and radiative loss, and
//!   solar gain.
//! - [`ThermalModel::conductor_temperature`]: conductor temperature that a
//!   given current produces at a given ambient, found by bisection.
//! - [`ThermalModel::ambient_temperature`]: ambient temperature consistent
//!   with a given current and conductor temperature, found by bisection.
//!
//! # Example
//!
//! ```
//! use ampacity_models::models::conductor::rating::{ConductorProperties, ThermalModel};
//! use ampacity_models::support::units::ohms_per_kilometer;
//! use uom::si::f64::{Length, ThermodynamicTemperature};
//! use uom::si::{electric_current::ampere, length::millimeter};
//! use uom::si::thermodynamic_temperature::degree_celsius;
//!
//! // AAAC 740.8 MCM FLINT
//! let properties = ConductorProperties::new(
//!     ohms_per_kilometer(0.089_360),
//!     Length::new::<millimeter>(25.17),
//!     0.0034,
//! )?;
//! let model = ThermalModel::new(&properties);
//!
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let conductor = ThermodynamicTemperature::new::<degree_celsius>(50.0);
//! let ampacity = model.current(ambient, conductor)?;
//! assert!((ampacity.get::<ampere>() - 517.7).abs() < 1.0);
//! # Ok::<(), ampacity_models::models::conductor::rating::RangeError>(())
//! ```

mod error;
mod heat_balance;
mod invert;
mod model;
mod properties;

pub mod limits;

pub use error::RangeError;
pub use model::{ConvectionFormula, ThermalModel};
pub use properties::ConductorProperties;
