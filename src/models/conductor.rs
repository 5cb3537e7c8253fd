//! Bare overhead conductor models.
//!
//! - [`catalog`]: Conductor and category data records (the inputs).
//! - [`rating`]: The steady-state thermal rating engine.
//! - [`envelope`]: Operating envelopes and group aggregation (the outputs).
//!
//! Data flows one way: a [`catalog::Conductor`] supplies validated
//! [`rating::ConductorProperties`], a [`rating::ThermalModel`] computes
//! currents and temperatures from them, and [`envelope::EnvelopeGroup`]
//! reports the tightest current limit across a set of operating envelopes.

pub mod catalog;
pub mod envelope;
pub mod rating;
