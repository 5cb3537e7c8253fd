//! Operating envelopes and group aggregation.
//!
//! An [`OperatingEnvelope`] pairs a shared [`ThermalModel`] with an
//! operating temperature ceiling and a count of electrically parallel
//! subconductors; an [`EnvelopeGroup`] bundles several envelopes (e.g. the
//! phases of a circuit) and reports the tightest current limit across
//! them, since the group can carry no more than its weakest member.
//!
//! # Sharing
//!
//! Envelopes hold their model behind [`Rc<RefCell<_>>`] on purpose:
//! several envelopes commonly reference the same physical conductor, and
//! a parameter change (say, a new wind assumption) must be visible to all
//! of them without rebuilding anything. The discipline is single writer,
//! any number of readers; `Rc` is `!Send`, so the compiler already keeps
//! this single-threaded.

use std::{cell::RefCell, num::NonZeroUsize, rc::Rc};

use twine_core::Model;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};
use uom::si::thermodynamic_temperature::degree_celsius;

use super::rating::{
    RangeError, ThermalModel,
    limits::{TC_MAX, TC_MIN},
};

/// A thermal model shared between envelopes.
pub type SharedThermalModel = Rc<RefCell<ThermalModel>>;

/// One conductor (or bundle of identical parallel conductors) with its
/// operating temperature ceiling.
#[derive(Debug, Clone)]
pub struct OperatingEnvelope {
    model: SharedThermalModel,
    max_operating_temp: ThermodynamicTemperature,
    parallel_count: NonZeroUsize,
}

impl OperatingEnvelope {
    /// Builds an envelope around a shared model.
    ///
    /// The parallel-count invariant (≥ 1) is carried by [`NonZeroUsize`];
    /// only the temperature ceiling needs a runtime check.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `max_operating_temp` is outside the
    /// global conductor temperature bounds.
    pub fn new(
        model: SharedThermalModel,
        max_operating_temp: ThermodynamicTemperature,
        parallel_count: NonZeroUsize,
    ) -> Result<Self, RangeError> {
        let tc = max_operating_temp.get::<degree_celsius>();
        RangeError::check("max_operating_temp", tc, TC_MIN, TC_MAX)?;
        Ok(Self {
            model,
            max_operating_temp,
            parallel_count,
        })
    }

    /// The shared thermal model.
    #[must_use]
    pub fn model(&self) -> &SharedThermalModel {
        &self.model
    }

    /// Operating temperature ceiling.
    #[must_use]
    pub fn max_operating_temp(&self) -> ThermodynamicTemperature {
        self.max_operating_temp
    }

    /// Number of electrically parallel identical conductors.
    #[must_use]
    pub fn parallel_count(&self) -> NonZeroUsize {
        self.parallel_count
    }

    /// Current the envelope may carry at `ambient_temp`: the model's
    /// steady-state current at the temperature ceiling, times the number
    /// of parallel conductors.
    ///
    /// # Errors
    ///
    /// Fails whenever the underlying model call fails (ambient
    /// temperature out of bounds).
    pub fn current(
        &self,
        ambient_temp: ThermodynamicTemperature,
    ) -> Result<ElectricCurrent, RangeError> {
        let single = self
            .model
            .borrow()
            .current(ambient_temp, self.max_operating_temp)?;
        Ok(single * self.parallel_count.get() as f64)
    }
}

/// Computes the envelope's current limit for an ambient temperature.
impl Model for OperatingEnvelope {
    type Input = ThermodynamicTemperature;
    type Output = ElectricCurrent;
    type Error = RangeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.current(*input)
    }
}

/// A non-empty, ordered collection of operating envelopes.
///
/// Append-only after construction; the length-≥-1 invariant holds for the
/// group's whole lifetime.
#[derive(Debug, Clone)]
pub struct EnvelopeGroup {
    envelopes: Vec<OperatingEnvelope>,
}

impl EnvelopeGroup {
    /// Builds a group from at least one envelope.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `envelopes` is empty.
    pub fn new(envelopes: Vec<OperatingEnvelope>) -> Result<Self, RangeError> {
        if envelopes.is_empty() {
            return Err(RangeError::BelowMinimum {
                name: "envelopes.len",
                value: 0.0,
                min: 1.0,
            });
        }
        Ok(Self { envelopes })
    }

    /// Appends an envelope. Always succeeds.
    pub fn push(&mut self, envelope: OperatingEnvelope) {
        self.envelopes.push(envelope);
    }

    /// The member envelopes, in insertion order.
    #[must_use]
    pub fn envelopes(&self) -> &[OperatingEnvelope] {
        &self.envelopes
    }

    /// Number of member envelopes (always ≥ 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.envelopes.len()
    }

    /// Always false for a successfully constructed group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }

    /// Safe operating current of the group at `ambient_temp`: the minimum
    /// of the members' currents.
    ///
    /// # Errors
    ///
    /// Fails if any member's model call fails (ambient temperature out of
    /// bounds).
    pub fn current(
        &self,
        ambient_temp: ThermodynamicTemperature,
    ) -> Result<ElectricCurrent, RangeError> {
        let mut minimum: Option<ElectricCurrent> = None;
        for envelope in &self.envelopes {
            let current = envelope.current(ambient_temp)?;
            minimum = Some(match minimum {
                Some(m) if m <= current => m,
                _ => current,
            });
        }
        // The non-empty invariant guarantees at least one member.
        minimum.ok_or(RangeError::BelowMinimum {
            name: "envelopes.len",
            value: 0.0,
            min: 1.0,
        })
    }
}

/// Computes the group's current limit for an ambient temperature.
impl Model for EnvelopeGroup {
    type Input = ThermodynamicTemperature;
    type Output = ElectricCurrent;
    type Error = RangeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.current(*input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere,
        f64::Length,
        length::millimeter,
    };

    use crate::{
        models::conductor::rating::ConductorProperties,
        support::units::ohms_per_kilometer,
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn flint_model() -> SharedThermalModel {
        let properties = ConductorProperties::new(
            ohms_per_kilometer(0.089_360),
            Length::new::<millimeter>(25.17),
            0.0034,
        )
        .unwrap();
        Rc::new(RefCell::new(ThermalModel::new(&properties)))
    }

    fn envelope(model: &SharedThermalModel, tc_max: f64, count: usize) -> OperatingEnvelope {
        OperatingEnvelope::new(
            Rc::clone(model),
            celsius(tc_max),
            NonZeroUsize::new(count).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn envelope_accessors() {
        let model = flint_model();
        let env = envelope(&model, 50.0, 2);
        assert_relative_eq!(env.max_operating_temp().get::<degree_celsius>(), 50.0);
        assert_eq!(env.parallel_count().get(), 2);
    }

    #[test]
    fn envelope_rejects_ceiling_outside_conductor_bounds() {
        let model = flint_model();
        for ok in [TC_MIN, TC_MAX] {
            assert!(
                OperatingEnvelope::new(
                    Rc::clone(&model),
                    celsius(ok),
                    NonZeroUsize::new(2).unwrap()
                )
                .is_ok()
            );
        }
        for bad in [TC_MIN - 0.01, TC_MAX + 0.01] {
            assert!(
                OperatingEnvelope::new(
                    Rc::clone(&model),
                    celsius(bad),
                    NonZeroUsize::new(2).unwrap()
                )
                .is_err()
            );
        }
    }

    #[test]
    fn envelope_scales_with_parallel_count() {
        let model = flint_model();
        let single = envelope(&model, 50.0, 1);
        let bundle = envelope(&model, 50.0, 3);

        let one = single.current(celsius(25.0)).unwrap();
        let three = bundle.current(celsius(25.0)).unwrap();
        assert_relative_eq!(
            three.get::<ampere>(),
            3.0 * one.get::<ampere>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(one.get::<ampere>(), 517.7, epsilon = 1.0);
    }

    #[test]
    fn envelope_propagates_model_range_errors() {
        let model = flint_model();
        let env = envelope(&model, 50.0, 1);
        assert!(matches!(
            env.current(celsius(90.001)),
            Err(RangeError::AboveMaximum { name: "ta", .. })
        ));
    }

    #[test]
    fn group_rejects_empty_construction() {
        assert!(matches!(
            EnvelopeGroup::new(Vec::new()),
            Err(RangeError::BelowMinimum {
                name: "envelopes.len",
                ..
            })
        ));
    }

    #[test]
    fn group_reports_the_weakest_member() {
        let model = flint_model();
        let strict = envelope(&model, 50.0, 1);
        let loose = envelope(&model, 80.0, 1);

        let expected = strict.current(celsius(25.0)).unwrap();
        let group = EnvelopeGroup::new(vec![loose, strict]).unwrap();
        assert_eq!(group.len(), 2);
        assert_relative_eq!(
            group.current(celsius(25.0)).unwrap().get::<ampere>(),
            expected.get::<ampere>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn appending_a_stricter_member_never_raises_the_limit() {
        let model = flint_model();
        let mut group = EnvelopeGroup::new(vec![envelope(&model, 80.0, 1)]).unwrap();
        let before = group.current(celsius(25.0)).unwrap();

        group.push(envelope(&model, 50.0, 1));
        let after = group.current(celsius(25.0)).unwrap();
        assert!(after <= before);
        assert_eq!(group.len(), 2);

        // A looser member leaves the limit unchanged.
        group.push(envelope(&model, 90.0, 4));
        let unchanged = group.current(celsius(25.0)).unwrap();
        assert_relative_eq!(
            unchanged.get::<ampere>(),
            after.get::<ampere>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn shared_model_mutations_are_visible_to_every_envelope() {
        let model = flint_model();
        let group = EnvelopeGroup::new(vec![
            envelope(&model, 50.0, 1),
            envelope(&model, 80.0, 1),
        ])
        .unwrap();

        let sunny = group.current(celsius(25.0)).unwrap();
        model.borrow_mut().set_sun_effect(0.0).unwrap();
        let shaded = group.current(celsius(25.0)).unwrap();
        assert!(shaded > sunny);
    }

    #[test]
    fn model_adapters_delegate() {
        let model = flint_model();
        let env = envelope(&model, 50.0, 1);
        let direct = env.current(celsius(25.0)).unwrap();
        let via_model = env.call(&celsius(25.0)).unwrap();
        assert_eq!(direct, via_model);

        let group = EnvelopeGroup::new(vec![env]).unwrap();
        let direct = group.current(celsius(25.0)).unwrap();
        let via_model = group.call(&celsius(25.0)).unwrap();
        assert_eq!(direct, via_model);
    }
}
