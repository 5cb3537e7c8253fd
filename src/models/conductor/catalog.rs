//! Conductor and category data records.
//!
//! These are plain data-sheet records with documented units, kept
//! deliberately free of algorithmic content: the rating engine never reads
//! them directly. [`Conductor::properties`] is the single crossing point,
//! converting the three fields the heat balance needs into a typed,
//! validated [`ConductorProperties`] snapshot.
//!
//! Mechanical fields (modulus of elasticity, thermal expansion, creep,
//! weight, strength) are carried for completeness of the record but are
//! not consumed by any model in this crate.

use uom::si::{f64::Length, length::millimeter};

use crate::support::units::ohms_per_kilometer;

use super::rating::{ConductorProperties, RangeError};

/// A family of conductors sharing material characteristics.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Category name, e.g. `"AAAC (AASC)"`.
    pub name: String,
    /// Modulus of elasticity [kg/mm²].
    pub modulus_of_elasticity: f64,
    /// Coefficient of thermal expansion [1/°C].
    pub thermal_expansion: f64,
    /// Creep allowance [°C].
    pub creep: f64,
    /// Temperature coefficient of resistance [1/°C].
    pub alpha: f64,
}

impl Category {
    /// Copper.
    #[must_use]
    pub fn copper() -> Self {
        Self {
            name: "COPPER".into(),
            modulus_of_elasticity: 12000.0,
            thermal_expansion: 0.0000169,
            creep: 0.0,
            alpha: 0.00374,
        }
    }

    /// All-aluminum-alloy conductor (AAAC, also sold as AASC).
    #[must_use]
    pub fn aaac() -> Self {
        Self {
            name: "AAAC (AASC)".into(),
            modulus_of_elasticity: 6450.0,
            thermal_expansion: 0.0000230,
            creep: 20.0,
            alpha: 0.00340,
        }
    }

    /// Aluminum conductor, aluminum-alloy reinforced.
    #[must_use]
    pub fn acar() -> Self {
        Self {
            name: "ACAR".into(),
            modulus_of_elasticity: 6450.0,
            thermal_expansion: 0.0000250,
            creep: 20.0,
            alpha: 0.00385,
        }
    }

    /// Aluminum conductor, steel reinforced.
    #[must_use]
    pub fn acsr() -> Self {
        Self {
            name: "ACSR".into(),
            modulus_of_elasticity: 8000.0,
            thermal_expansion: 0.0000191,
            creep: 20.0,
            alpha: 0.00395,
        }
    }

    /// All-aluminum conductor.
    #[must_use]
    pub fn aluminum() -> Self {
        Self {
            name: "ALUMINUM".into(),
            modulus_of_elasticity: 5600.0,
            thermal_expansion: 0.0000230,
            creep: 20.0,
            alpha: 0.00395,
        }
    }

    /// Copper-clad steel.
    #[must_use]
    pub fn copperweld() -> Self {
        Self {
            name: "COPPERWELD".into(),
            modulus_of_elasticity: 16200.0,
            thermal_expansion: 0.0000130,
            creep: 0.0,
            alpha: 0.00380,
        }
    }
}

/// One conductor from a manufacturer's data sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Conductor {
    /// Commercial name, e.g. `"AAAC 740,8 MCM FLINT"`.
    pub name: String,
    /// Material category.
    pub category: Category,
    /// Outer diameter [mm].
    pub diameter: f64,
    /// Cross-section area [mm²].
    pub area: f64,
    /// Weight per unit length [kg/m].
    pub weight: f64,
    /// Rated strength [kg].
    pub strength: f64,
    /// DC resistance per unit length at 25 °C [Ω/km].
    pub r25: f64,
    /// Heat capacity [kcal/(ft·°C)].
    pub heat_capacity: f64,
}

impl Conductor {
    /// Validates and extracts the properties the rating engine consumes.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Constraint`] if the record's resistance or
    /// diameter is not strictly positive or the category's temperature
    /// coefficient is outside (0, 1).
    pub fn properties(&self) -> Result<ConductorProperties, RangeError> {
        ConductorProperties::new(
            ohms_per_kilometer(self.r25),
            Length::new::<millimeter>(self.diameter),
            self.category.alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn flint() -> Conductor {
        Conductor {
            name: "AAAC 740,8 MCM FLINT".into(),
            category: Category::aaac(),
            diameter: 25.17,
            area: 375.4,
            weight: 1.035,
            strength: 11625.0,
            r25: 0.089_360,
            heat_capacity: 0.052,
        }
    }

    #[test]
    fn standard_categories() {
        assert_relative_eq!(Category::copper().alpha, 0.00374);
        assert_relative_eq!(Category::aaac().alpha, 0.00340);
        assert_relative_eq!(Category::acar().alpha, 0.00385);
        assert_relative_eq!(Category::acsr().alpha, 0.00395);
        assert_relative_eq!(Category::aluminum().alpha, 0.00395);
        assert_relative_eq!(Category::copperweld().alpha, 0.00380);
        assert_eq!(Category::aaac().name, "AAAC (AASC)");
    }

    #[test]
    fn valid_record_produces_properties() {
        let props = flint().properties().unwrap();
        assert_relative_eq!(props.alpha(), 0.0034);
        assert_relative_eq!(
            props.diameter().get::<millimeter>(),
            25.17,
            max_relative = 1e-12
        );
    }

    #[test]
    fn invalid_record_is_caught_at_the_boundary() {
        let mut record = flint();
        record.r25 = 0.0;
        assert!(matches!(
            record.properties(),
            Err(RangeError::Constraint { name: "r25", .. })
        ));

        let mut record = flint();
        record.diameter = -1.0;
        assert!(matches!(
            record.properties(),
            Err(RangeError::Constraint {
                name: "diameter",
                ..
            })
        ));

        let mut record = flint();
        record.category.alpha = 1.0;
        assert!(matches!(
            record.properties(),
            Err(RangeError::Constraint { name: "alpha", .. })
        ));
    }
}
