//! # Ampacity Models
//!
//! Steady-state thermal rating models for bare overhead electrical
//! conductors.
//!
//! The crate answers the questions a line engineer asks when rating a
//! transmission or distribution conductor:
//!
//! - What is the conductor's resistance at a given temperature?
//! - How much current does it carry at steady state for a given ambient
//!   and conductor temperature?
//! - Inversely, what conductor temperature does a given current produce,
//!   and what ambient temperature is consistent with a given current and
//!   conductor temperature?
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific conductor models, the primary public API.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
