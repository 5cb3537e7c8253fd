//! Public conductor models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules based on an
//! opinionated taxonomy. [`conductor`] holds everything for bare overhead
//! conductors; the organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module. Where a model is useful as a
//! component in a larger system, a thin [`twine_core::Model`]
//! implementation is provided that delegates to the model's own API.

pub mod conductor;
