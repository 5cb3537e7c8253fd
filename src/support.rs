//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints enforced at construction.
//! - [`units`]: Extensions to [`uom`] for quantities it doesn't provide.

pub mod constraint;
pub mod units;
