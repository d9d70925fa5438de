//! Alert Record Types and Normalization
//!
//! Raw upstream records are consumed tolerantly (every field optional,
//! unknown fields ignored) and mapped to display-ready cards through an
//! explicit, total normalization step.

mod card;
mod record;

pub use card::{normalize_batch, AlertCard};
pub use record::{AlertId, RawAlert};
