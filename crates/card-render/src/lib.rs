//! Alert Card Rendering
//!
//! Builds HTML fragments from normalized alert cards and holds them in a
//! named container registry shared with the page server. Containers have
//! full-replace semantics; a render cycle never appends to what a previous
//! cycle produced.

mod registry;
mod render;

pub use registry::{ContainerRegistry, ALERTS_CONTAINER};
pub use render::{render_cards, render_error};
