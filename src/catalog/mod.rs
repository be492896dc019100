//! Item catalog: the input side of every optimization run.
//!
//! An [`Item`] is immutable once created; its `ratio` field is derived at
//! construction and never recomputed downstream. The [`generator`] produces
//! uniform random catalogs from an explicit RNG, so a fixed seed yields the
//! same catalog every time.

mod generator;
mod item;

pub use generator::{generate_items, GeneratorConfig};
pub use item::{validate_items, InputError, Item};
