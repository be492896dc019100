//! Solver output types shared by every strategy.
//!
//! [`SelectionResult`] is the raw answer (which items, summed weight and
//! value). [`Summary`] is the derived, read-only view the dispatcher hands
//! back to callers and the report serializes.

mod selection;
mod summary;

pub use selection::SelectionResult;
pub use summary::Summary;
