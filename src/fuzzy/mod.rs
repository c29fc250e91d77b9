//! Approximate lookup: every stored word within an edit budget of a query.
//!
//! Edits are priced by a [`CostFn`]. [`UnitCost`] gives classic Levenshtein
//! distance; [`CostTable`] or any `Fn(Operation) -> u32` gives weighted
//! variants.

/// Edit operations and their pricing.
pub mod cost;
pub mod distance;
pub mod search;

pub use cost::{CostFn, CostTable, Operation, UnitCost};
pub use distance::edit_distance;
pub use search::{search, FuzzySearch};
