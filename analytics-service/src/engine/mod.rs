//! The metrics engine: pure, deterministic transformations of the record
//! catalog into the derived views the dashboard shows.
//!
//! Every function here is total over well-formed input. Missing months read
//! as 0, missing collections as empty; data-quality oddities in the source
//! (negative loss, efficiency above 100 %, inlet composition that does not
//! sum to 100 %) are domain values to surface, not errors to reject.

pub mod contracts;
pub mod electricity;
pub mod stp;
pub mod trend;
pub mod water;
