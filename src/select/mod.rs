//! Printing selection: availability, preference steps, and replacers.
//!
//! ## Key Types
//!
//! - `Availability`: "can this printing supply N copies?"
//! - `Step`: one stage of fallback preference (per-card candidate lists)
//! - `PreferenceSequence`: tries steps in order, first full success wins
//! - `GroupReplacer`: one-pass, all-or-nothing replacement over a
//!   predicate-selected card group
//! - `ForcedReplacer`: exact basic-land replacement with a hard coverage
//!   contract (`CoverageError`)
//!
//! Everything here is a pure computation over immutable inputs; repeated
//! calls with the same deck, catalog, and salt give identical results.

pub mod availability;
pub mod forced;
pub mod group;
pub mod sequence;
pub mod step;

pub use availability::Availability;
pub use forced::{CoverageError, ForcedReplacer};
pub use group::GroupReplacer;
pub use sequence::{Assignment, PreferenceSequence};
pub use step::Step;
