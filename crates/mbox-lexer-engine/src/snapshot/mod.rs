//! # Snapshot Testing Support
//!
//! Utilities for testing lex passes via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a [`LexPass`](crate::lexer::LexPass) to a stable,
//!   line-oriented `Snap` whose `Display` form is what `insta` snapshots store
//! - **`invariants`**: Runtime checks for lexer correctness (totality of both
//!   tables, the run rule, style coverage of the requested range)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{LineSnap, Snap, normalize};
