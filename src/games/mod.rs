//! Game sources and pre-processing around the analysis engine.
//!
//! The engine in [`crate::analysis`] only consumes a validated `Game`; this
//! module holds the collaborators that produce one:
//!
//! - [`classic`]: a catalog of predefined textbook games, looked up by name
//! - [`prep`]: optional payoff normalization and random game generation
//!
//! Nothing in the engine depends on this module.

pub mod classic;
pub mod prep;
