//! Normal-form game analysis engine.
//!
//! This module is the core of the crate: a validated data model for finite
//! strategic games and the pure-strategy solution-concept queries over it.
//!
//! # Overview
//!
//! A caller:
//!
//! 1. Builds a [`Game`] from players and payoff tensors (directly, through
//!    a serializable [`GameSpec`], or via a catalog) — validation happens
//!    here and only here.
//! 2. Binds a [`GameAnalyzer`] to the game.
//! 3. Invokes any of the independent queries: dominance, iterated
//!    elimination, Nash equilibria, Pareto optimality, security levels,
//!    best responses.
//!
//! Queries return plain data ([`report`] types, index sets, profiles) and
//! never mutate the game; a game plus any number of analyzers can be shared
//! freely across threads.
//!
//! # Scope
//!
//! Pure strategies over fully specified finite numeric payoffs only: no
//! mixed-strategy computation, no extensive-form games, no learning
//! dynamics, no Bayesian games.

pub mod analyzer;
pub mod game;
pub mod report;
pub mod tensor;

// Re-export main types for convenient access
pub use analyzer::GameAnalyzer;
pub use game::{Game, GameError, GameSpec, PayoffSpec, Player};
pub use report::{AnalysisReport, Dominance, Elimination, PlayerReport, SecurityLevel};
pub use tensor::{cartesian_product, full_profiles, PayoffTensor, Profile};
