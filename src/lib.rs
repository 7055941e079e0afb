//! # Normal-Form Analyzer
//!
//! An analysis engine for finite normal-form strategic games: players with
//! finite strategy sets and one payoff tensor each, queried for the
//! standard pure-strategy solution concepts.
//!
//! ## Features
//!
//! - **Validated Game Model**: N-player games with per-player payoff
//!   tensors, shape-checked eagerly at construction
//! - **Dominance**: strictly and weakly dominant strategies per player
//! - **IESDS**: iterated elimination of dominated strategies with a
//!   reproducible removal trace
//! - **Nash Equilibria**: exhaustive pure-strategy search
//! - **Pareto Optimality**: exhaustive pairwise profile comparison
//! - **Security Levels**: maximin value and strategy per player
//! - **Best Responses**: all payoff maximizers against a fixed rival profile
//!
//! ## Quick Start
//!
//! ```
//! use normal_form_analyzer::analysis::GameAnalyzer;
//! use normal_form_analyzer::games::classic;
//!
//! // 1. Build a game (catalog entry, GameSpec JSON, or by hand)
//! let game = classic::prisoners_dilemma();
//!
//! // 2. Bind an analyzer
//! let analyzer = GameAnalyzer::new(&game);
//!
//! // 3. Query solution concepts independently
//! assert_eq!(analyzer.nash_equilibria(), vec![vec![1, 1]]);
//! assert_eq!(analyzer.dominant_strategies(1).unwrap().strict, vec![1]);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`]: the data model and all solution-concept queries
//! - [`games`]: catalog of classic games and optional pre-processing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 GameAnalyzer (queries)                  │
//! │  - Dominance      - IESDS + trace    - Nash equilibria  │
//! │  - Pareto set     - Security level   - Best responses   │
//! └─────────────────────────────────────────────────────────┘
//!                             │
//!                             │ borrows a validated
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │            Game (players + payoff tensors)              │
//! │   shape-checked at construction, immutable afterwards   │
//! └─────────────────────────────────────────────────────────┘
//!                             ▲
//!          ┌──────────────────┼──────────────────┐
//!          │                  │                  │
//!    ┌───────────┐     ┌────────────┐     ┌────────────┐
//!    │  classic  │     │  GameSpec  │     │  by hand   │
//!    │  catalog  │     │   (JSON)   │     │            │
//!    └───────────┘     └────────────┘     └────────────┘
//! ```
//!
//! Everything is pure and synchronous: queries terminate on any finite
//! game, never perform I/O, and are safe to run concurrently over a shared
//! `Game`.

#![warn(missing_docs)]

/// Analysis engine module.
///
/// This is the core module containing the game model and all queries.
pub mod analysis;

/// Game sources module.
///
/// Contains the classic-game catalog and optional pre-processing helpers.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use analysis::{
    Dominance, Elimination, Game, GameAnalyzer, GameError, GameSpec, PayoffTensor, Player,
    Profile, SecurityLevel,
};
