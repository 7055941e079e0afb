//! Plain-data result types returned by the analyzer.
//!
//! Every query returns sets and sequences of strategy indices, numbers, or
//! name strings with no rendering concerns; a display layer decides how to
//! present them. The types are serde-serializable so callers can persist or
//! ship reports as JSON.

use serde::{Deserialize, Serialize};

use crate::analysis::tensor::Profile;

/// Dominant strategies of one player, split by dominance strength.
///
/// The two sets are disjoint: a strictly dominant strategy appears only in
/// `strict`, and `weak` holds strategies that are weakly but not strictly
/// dominant. Both are in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dominance {
    /// Strategies strictly dominating every other strategy of the player.
    pub strict: Vec<usize>,
    /// Strategies weakly dominating every other strategy, minus `strict`.
    pub weak: Vec<usize>,
}

impl Dominance {
    /// True when the player has no dominant strategy of either strength.
    pub fn is_empty(&self) -> bool {
        self.strict.is_empty() && self.weak.is_empty()
    }
}

/// Outcome of iterated elimination of dominated strategies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elimination {
    /// Surviving strategy indices per player, in player order, each set in
    /// ascending index order.
    pub survivors: Vec<Vec<usize>>,
    /// Cartesian product of the surviving sets, in odometer order.
    pub profiles: Vec<Profile>,
    /// One human-readable event per removal, in the exact order removal
    /// decisions were committed (`"player <id>: removed <strategy-name>"`).
    pub trace: Vec<String>,
}

/// A player's security (maximin) level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityLevel {
    /// The best worst-case payoff the player can guarantee.
    pub value: f64,
    /// A strategy achieving it (first such index on ties).
    pub strategy: usize,
}

/// Per-player slice of a full analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    /// The player's id.
    pub player: u32,
    /// Dominant strategies.
    pub dominance: Dominance,
    /// Security level.
    pub security: SecurityLevel,
}

/// Everything the analyzer can say about one game, bundled for callers that
/// want a single serializable artifact (the CLI's `--json` output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Per-player dominance and security results, in player order.
    pub players: Vec<PlayerReport>,
    /// Pure-strategy Nash equilibria.
    pub nash_equilibria: Vec<Profile>,
    /// Pareto-optimal profiles.
    pub pareto_optimal: Vec<Profile>,
    /// Iterated elimination of strictly dominated strategies.
    pub elimination_strict: Elimination,
    /// Iterated elimination of weakly dominated strategies.
    pub elimination_weak: Elimination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_is_empty() {
        assert!(Dominance::default().is_empty());
        let d = Dominance {
            strict: vec![1],
            weak: vec![],
        };
        assert!(!d.is_empty());
    }

    #[test]
    fn test_elimination_serde_round_trip() {
        let e = Elimination {
            survivors: vec![vec![1], vec![0, 1]],
            profiles: vec![vec![1, 0], vec![1, 1]],
            trace: vec!["player 1: removed Cooperate".to_string()],
        };
        let json = serde_json::to_string(&e).unwrap();
        let parsed: Elimination = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, e);
    }
}
