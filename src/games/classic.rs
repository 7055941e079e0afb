//! Catalog of predefined classic games.
//!
//! These serve as:
//!
//! 1. **Validation**: games with textbook solutions (the prisoner's dilemma
//!    has one equilibrium at mutual defection, battle of the sexes has two,
//!    matching pennies has none in pure strategies) verify the analyzer.
//!
//! 2. **Examples**: show how to assemble players and payoff tensors.
//!
//! 3. **Demos**: the `analyze` binary loads catalog entries by name.
//!
//! The engine has no dependency on this module; it is one possible source
//! of construction input among any others a caller might use.

use rustc_hash::FxHashMap;

use crate::analysis::{Game, PayoffTensor, Player};

/// Catalog entry names accepted by [`by_name`].
pub const NAMES: [&str; 3] = ["prisoners_dilemma", "battle_of_the_sexes", "matching_pennies"];

/// Look up a catalog game by name. Returns `None` for unknown names.
pub fn by_name(name: &str) -> Option<Game> {
    match name {
        "prisoners_dilemma" => Some(prisoners_dilemma()),
        "battle_of_the_sexes" => Some(battle_of_the_sexes()),
        "matching_pennies" => Some(matching_pennies()),
        _ => None,
    }
}

/// The classic 2×2 prisoner's dilemma.
///
/// Strategy 0 is Cooperate, 1 is Defect. Row player payoffs
/// `[[3, 0], [5, 1]]`, column player `[[3, 5], [0, 1]]`: defection strictly
/// dominates, and mutual defection is the unique (and Pareto-dominated)
/// equilibrium.
pub fn prisoners_dilemma() -> Game {
    build_two_player(
        vec!["Cooperate", "Defect"],
        vec!["Cooperate", "Defect"],
        &[vec![3.0, 0.0], vec![5.0, 1.0]],
        &[vec![3.0, 5.0], vec![0.0, 1.0]],
    )
}

/// Battle of the sexes: a 2×2 coordination game.
///
/// Both players prefer coordinating over missing each other, but disagree
/// on where; both coordinated profiles are equilibria, neither player has a
/// dominant strategy.
pub fn battle_of_the_sexes() -> Game {
    build_two_player(
        vec!["Football", "Shopping"],
        vec!["Football", "Shopping"],
        &[vec![3.0, 0.0], vec![0.0, 2.0]],
        &[vec![2.0, 0.0], vec![0.0, 3.0]],
    )
}

/// Matching pennies: a zero-sum 2×2 game with no pure-strategy equilibrium.
pub fn matching_pennies() -> Game {
    build_two_player(
        vec!["Heads", "Tails"],
        vec!["Heads", "Tails"],
        &[vec![1.0, -1.0], vec![-1.0, 1.0]],
        &[vec![-1.0, 1.0], vec![1.0, -1.0]],
    )
}

fn build_two_player(
    row_strategies: Vec<&str>,
    col_strategies: Vec<&str>,
    row_payoffs: &[Vec<f64>],
    col_payoffs: &[Vec<f64>],
) -> Game {
    let mut payoffs = FxHashMap::default();
    payoffs.insert(1, PayoffTensor::from_rows(row_payoffs).expect("catalog payoff rows"));
    payoffs.insert(2, PayoffTensor::from_rows(col_payoffs).expect("catalog payoff rows"));
    Game::new(
        vec![Player::new(1, row_strategies), Player::new(2, col_strategies)],
        payoffs,
    )
    .expect("catalog games are well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::GameAnalyzer;

    #[test]
    fn test_every_name_resolves() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "{}", name);
        }
        assert!(by_name("chicken").is_none());
    }

    #[test]
    fn test_prisoners_dilemma_payoffs() {
        let game = prisoners_dilemma();
        assert_eq!(game.payoff(1, &[1, 0]).unwrap(), 5.0);
        assert_eq!(game.payoff(2, &[1, 0]).unwrap(), 0.0);
        assert_eq!(game.strategy_name(1, 1).unwrap(), "Defect");
    }

    #[test]
    fn test_catalog_games_have_textbook_solutions() {
        let pd = prisoners_dilemma();
        assert_eq!(GameAnalyzer::new(&pd).nash_equilibria(), vec![vec![1, 1]]);

        let bos = battle_of_the_sexes();
        assert_eq!(
            GameAnalyzer::new(&bos).nash_equilibria(),
            vec![vec![0, 0], vec![1, 1]]
        );

        let pennies = matching_pennies();
        assert!(GameAnalyzer::new(&pennies).nash_equilibria().is_empty());
    }
}
