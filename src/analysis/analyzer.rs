//! Solution-concept queries over a validated game.
//!
//! [`GameAnalyzer`] borrows a [`Game`] and answers the standard
//! pure-strategy questions about it:
//!
//! - **Dominance**: strictly / weakly dominant strategies per player
//! - **IESDS**: iterated elimination of dominated strategies, with an
//!   optional chronological trace of removals
//! - **Nash equilibria**: exhaustive pure-strategy search
//! - **Pareto optimality**: exhaustive pairwise comparison
//! - **Security level**: maximin value and strategy per player
//! - **Best responses**: payoff maximizers against a fixed rival profile
//!
//! Every query is a pure computation over immutable data: no I/O, no
//! internal state across calls, deterministic results. The Nash and Pareto
//! enumerations fan their outer loop out over rayon; iterations are
//! independent and the order-preserving collect keeps results identical to
//! the sequential scan.
//!
//! Two different dominance checks live here on purpose. The one-shot
//! [`dominant_strategies`](GameAnalyzer::dominant_strategies) query compares
//! strategies over the rivals' *full* strategy ranges, while the check
//! inside elimination restricts both the comparison set and the rival
//! assignments to the currently-active strategies. Conflating them changes
//! results.

use rayon::prelude::*;

use crate::analysis::game::{Game, GameError};
use crate::analysis::report::{Dominance, Elimination, SecurityLevel};
use crate::analysis::tensor::{cartesian_product, full_profiles, PayoffTensor, Profile};

/// Analyzer bound to one game for its lifetime.
///
/// Stateless beyond the borrow; cheap to construct, and multiple analyzers
/// over the same game (including from different threads) are safe.
///
/// # Example
/// ```
/// use normal_form_analyzer::analysis::GameAnalyzer;
/// use normal_form_analyzer::games::classic;
///
/// let game = classic::prisoners_dilemma();
/// let analyzer = GameAnalyzer::new(&game);
/// assert_eq!(analyzer.nash_equilibria(), vec![vec![1, 1]]);
/// ```
pub struct GameAnalyzer<'a> {
    game: &'a Game,
}

impl<'a> GameAnalyzer<'a> {
    /// Bind an analyzer to a validated game.
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// The game this analyzer was built for.
    pub fn game(&self) -> &Game {
        self.game
    }

    /// Strictly and weakly dominant strategies of one player.
    ///
    /// Strategy `s` strictly dominates `t` when `s` pays more than `t` for
    /// every joint assignment of the other players' full strategy ranges;
    /// weakly, when it never pays less and pays more at least once. A
    /// strategy is strictly dominant when it strictly dominates every other
    /// strategy of the player, and reported as weakly dominant when it
    /// weakly dominates every other strategy without being strictly
    /// dominant. The two returned sets are disjoint and ascending.
    ///
    /// A player with a single strategy gets it back as strictly dominant:
    /// the comparison is vacuously satisfied.
    ///
    /// # Errors
    /// [`GameError::UnknownPlayer`] if the id is absent from the game.
    pub fn dominant_strategies(&self, player_id: u32) -> Result<Dominance, GameError> {
        let position = self
            .game
            .player_position(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        let tensor = self.game.tensor_at(position);
        let count = self.game.shape()[position];

        // One rival-assignment enumeration per call; identical results to
        // recomputing it per pairwise comparison.
        let full: Vec<Vec<usize>> = self
            .game
            .shape()
            .iter()
            .map(|&c| (0..c).collect())
            .collect();
        let assignments = rival_assignments(&full, position);

        let mut strict = Vec::new();
        let mut weak = Vec::new();
        for s in 0..count {
            let others = || (0..count).filter(|&t| t != s);
            if others().all(|t| dominates(tensor, position, s, t, &assignments, true)) {
                strict.push(s);
            } else if others().all(|t| dominates(tensor, position, s, t, &assignments, false)) {
                weak.push(s);
            }
        }
        Ok(Dominance { strict, weak })
    }

    /// Iterated elimination of dominated strategies: surviving profiles.
    ///
    /// With `strict = true` only strictly dominated strategies are removed;
    /// otherwise weakly dominated ones are removed too. Returns the
    /// Cartesian product of each player's surviving strategy indices. See
    /// [`elimination_with_trace`](Self::elimination_with_trace) for the
    /// survivors per player and the removal log.
    pub fn elimination(&self, strict: bool) -> Vec<Profile> {
        self.elimination_with_trace(strict).profiles
    }

    /// Iterated elimination with a chronological removal trace.
    ///
    /// Starting from every strategy active, repeatedly removes a strategy
    /// that some *other currently-active* strategy of the same player
    /// dominates, where domination is evaluated only over the rivals'
    /// currently-active strategies. Removals are committed one at a time:
    /// players are visited in player order, a player's active list is
    /// scanned in index order, and after each removal the scan restarts at
    /// the front of that player's list (shrinking the comparison set can
    /// change what is dominated). One trace event is appended per removal.
    ///
    /// A player's last active strategy is never removed, since no other
    /// active strategy remains to dominate it; together with the strictly
    /// shrinking active sets this guarantees termination.
    pub fn elimination_with_trace(&self, strict: bool) -> Elimination {
        let num_players = self.game.num_players();
        let mut active: Vec<Vec<usize>> = self
            .game
            .shape()
            .iter()
            .map(|&count| (0..count).collect())
            .collect();
        let mut trace = Vec::new();

        let mut changed = true;
        while changed {
            changed = false;
            for position in 0..num_players {
                'rescan: loop {
                    if active[position].len() <= 1 {
                        break;
                    }
                    let tensor = self.game.tensor_at(position);
                    let assignments = rival_assignments(&active, position);
                    let dominated_slot = active[position].iter().position(|&candidate| {
                        active[position].iter().any(|&other| {
                            other != candidate
                                && dominates(tensor, position, other, candidate, &assignments, strict)
                        })
                    });
                    match dominated_slot {
                        Some(slot) => {
                            let candidate = active[position][slot];
                            let player = &self.game.players()[position];
                            trace.push(format!(
                                "player {}: removed {}",
                                player.id, player.strategies[candidate]
                            ));
                            active[position].remove(slot);
                            changed = true;
                        }
                        None => break 'rescan,
                    }
                }
            }
        }

        let profiles = cartesian_product(&active);
        Elimination {
            survivors: active,
            profiles,
            trace,
        }
    }

    /// All pure-strategy Nash equilibria.
    ///
    /// Exhaustive check over the full, unreduced profile space: a profile
    /// qualifies iff no player has a unilateral deviation that strictly
    /// increases its payoff. Exponential in player count; intended for
    /// small finite games. Profiles come back in enumeration (odometer)
    /// order; the set may be empty.
    pub fn nash_equilibria(&self) -> Vec<Profile> {
        full_profiles(self.game.shape())
            .par_iter()
            .filter(|profile| self.is_equilibrium(profile))
            .cloned()
            .collect()
    }

    fn is_equilibrium(&self, profile: &[usize]) -> bool {
        let shape = self.game.shape();
        let mut deviation = profile.to_vec();
        for position in 0..shape.len() {
            let tensor = self.game.tensor_at(position);
            let current = tensor.at(profile);
            for s in 0..shape[position] {
                if s == profile[position] {
                    continue;
                }
                deviation[position] = s;
                if tensor.at(&deviation) > current {
                    return false;
                }
            }
            deviation[position] = profile[position];
        }
        true
    }

    /// All Pareto-optimal profiles.
    ///
    /// A profile is Pareto-optimal iff no other profile pays every player
    /// at least as much and some player strictly more. Quadratic pairwise
    /// comparison over the profile space; the result is non-empty whenever
    /// the profile space is.
    pub fn pareto_optimal_profiles(&self) -> Vec<Profile> {
        let profiles = full_profiles(self.game.shape());
        let num_players = self.game.num_players();
        let payoffs: Vec<Vec<f64>> = profiles
            .iter()
            .map(|profile| {
                (0..num_players)
                    .map(|position| self.game.tensor_at(position).at(profile))
                    .collect()
            })
            .collect();

        (0..profiles.len())
            .into_par_iter()
            .filter(|&i| {
                !payoffs
                    .iter()
                    .enumerate()
                    .any(|(j, other)| j != i && pareto_improves(other, &payoffs[i]))
            })
            .map(|i| profiles[i].clone())
            .collect()
    }

    /// Security (maximin) level of one player.
    ///
    /// For each of the player's strategies, the minimum payoff over all
    /// rival combinations is the worst case that strategy guarantees; the
    /// security level is the best of these, with ties broken by the first
    /// strategy index achieving it.
    ///
    /// # Errors
    /// [`GameError::UnknownPlayer`] if the id is absent from the game.
    pub fn security_level(&self, player_id: u32) -> Result<SecurityLevel, GameError> {
        let position = self
            .game
            .player_position(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        let tensor = self.game.tensor_at(position);
        let count = self.game.shape()[position];
        let full: Vec<Vec<usize>> = self
            .game
            .shape()
            .iter()
            .map(|&c| (0..c).collect())
            .collect();
        let assignments = rival_assignments(&full, position);

        let mut best_value = f64::NEG_INFINITY;
        let mut best_strategy = 0;
        let mut scratch: Profile;
        for s in 0..count {
            let mut worst = f64::INFINITY;
            for assignment in &assignments {
                scratch = assignment.clone();
                scratch[position] = s;
                worst = worst.min(tensor.at(&scratch));
            }
            // Strict comparison keeps the first index on ties.
            if worst > best_value {
                best_value = worst;
                best_strategy = s;
            }
        }
        Ok(SecurityLevel {
            value: best_value,
            strategy: best_strategy,
        })
    }

    /// Every best response of one player to a fixed rival profile.
    ///
    /// `others` is the joint assignment of all other players, in player
    /// order with the subject's own slot omitted. Returns every strategy
    /// index tied for the maximum payoff, ascending; never empty for a
    /// player with at least one strategy.
    ///
    /// # Errors
    /// [`GameError::UnknownPlayer`] on a bad id,
    /// [`GameError::ProfileLength`] if `others` does not have exactly one
    /// component per rival, and [`GameError::IndexOutOfRange`] naming the
    /// rival whose component is out of range.
    pub fn best_responses(
        &self,
        player_id: u32,
        others: &[usize],
    ) -> Result<Vec<usize>, GameError> {
        let position = self
            .game
            .player_position(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        let num_players = self.game.num_players();
        if others.len() != num_players - 1 {
            return Err(GameError::ProfileLength {
                expected: num_players - 1,
                received: others.len(),
            });
        }

        // Splice the subject's slot back in, then validate the rivals.
        let mut profile = Vec::with_capacity(num_players);
        profile.extend_from_slice(&others[..position]);
        profile.push(0);
        profile.extend_from_slice(&others[position..]);
        let shape = self.game.shape();
        for (i, (&index, &count)) in profile.iter().zip(shape).enumerate() {
            if i != position && index >= count {
                return Err(GameError::IndexOutOfRange {
                    player: self.game.players()[i].id,
                    index,
                    count,
                });
            }
        }

        let tensor = self.game.tensor_at(position);
        let payoffs: Vec<f64> = (0..shape[position])
            .map(|s| {
                profile[position] = s;
                tensor.at(&profile)
            })
            .collect();
        let best = payoffs.iter().fold(f64::NEG_INFINITY, |acc, &p| acc.max(p));
        Ok(payoffs
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == best)
            .map(|(s, _)| s)
            .collect())
    }
}

/// Joint assignments of every player *except* `position`, expressed as
/// full-length profiles with the subject's slot pinned to a placeholder the
/// caller overwrites. Enumerates the Cartesian product of the other
/// players' given index sets.
fn rival_assignments(sets: &[Vec<usize>], position: usize) -> Vec<Profile> {
    let mut pinned: Vec<Vec<usize>> = sets.to_vec();
    pinned[position] = vec![0];
    cartesian_product(&pinned)
}

/// Does strategy `s` dominate `t` for the player at `position`, over the
/// given rival assignments? `strict` selects strict domination (greater
/// everywhere) versus weak (never less, greater at least once).
fn dominates(
    tensor: &PayoffTensor,
    position: usize,
    s: usize,
    t: usize,
    assignments: &[Profile],
    strict: bool,
) -> bool {
    let mut some_greater = false;
    let mut scratch: Profile;
    for assignment in assignments {
        scratch = assignment.clone();
        scratch[position] = s;
        let payoff_s = tensor.at(&scratch);
        scratch[position] = t;
        let payoff_t = tensor.at(&scratch);
        if strict {
            if payoff_s <= payoff_t {
                return false;
            }
        } else {
            if payoff_s < payoff_t {
                return false;
            }
            if payoff_s > payoff_t {
                some_greater = true;
            }
        }
    }
    strict || some_greater
}

/// Does `candidate` Pareto-improve on `base`: every payoff at least as
/// high, and at least one strictly higher?
fn pareto_improves(candidate: &[f64], base: &[f64]) -> bool {
    candidate.iter().zip(base).all(|(c, b)| c >= b)
        && candidate.iter().zip(base).any(|(c, b)| c > b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::game::Player;
    use crate::analysis::tensor::PayoffTensor;
    use rustc_hash::FxHashMap;

    fn build(players: Vec<Player>, tensors: Vec<(u32, PayoffTensor)>) -> Game {
        let mut payoffs = FxHashMap::default();
        for (id, tensor) in tensors {
            payoffs.insert(id, tensor);
        }
        Game::new(players, payoffs).unwrap()
    }

    fn prisoners_dilemma() -> Game {
        build(
            vec![
                Player::new(1, vec!["Cooperate", "Defect"]),
                Player::new(2, vec!["Cooperate", "Defect"]),
            ],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![3.0, 0.0], vec![5.0, 1.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![3.0, 5.0], vec![0.0, 1.0]]).unwrap(),
                ),
            ],
        )
    }

    fn battle_of_the_sexes() -> Game {
        build(
            vec![
                Player::new(1, vec!["Football", "Shopping"]),
                Player::new(2, vec!["Football", "Shopping"]),
            ],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![3.0, 0.0], vec![0.0, 2.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![2.0, 0.0], vec![0.0, 3.0]]).unwrap(),
                ),
            ],
        )
    }

    fn matching_pennies() -> Game {
        build(
            vec![
                Player::new(1, vec!["Heads", "Tails"]),
                Player::new(2, vec!["Heads", "Tails"]),
            ],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![1.0, -1.0], vec![-1.0, 1.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![-1.0, 1.0], vec![1.0, -1.0]]).unwrap(),
                ),
            ],
        )
    }

    #[test]
    fn test_prisoners_dilemma_dominance() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);
        for id in [1, 2] {
            let dominance = analyzer.dominant_strategies(id).unwrap();
            assert_eq!(dominance.strict, vec![1], "player {}", id);
            assert!(dominance.weak.is_empty());
        }
    }

    #[test]
    fn test_prisoners_dilemma_nash_pareto_security() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);

        assert_eq!(analyzer.nash_equilibria(), vec![vec![1, 1]]);
        assert_eq!(
            analyzer.pareto_optimal_profiles(),
            vec![vec![0, 0], vec![0, 1], vec![1, 0]]
        );

        let security = analyzer.security_level(1).unwrap();
        assert_eq!(security.value, 1.0);
        assert_eq!(security.strategy, 1);
    }

    #[test]
    fn test_prisoners_dilemma_elimination() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);
        let outcome = analyzer.elimination_with_trace(true);
        assert_eq!(outcome.survivors, vec![vec![1], vec![1]]);
        assert_eq!(outcome.profiles, vec![vec![1, 1]]);
        assert_eq!(
            outcome.trace,
            vec![
                "player 1: removed Cooperate".to_string(),
                "player 2: removed Cooperate".to_string(),
            ]
        );
    }

    #[test]
    fn test_battle_of_the_sexes() {
        let game = battle_of_the_sexes();
        let analyzer = GameAnalyzer::new(&game);

        assert_eq!(analyzer.nash_equilibria(), vec![vec![0, 0], vec![1, 1]]);
        for id in [1, 2] {
            let dominance = analyzer.dominant_strategies(id).unwrap();
            assert!(dominance.is_empty(), "player {}", id);
        }
        // Nothing is dominated, so elimination keeps the whole game.
        let outcome = analyzer.elimination_with_trace(true);
        assert_eq!(outcome.survivors, vec![vec![0, 1], vec![0, 1]]);
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn test_matching_pennies_has_no_pure_equilibrium() {
        let game = matching_pennies();
        let analyzer = GameAnalyzer::new(&game);
        assert!(analyzer.nash_equilibria().is_empty());
        // Zero-sum: every profile is Pareto-optimal.
        assert_eq!(analyzer.pareto_optimal_profiles().len(), 4);
    }

    #[test]
    fn test_sole_strategy_is_vacuously_strictly_dominant() {
        let game = build(
            vec![Player::new(1, vec!["Only"]), Player::new(2, vec!["x", "y"])],
            vec![
                (1, PayoffTensor::from_rows(&[vec![0.0, 1.0]]).unwrap()),
                (2, PayoffTensor::from_rows(&[vec![0.0, 1.0]]).unwrap()),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);
        let dominance = analyzer.dominant_strategies(1).unwrap();
        assert_eq!(dominance.strict, vec![0]);
        assert!(dominance.weak.is_empty());
    }

    #[test]
    fn test_weak_dominance_reported_separately() {
        // Player 1's first strategy never pays less and pays more once, but
        // is not strictly dominant.
        let game = build(
            vec![Player::new(1, vec!["a", "b"]), Player::new(2, vec!["x", "y"])],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![1.0, 1.0], vec![1.0, 0.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap(),
                ),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);
        let dominance = analyzer.dominant_strategies(1).unwrap();
        assert!(dominance.strict.is_empty());
        assert_eq!(dominance.weak, vec![0]);

        // Strict elimination removes nothing; weak elimination drops "b".
        assert_eq!(analyzer.elimination(true), full_profiles(&[2, 2]));
        let weak = analyzer.elimination_with_trace(false);
        assert_eq!(weak.survivors, vec![vec![0], vec![0, 1]]);
        assert_eq!(weak.trace, vec!["player 1: removed b".to_string()]);
    }

    #[test]
    fn test_elimination_restricts_to_active_rivals() {
        // Up/Down vs Left/Middle/Right. In the full game neither of player
        // 1's strategies dominates the other (Up wins big at Middle), but
        // once Middle and Right fall, Down dominates Up.
        let game = build(
            vec![
                Player::new(1, vec!["Up", "Down"]),
                Player::new(2, vec!["Left", "Middle", "Right"]),
            ],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![1.0, 5.0, 1.0], vec![2.0, 0.0, 2.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![2.0, 0.0, 1.0], vec![2.0, 0.0, 1.0]]).unwrap(),
                ),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);

        // One-shot dominance for player 1 sees the full game: nothing.
        assert!(analyzer.dominant_strategies(1).unwrap().is_empty());

        let outcome = analyzer.elimination_with_trace(true);
        assert_eq!(outcome.survivors, vec![vec![1], vec![0]]);
        assert_eq!(
            outcome.trace,
            vec![
                "player 2: removed Middle".to_string(),
                "player 2: removed Right".to_string(),
                "player 1: removed Up".to_string(),
            ]
        );
        assert_eq!(analyzer.nash_equilibria(), vec![vec![1, 0]]);
    }

    #[test]
    fn test_elimination_rescans_after_each_removal() {
        // Player 1's strategies are totally ordered; the trace must show
        // them falling one at a time, weakest first.
        let game = build(
            vec![
                Player::new(1, vec!["low", "mid", "high"]),
                Player::new(2, vec!["x", "y"]),
            ],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[
                        vec![1.0, 1.0],
                        vec![2.0, 2.0],
                        vec![3.0, 3.0],
                    ])
                    .unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[
                        vec![0.0, 0.0],
                        vec![0.0, 0.0],
                        vec![0.0, 0.0],
                    ])
                    .unwrap(),
                ),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);
        let outcome = analyzer.elimination_with_trace(true);
        assert_eq!(outcome.survivors, vec![vec![2], vec![0, 1]]);
        assert_eq!(
            outcome.trace,
            vec![
                "player 1: removed low".to_string(),
                "player 1: removed mid".to_string(),
            ]
        );
    }

    #[test]
    fn test_elimination_never_removes_last_strategy() {
        let game = build(
            vec![Player::new(1, vec!["Only"]), Player::new(2, vec!["x", "y"])],
            vec![
                (1, PayoffTensor::from_rows(&[vec![0.0, 0.0]]).unwrap()),
                (2, PayoffTensor::from_rows(&[vec![5.0, 1.0]]).unwrap()),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);
        let outcome = analyzer.elimination_with_trace(true);
        assert_eq!(outcome.survivors, vec![vec![0], vec![0]]);
        assert_eq!(outcome.trace, vec!["player 2: removed y".to_string()]);
    }

    #[test]
    fn test_three_player_coordination() {
        // Everyone gets 1 iff all three pick the same strategy.
        let mut values = vec![0.0; 8];
        values[0] = 1.0; // (0, 0, 0)
        values[7] = 1.0; // (1, 1, 1)
        let tensor = PayoffTensor::new(vec![2, 2, 2], values).unwrap();
        let game = build(
            vec![
                Player::new(1, vec!["a", "b"]),
                Player::new(2, vec!["a", "b"]),
                Player::new(3, vec!["a", "b"]),
            ],
            vec![(1, tensor.clone()), (2, tensor.clone()), (3, tensor)],
        );
        let analyzer = GameAnalyzer::new(&game);
        assert_eq!(
            analyzer.nash_equilibria(),
            vec![vec![0, 0, 0], vec![1, 1, 1]]
        );
        assert!(analyzer.dominant_strategies(2).unwrap().is_empty());
        let pareto = analyzer.pareto_optimal_profiles();
        assert_eq!(pareto, vec![vec![0, 0, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_best_responses() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);
        // Whatever player 2 does, Defect is the unique best response.
        assert_eq!(analyzer.best_responses(1, &[0]).unwrap(), vec![1]);
        assert_eq!(analyzer.best_responses(1, &[1]).unwrap(), vec![1]);
        assert_eq!(analyzer.best_responses(2, &[0]).unwrap(), vec![1]);
    }

    #[test]
    fn test_best_responses_include_all_ties() {
        let game = build(
            vec![Player::new(1, vec!["a", "b"]), Player::new(2, vec!["x", "y"])],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![2.0, 0.0], vec![2.0, 5.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap(),
                ),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);
        assert_eq!(analyzer.best_responses(1, &[0]).unwrap(), vec![0, 1]);
        assert_eq!(analyzer.best_responses(1, &[1]).unwrap(), vec![1]);
    }

    #[test]
    fn test_best_responses_validation() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);
        assert_eq!(
            analyzer.best_responses(7, &[0]).unwrap_err(),
            GameError::UnknownPlayer(7)
        );
        assert_eq!(
            analyzer.best_responses(1, &[0, 1]).unwrap_err(),
            GameError::ProfileLength {
                expected: 1,
                received: 2
            }
        );
        assert_eq!(
            analyzer.best_responses(1, &[5]).unwrap_err(),
            GameError::IndexOutOfRange {
                player: 2,
                index: 5,
                count: 2
            }
        );
    }

    #[test]
    fn test_security_level_tie_breaks_to_first_index() {
        let game = build(
            vec![Player::new(1, vec!["a", "b"]), Player::new(2, vec!["x", "y"])],
            vec![
                (
                    1,
                    PayoffTensor::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap(),
                ),
                (
                    2,
                    PayoffTensor::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap(),
                ),
            ],
        );
        let analyzer = GameAnalyzer::new(&game);
        let security = analyzer.security_level(1).unwrap();
        assert_eq!(security.value, 1.0);
        assert_eq!(security.strategy, 0);
    }

    #[test]
    fn test_unknown_player_errors() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);
        assert_eq!(
            analyzer.dominant_strategies(42).unwrap_err(),
            GameError::UnknownPlayer(42)
        );
        assert_eq!(
            analyzer.security_level(42).unwrap_err(),
            GameError::UnknownPlayer(42)
        );
    }

    #[test]
    fn test_queries_are_deterministic() {
        let game = prisoners_dilemma();
        let analyzer = GameAnalyzer::new(&game);
        assert_eq!(analyzer.nash_equilibria(), analyzer.nash_equilibria());
        assert_eq!(
            analyzer.pareto_optimal_profiles(),
            analyzer.pareto_optimal_profiles()
        );
        assert_eq!(
            analyzer.elimination_with_trace(true),
            analyzer.elimination_with_trace(true)
        );
    }
}
