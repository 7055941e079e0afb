//! Optional pre-processing: payoff normalization and random games.
//!
//! Both helpers live outside the analysis engine on purpose. Normalization
//! is an optional rescaling applied *before* constructing the game a caller
//! actually analyzes; random games exist for benchmarks and property-style
//! tests. The engine's contract never depends on either.

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::analysis::{Game, PayoffTensor, Player};

/// Rescale every player's payoffs to `[0, 1]` with a per-player min-max
/// transform, returning a new game over the same players and shape.
///
/// A constant tensor has no spread to rescale; its entries all map to 0.5.
/// Normalization preserves each player's payoff ordering, so dominance,
/// equilibrium, and best-response results are unchanged; only security
/// *values* are rescaled.
pub fn normalize(game: &Game) -> Game {
    let mut payoffs = FxHashMap::default();
    for player in game.players() {
        let tensor = game
            .tensor(player.id)
            .expect("validated game has a tensor per player");
        let min = tensor.values().iter().cloned().fold(f64::INFINITY, f64::min);
        let max = tensor
            .values()
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let values: Vec<f64> = if max > min {
            tensor
                .values()
                .iter()
                .map(|v| (v - min) / (max - min))
                .collect()
        } else {
            vec![0.5; tensor.values().len()]
        };
        let rescaled = PayoffTensor::new(tensor.shape().to_vec(), values)
            .expect("rescaling keeps the value count");
        payoffs.insert(player.id, rescaled);
    }
    Game::new(game.players().to_vec(), payoffs).expect("normalization preserves validity")
}

/// Generate a random game over the given shape.
///
/// Players get ids `1..=n` and strategy names `s0, s1, ...`; payoffs are
/// drawn uniformly from `[-10, 10]`. Seed the generator for reproducible
/// games.
pub fn random_game<R: Rng>(rng: &mut R, shape: &[usize]) -> Game {
    let players: Vec<Player> = shape
        .iter()
        .enumerate()
        .map(|(position, &count)| {
            let strategies: Vec<String> = (0..count).map(|s| format!("s{}", s)).collect();
            Player::new(position as u32 + 1, strategies)
        })
        .collect();

    let entries: usize = shape.iter().product();
    let mut payoffs = FxHashMap::default();
    for player in &players {
        let values: Vec<f64> = (0..entries).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let tensor =
            PayoffTensor::new(shape.to_vec(), values).expect("generated values fill the shape");
        payoffs.insert(player.id, tensor);
    }
    Game::new(players, payoffs).expect("generated games are well-formed")
}
