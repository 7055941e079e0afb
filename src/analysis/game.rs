//! Game model: players, payoff tensors, and eager validation.
//!
//! A [`Game`] is the validated problem instance every analysis query runs
//! against. Construction is the sole validation gate: once `Game::new`
//! returns `Ok`, every player's tensor is known to share the common shape
//! (strategy counts in player order) and queries never re-validate it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::tensor::PayoffTensor;

/// Errors raised by game construction and lookups.
///
/// These are programming/input errors, never transient failures: they are
/// surfaced immediately to the caller, with no retry and no partial results.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A payoff tensor's dimensionality or per-dimension lengths disagree
    /// with the shape derived from the players' strategy counts.
    ShapeMismatch {
        /// Player whose tensor is misshapen.
        player: u32,
        /// Strategy counts in player order.
        expected: Vec<usize>,
        /// Shape the tensor actually has.
        received: Vec<usize>,
    },
    /// A query referenced a player id absent from the game.
    UnknownPlayer(u32),
    /// A strategy index outside `[0, count)` was used in a profile or lookup.
    IndexOutOfRange {
        /// Player the index belongs to.
        player: u32,
        /// The offending index.
        index: usize,
        /// That player's strategy count.
        count: usize,
    },
    /// A tensor's flat value count does not match its declared shape.
    TensorSize {
        /// Values the shape requires.
        expected: usize,
        /// Values actually supplied.
        received: usize,
    },
    /// A joint profile (or opponents' profile) has the wrong arity.
    ProfileLength {
        /// Components required.
        expected: usize,
        /// Components supplied.
        received: usize,
    },
    /// Two players were declared with the same id.
    DuplicatePlayer(u32),
    /// A player has id 0 or an empty strategy list.
    InvalidPlayer(u32),
    /// No payoff tensor was supplied for a declared player.
    MissingPayoffs(u32),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ShapeMismatch {
                player,
                expected,
                received,
            } => write!(
                f,
                "payoff tensor for player {} has shape {:?}, expected {:?}",
                player, received, expected
            ),
            GameError::UnknownPlayer(id) => write!(f, "no player with id {}", id),
            GameError::IndexOutOfRange {
                player,
                index,
                count,
            } => write!(
                f,
                "strategy index {} out of range for player {} ({} strategies)",
                index, player, count
            ),
            GameError::TensorSize { expected, received } => write!(
                f,
                "tensor holds {} values, its shape requires {}",
                received, expected
            ),
            GameError::ProfileLength { expected, received } => write!(
                f,
                "profile has {} components, expected {}",
                received, expected
            ),
            GameError::DuplicatePlayer(id) => write!(f, "duplicate player id {}", id),
            GameError::InvalidPlayer(id) => write!(
                f,
                "player {} must have a positive id and at least one strategy",
                id
            ),
            GameError::MissingPayoffs(id) => {
                write!(f, "no payoff tensor supplied for player {}", id)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A player: a positive identifier and an ordered list of strategy names.
///
/// Position in the list is the strategy's index everywhere in the engine;
/// the names themselves are display metadata only. Immutable once built and
/// owned exclusively by the [`Game`] that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identifier, unique within a game.
    pub id: u32,
    /// Ordered strategy names; position is the strategy index.
    pub strategies: Vec<String>,
}

impl Player {
    /// Create a player from an id and strategy names.
    pub fn new<S: Into<String>>(id: u32, strategies: Vec<S>) -> Self {
        Self {
            id,
            strategies: strategies.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of strategies this player has.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} ({} strategies)", self.id, self.strategies.len())
    }
}

/// A validated finite normal-form game.
///
/// Player order defines the dimension order of every payoff tensor and the
/// position of each player's component within a joint strategy profile.
/// The game exclusively owns its players and tensors and is immutable after
/// construction, so sharing `&Game` across threads needs no locking.
#[derive(Debug, Clone)]
pub struct Game {
    /// Players in order; order is load-bearing (see above).
    players: Vec<Player>,
    /// Payoff tensor per player id, all sharing the common shape.
    payoffs: FxHashMap<u32, PayoffTensor>,
    /// Strategy counts in player order, cached at construction.
    shape: Vec<usize>,
}

impl Game {
    /// Build a game from players and per-player payoff tensors.
    ///
    /// Validation is eager; no query may run against an invalid game.
    ///
    /// # Errors
    /// - [`GameError::DuplicatePlayer`] if two players share an id
    /// - [`GameError::InvalidPlayer`] on id 0 or an empty strategy list
    /// - [`GameError::MissingPayoffs`] if a player has no tensor
    /// - [`GameError::UnknownPlayer`] if a tensor's id matches no player
    /// - [`GameError::ShapeMismatch`] if any tensor's shape differs from the
    ///   vector of strategy counts in player order
    pub fn new(
        players: Vec<Player>,
        payoffs: FxHashMap<u32, PayoffTensor>,
    ) -> Result<Self, GameError> {
        let mut seen = Vec::with_capacity(players.len());
        for player in &players {
            if player.id == 0 || player.strategies.is_empty() {
                return Err(GameError::InvalidPlayer(player.id));
            }
            if seen.contains(&player.id) {
                return Err(GameError::DuplicatePlayer(player.id));
            }
            seen.push(player.id);
        }

        for player in &players {
            if !payoffs.contains_key(&player.id) {
                return Err(GameError::MissingPayoffs(player.id));
            }
        }
        for &id in payoffs.keys() {
            if !seen.contains(&id) {
                return Err(GameError::UnknownPlayer(id));
            }
        }

        let shape: Vec<usize> = players.iter().map(Player::strategy_count).collect();
        for player in &players {
            let tensor = &payoffs[&player.id];
            if tensor.shape() != shape.as_slice() {
                return Err(GameError::ShapeMismatch {
                    player: player.id,
                    expected: shape.clone(),
                    received: tensor.shape().to_vec(),
                });
            }
        }

        Ok(Self {
            players,
            payoffs,
            shape,
        })
    }

    /// Players in order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Strategy counts in player order (the common tensor shape).
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The player with the given id, if any.
    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Position of a player within player order, if the id exists.
    pub fn player_position(&self, id: u32) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// The payoff tensor owned by a player, if the id exists.
    pub fn tensor(&self, id: u32) -> Option<&PayoffTensor> {
        self.payoffs.get(&id)
    }

    /// Tensor of the player at a given position in player order.
    ///
    /// Positions come from enumeration over `players()`, so the lookups
    /// cannot miss on a validated game.
    pub(crate) fn tensor_at(&self, position: usize) -> &PayoffTensor {
        &self.payoffs[&self.players[position].id]
    }

    /// Resolve a strategy's display name.
    ///
    /// # Errors
    /// [`GameError::UnknownPlayer`] if the id is absent,
    /// [`GameError::IndexOutOfRange`] on a bad index (defensive: the index
    /// is reported rather than reading garbage).
    pub fn strategy_name(&self, player_id: u32, index: usize) -> Result<&str, GameError> {
        let player = self
            .player(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        player
            .strategies
            .get(index)
            .map(String::as_str)
            .ok_or(GameError::IndexOutOfRange {
                player: player_id,
                index,
                count: player.strategies.len(),
            })
    }

    /// A player's payoff at a joint profile, fully validated.
    ///
    /// # Errors
    /// [`GameError::UnknownPlayer`], [`GameError::ProfileLength`], or
    /// [`GameError::IndexOutOfRange`] naming the offending component.
    pub fn payoff(&self, player_id: u32, profile: &[usize]) -> Result<f64, GameError> {
        let tensor = self
            .tensor(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        if profile.len() != self.players.len() {
            return Err(GameError::ProfileLength {
                expected: self.players.len(),
                received: profile.len(),
            });
        }
        for (position, (&index, &count)) in profile.iter().zip(&self.shape).enumerate() {
            if index >= count {
                return Err(GameError::IndexOutOfRange {
                    player: self.players[position].id,
                    index,
                    count,
                });
            }
        }
        Ok(tensor.at(profile))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "game with {} players, shape {:?}",
            self.players.len(),
            self.shape
        )
    }
}

/// Serializable construction input for a [`Game`].
///
/// This is the external construction surface: a display layer, catalog, or
/// JSON file supplies players (in order) and one flat row-major payoff
/// tensor per player over the shared shape.
///
/// # Example
/// ```
/// use normal_form_analyzer::analysis::{GameSpec, PayoffSpec, Player};
///
/// let spec = GameSpec {
///     players: vec![
///         Player::new(1, vec!["Cooperate", "Defect"]),
///         Player::new(2, vec!["Cooperate", "Defect"]),
///     ],
///     payoffs: vec![
///         PayoffSpec { player: 1, values: vec![3.0, 0.0, 5.0, 1.0] },
///         PayoffSpec { player: 2, values: vec![3.0, 5.0, 0.0, 1.0] },
///     ],
/// };
/// let game = spec.build().unwrap();
/// assert_eq!(game.shape(), &[2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSpec {
    /// Players in order.
    pub players: Vec<Player>,
    /// One payoff entry per player.
    pub payoffs: Vec<PayoffSpec>,
}

/// Flat row-major payoff values for one player, part of a [`GameSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSpec {
    /// Id of the player these payoffs belong to.
    pub player: u32,
    /// Row-major values over the shared shape.
    pub values: Vec<f64>,
}

impl GameSpec {
    /// Validate the spec and build the game.
    ///
    /// # Errors
    /// Everything [`Game::new`] raises, plus [`GameError::TensorSize`] when
    /// a value list cannot fill the shared shape and
    /// [`GameError::DuplicatePlayer`] on a repeated payoff entry.
    pub fn build(&self) -> Result<Game, GameError> {
        let shape: Vec<usize> = self.players.iter().map(Player::strategy_count).collect();
        let mut payoffs = FxHashMap::default();
        for entry in &self.payoffs {
            let tensor = PayoffTensor::new(shape.clone(), entry.values.clone())?;
            if payoffs.insert(entry.player, tensor).is_some() {
                return Err(GameError::DuplicatePlayer(entry.player));
            }
        }
        Game::new(self.players.clone(), payoffs)
    }
}
