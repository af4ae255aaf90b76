//! Game state and core simulation types
//!
//! Everything the renderer reads each frame lives here. State is a plain
//! value: the reducer never mutates its input.

use std::collections::BTreeSet;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::map::GameMap;
use crate::consts::*;
use crate::settings::Controls;

/// Current screen of the game flow
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// Title screen, vocabulary can still be edited
    #[default]
    Start,
    /// Active gameplay
    Active,
    /// Game is paused
    Paused,
    /// A pickup revealed a word
    ShowingNewWord { word: VocabWord },
    /// End-of-level review; words are removed as they are graded
    ShowingLevelReview { words: Vec<VocabWord> },
}

impl Status {
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

/// One vocabulary entry supplied by the vocabulary collaborator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VocabWord {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    /// Source text the word was found in
    pub context: String,
}

impl VocabWord {
    pub fn new(word: &str, pronunciation: &str, meaning: &str, context: &str) -> Self {
        Self {
            word: word.to_string(),
            pronunciation: pronunciation.to_string(),
            meaning: meaning.to_string(),
            context: context.to_string(),
        }
    }

    /// Entry carrying only the word itself (no dictionary data found)
    pub fn bare(word: &str) -> Self {
        Self {
            word: word.to_string(),
            ..Default::default()
        }
    }
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub size: i32,
    pub health: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::at(IVec2::ZERO)
    }
}

impl Player {
    pub fn at(pos: IVec2) -> Self {
        Self {
            pos,
            size: BLOCK_SIZE,
            health: MAX_HEALTH,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_tile(self.pos, self.size)
    }
}

/// A monster; stays on the map at zero health until picked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub pos: IVec2,
    pub size: i32,
    pub health: i32,
    /// Point the monster is walking toward
    pub target: Option<IVec2>,
}

impl Monster {
    pub fn at(pos: IVec2) -> Self {
        Self {
            pos,
            size: BLOCK_SIZE,
            health: MAX_HEALTH,
            target: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_tile(self.pos, self.size)
    }
}

/// A bullet; velocity is fixed at spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub size: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: BULLET_SIZE,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A static map tile (wall or exit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub pos: IVec2,
    pub size: i32,
}

impl Tile {
    pub fn at(pos: IVec2) -> Self {
        Self {
            pos,
            size: BLOCK_SIZE,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_tile(self.pos, self.size)
    }
}

pub type Wall = Tile;
pub type Exit = Tile;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Ordered level sequence
    pub levels: Vec<GameMap>,
    /// Number of levels entered so far; the loaded map is `level_index % levels.len()`
    pub level_index: usize,
    /// Pickups collected
    pub item_count: u32,
    /// Time of the last player shot (ms)
    pub last_bullet_fired_at: u64,
    /// Currently held keys, lower-cased
    pub keys_down: BTreeSet<String>,
    pub status: Status,
    #[serde(default)]
    pub controls: Controls,
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub bullets: Vec<Bullet>,
    pub monster_bullets: Vec<Bullet>,
    pub walls: Vec<Wall>,
    pub exits: Vec<Exit>,
    /// Vocabulary entries, owned by the vocabulary collaborator
    pub vocab_words: Vec<VocabWord>,
    /// Words the learner has not mastered yet
    pub unknown_words: Vec<String>,
}

impl GameState {
    /// Create a fresh game on the first of `levels`
    pub fn new(levels: Vec<GameMap>) -> Self {
        let mut state = Self {
            levels,
            level_index: 0,
            item_count: 0,
            last_bullet_fired_at: 0,
            keys_down: BTreeSet::new(),
            status: Status::Start,
            controls: Controls::default(),
            player: Player::default(),
            monsters: Vec::new(),
            bullets: Vec::new(),
            monster_bullets: Vec::new(),
            walls: Vec::new(),
            exits: Vec::new(),
            vocab_words: Vec::new(),
            unknown_words: Vec::new(),
        };
        super::level::load_level(&mut state, 0);
        state
    }

    /// New game on the shipped levels
    pub fn with_builtin_levels() -> Self {
        Self::new(GameMap::builtin_levels())
    }

    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls.normalized();
        self
    }

    /// Replace the vocabulary; every word starts out unknown
    pub fn with_vocabulary(mut self, words: Vec<VocabWord>) -> Self {
        self.unknown_words = words.iter().map(|w| w.word.clone()).collect();
        self.vocab_words = words;
        self
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    /// Look up the full entry for a word
    pub fn resolve_word(&self, word: &str) -> VocabWord {
        self.vocab_words
            .iter()
            .find(|w| w.word == word)
            .cloned()
            .unwrap_or_else(|| VocabWord::bare(word))
    }
}
