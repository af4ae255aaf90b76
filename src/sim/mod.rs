//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time and monster intents come in through actions
//! - No RNG, no clock, no I/O
//! - Stable iteration order (map scan order, then spawn order)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod level;
pub mod map;
pub mod monster;
pub mod state;
pub mod status;
pub mod tick;

pub use collision::{Aabb, resolve_slide, try_slide};
pub use map::GameMap;
pub use monster::MonsterMove;
pub use state::{Bullet, Exit, GameState, Monster, Player, Status, Tile, VocabWord, Wall};
pub use tick::{Action, reduce};
