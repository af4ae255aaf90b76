//! Vocab Blaster - A tile-based arcade shooter for vocabulary practice
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, monsters, bullets, levels, status)
//! - `random`: Seeded tick driver that produces monster intents outside the core
//! - `settings`: Key bindings and JSON configuration

pub mod random;
pub mod settings;
pub mod sim;

pub use random::MonsterMoveGenerator;
pub use settings::{Controls, Settings};

/// Game configuration constants
pub mod consts {
    /// Edge length of one map tile (pixels)
    pub const BLOCK_SIZE: i32 = 20;
    /// Edge length of the square play field (pixels), 20 tiles across
    pub const SCREEN_SIZE: i32 = BLOCK_SIZE * 20;

    /// Bullet edge length (pixels)
    pub const BULLET_SIZE: f32 = 5.0;
    /// Bullet speed (pixels per tick)
    pub const BULLET_SPEED: f32 = 2.0;
    /// Health removed by one bullet hit
    pub const BULLET_DAMAGE: i32 = 10;
    /// Minimum time between player shots (ms)
    pub const BULLET_FIRE_DELAY_MS: u64 = 100;

    /// Starting and maximum health for players and monsters
    pub const MAX_HEALTH: i32 = 100;

    /// Words shown per level review
    pub const WORDS_PER_LEVEL: usize = 3;

    /// How far a random monster target may land from the monster (tiles)
    pub const RANDOM_TARGET_TILE_RANGE: i32 = 5;
}

/// Round to one decimal place
#[inline]
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Clamp health into the valid range
#[inline]
pub fn clamp_health(health: i32) -> i32 {
    health.clamp(0, consts::MAX_HEALTH)
}
