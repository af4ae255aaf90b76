//! Seeded tick driver
//!
//! The simulation never rolls dice. This driver owns the RNG and turns the
//! current monster roster into the `monster_moves` payload of a tick.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::BLOCK_SIZE;
use crate::settings::DriverTuning;
use crate::sim::{Action, Monster, MonsterMove};

/// Rolls monster intents from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct MonsterMoveGenerator {
    rng: Pcg32,
    tuning: DriverTuning,
}

impl MonsterMoveGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, DriverTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: DriverTuning) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Random target within the configured tile range of `pos`, or `None` most ticks
    fn roll_target(&mut self, pos: IVec2) -> Option<IVec2> {
        if !self.rng.random_bool(self.tuning.retarget_chance.clamp(0.0, 1.0)) {
            return None;
        }
        let range = self.tuning.target_range_tiles.max(0) * BLOCK_SIZE;
        let x = self.rng.random_range(pos.x - range..=pos.x + range);
        let y = self.rng.random_range(pos.y - range..=pos.y + range);
        Some(IVec2::new(x, y))
    }

    /// One intent per monster, in roster order
    pub fn roll(&mut self, monsters: &[Monster]) -> Vec<MonsterMove> {
        monsters
            .iter()
            .map(|monster| {
                let shoot = self.rng.random_bool(self.tuning.shoot_chance.clamp(0.0, 1.0));
                let target = self.roll_target(monster.pos);
                MonsterMove { target, shoot }
            })
            .collect()
    }

    /// Build the tick action for one frame
    pub fn tick(&mut self, time: u64, monsters: &[Monster]) -> Action {
        Action::tick(time, self.roll(monsters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Monster> {
        (0..4).map(|i| Monster::at(IVec2::new(100 + i * 20, 200))).collect()
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = MonsterMoveGenerator::new(42);
        let mut b = MonsterMoveGenerator::new(42);
        for _ in 0..200 {
            assert_eq!(a.roll(&roster()), b.roll(&roster()));
        }
    }

    #[test]
    fn test_one_move_per_monster() {
        let mut generator = MonsterMoveGenerator::new(7);
        assert_eq!(generator.roll(&roster()).len(), 4);
        assert!(generator.roll(&[]).is_empty());
    }

    #[test]
    fn test_targets_within_range() {
        let tuning = DriverTuning {
            retarget_chance: 1.0,
            shoot_chance: 0.0,
            target_range_tiles: 2,
        };
        let mut generator = MonsterMoveGenerator::with_tuning(9, tuning);
        let monsters = roster();
        for _ in 0..50 {
            for (monster, intent) in monsters.iter().zip(generator.roll(&monsters)) {
                let target = intent.target.expect("always retargets");
                assert!((target - monster.pos).abs().max_element() <= 40);
                assert!(!intent.shoot);
            }
        }
    }

    #[test]
    fn test_never_retargets_at_zero_chance() {
        let tuning = DriverTuning {
            retarget_chance: 0.0,
            shoot_chance: 1.0,
            ..Default::default()
        };
        let mut generator = MonsterMoveGenerator::with_tuning(3, tuning);
        let moves = generator.roll(&roster());
        assert!(moves.iter().all(|m| m.target.is_none() && m.shoot));
    }
}
