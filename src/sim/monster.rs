//! Monster pursuit AI
//!
//! Monsters never roll dice. Each tick the driver hands every monster a
//! [`MonsterMove`]; the monster walks one pixel per axis toward its target.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, try_slide};
use super::state::Monster;

/// Externally generated intent for one monster for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonsterMove {
    /// New pursuit target; `None` keeps the current one
    pub target: Option<IVec2>,
    /// Fire one bullet at the player this tick
    pub shoot: bool,
}

impl MonsterMove {
    pub fn toward(target: IVec2) -> Self {
        Self {
            target: Some(target),
            shoot: false,
        }
    }

    pub fn shooting() -> Self {
        Self {
            target: None,
            shoot: true,
        }
    }
}

/// Intent for monster `index`; missing entries mean "carry on, don't shoot"
pub fn move_for(moves: &[MonsterMove], index: usize) -> MonsterMove {
    moves.get(index).copied().unwrap_or_default()
}

/// Single-pixel step toward `target` on each axis
#[inline]
pub fn step_toward(pos: IVec2, target: IVec2) -> IVec2 {
    (target - pos).clamp(IVec2::splat(-1), IVec2::ONE)
}

/// Advance one monster by one tick
///
/// `obstacles` must contain walls and exits; monsters never leave through an
/// exit. A blocked monster keeps its target and retries next tick.
pub fn update_monster(monster: &Monster, intent: MonsterMove, obstacles: &[Aabb]) -> Monster {
    if !monster.is_alive() {
        return Monster {
            target: None,
            ..monster.clone()
        };
    }

    let Some(target) = intent.target.or(monster.target) else {
        return monster.clone();
    };

    let delta = step_toward(monster.pos, target);
    let pos = try_slide(monster.pos, monster.size, delta, obstacles).unwrap_or(monster.pos);
    let target = (pos != target).then_some(target);

    Monster {
        pos,
        target,
        ..monster.clone()
    }
}

/// Advance every monster, pairing each with its intent by index
pub fn update_monsters(
    monsters: &[Monster],
    moves: &[MonsterMove],
    obstacles: &[Aabb],
) -> Vec<Monster> {
    monsters
        .iter()
        .enumerate()
        .map(|(i, monster)| update_monster(monster, move_for(moves, i), obstacles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster_at(x: i32, y: i32) -> Monster {
        Monster::at(IVec2::new(x, y))
    }

    #[test]
    fn test_arrival_clears_target() {
        let monster = monster_at(39, 1);
        let next = update_monster(&monster, MonsterMove::toward(IVec2::new(40, 0)), &[]);
        assert_eq!(next.pos, IVec2::new(40, 0));
        assert_eq!(next.target, None);
    }

    #[test]
    fn test_keeps_existing_target_without_override() {
        let mut monster = monster_at(100, 100);
        monster.target = Some(IVec2::new(110, 100));
        let next = update_monster(&monster, MonsterMove::default(), &[]);
        assert_eq!(next.pos, IVec2::new(101, 100));
        assert_eq!(next.target, Some(IVec2::new(110, 100)));
    }

    #[test]
    fn test_new_target_overrides() {
        let mut monster = monster_at(100, 100);
        monster.target = Some(IVec2::new(110, 100));
        let next = update_monster(&monster, MonsterMove::toward(IVec2::new(90, 120)), &[]);
        assert_eq!(next.pos, IVec2::new(99, 101));
        assert_eq!(next.target, Some(IVec2::new(90, 120)));
    }

    #[test]
    fn test_idle_without_target() {
        let monster = monster_at(100, 100);
        let next = update_monster(&monster, MonsterMove::default(), &[]);
        assert_eq!(next, monster);
    }

    #[test]
    fn test_blocked_keeps_target() {
        let monster = monster_at(40, 40);
        let wall = Aabb::from_tile(IVec2::new(60, 40), 20);
        let next = update_monster(&monster, MonsterMove::toward(IVec2::new(80, 40)), &[wall]);
        assert_eq!(next.pos, IVec2::new(40, 40));
        assert_eq!(next.target, Some(IVec2::new(80, 40)));
    }

    #[test]
    fn test_dead_monster_is_frozen() {
        let mut monster = monster_at(40, 40);
        monster.health = 0;
        monster.target = Some(IVec2::new(80, 40));
        let next = update_monster(&monster, MonsterMove::toward(IVec2::new(0, 0)), &[]);
        assert_eq!(next.pos, IVec2::new(40, 40));
        assert_eq!(next.target, None);
    }

    #[test]
    fn test_short_move_list_defaults() {
        let mut a = monster_at(40, 40);
        a.target = Some(IVec2::new(50, 40));
        let b = monster_at(100, 100);
        let next = update_monsters(&[a, b.clone()], &[], &[]);
        assert_eq!(next[0].pos, IVec2::new(41, 40));
        assert_eq!(next[1], b);
    }

    #[test]
    fn test_step_toward_clamps() {
        assert_eq!(step_toward(IVec2::new(0, 0), IVec2::new(50, -3)), IVec2::new(1, -1));
        assert_eq!(step_toward(IVec2::new(5, 5), IVec2::new(5, 6)), IVec2::new(0, 1));
    }
}
