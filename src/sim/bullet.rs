//! Bullet aiming, spawning and flight
//!
//! Hits are checked against where a bullet is now, before it moves. A bullet
//! that will overlap a target next frame is still drawn this frame.

use glam::{IVec2, Vec2};

use super::collision::Aabb;
use super::state::{Bullet, Monster, Player};
use crate::consts::*;
use crate::{clamp_health, round_tenth};

/// Per-tick velocity from `from` toward `to`
///
/// Speed is split along the angle to the target and each component rounded to
/// one decimal, so a 45° shot at speed 2 travels (±1.4, ±1.4).
pub fn aim(from: IVec2, to: IVec2) -> Vec2 {
    let delta = (to - from).as_vec2();
    // atan2 of magnitudes == atan(|dy/dx|), and stays finite when dx == 0
    let angle = delta.y.abs().atan2(delta.x.abs());
    let speed_x = round_tenth(BULLET_SPEED * angle.cos());
    let speed_y = round_tenth(BULLET_SPEED * angle.sin());
    Vec2::new(
        if delta.x < 0.0 { -speed_x } else { speed_x },
        if delta.y < 0.0 { -speed_y } else { speed_y },
    )
}

/// Nearest monster with health left; ties go to the earlier monster
pub fn closest_living_monster(from: IVec2, monsters: &[Monster]) -> Option<&Monster> {
    let mut best: Option<(&Monster, f32)> = None;
    for monster in monsters.iter().filter(|m| m.is_alive()) {
        let distance = from.as_vec2().distance(monster.pos.as_vec2());
        if best.is_none_or(|(_, shortest)| distance < shortest) {
            best = Some((monster, distance));
        }
    }
    best.map(|(monster, _)| monster)
}

/// Bullet fired from `from` toward `to`
pub fn fire(from: IVec2, to: IVec2) -> Bullet {
    Bullet::new(from.as_vec2(), aim(from, to))
}

/// Player shot, if the trigger is held, the cooldown has passed and something is alive
pub fn player_shot(
    player: &Player,
    monsters: &[Monster],
    fire_held: bool,
    time: u64,
    last_fired_at: u64,
) -> Option<Bullet> {
    if !fire_held || time.saturating_sub(last_fired_at) < BULLET_FIRE_DELAY_MS {
        return None;
    }
    closest_living_monster(player.pos, monsters).map(|target| fire(player.pos, target.pos))
}

/// Move a bullet one tick, or `None` once it leaves the screen
fn advance(bullet: &Bullet) -> Option<Bullet> {
    let moved = Bullet {
        pos: bullet.pos + bullet.vel,
        ..bullet.clone()
    };
    moved.bounds().in_bounds().then_some(moved)
}

/// Resolve player bullets against walls and living monsters
///
/// `targets` is the monster snapshot used for hit detection; damage lands on
/// the matching index of `monsters`.
pub fn update_player_bullets(
    bullets: &[Bullet],
    obstacles: &[Aabb],
    targets: &[Monster],
    monsters: &mut [Monster],
) -> Vec<Bullet> {
    bullets
        .iter()
        .filter_map(|bullet| {
            let bounds = bullet.bounds();
            if bounds.overlaps_any(obstacles) {
                return None;
            }
            let hit = targets
                .iter()
                .position(|m| m.is_alive() && bounds.overlaps(&m.bounds()));
            if let Some(index) = hit {
                if let Some(monster) = monsters.get_mut(index) {
                    monster.health = clamp_health(monster.health - BULLET_DAMAGE);
                }
                return None;
            }
            advance(bullet)
        })
        .collect()
}

/// Resolve monster bullets against walls and the player
pub fn update_monster_bullets(
    bullets: &[Bullet],
    obstacles: &[Aabb],
    target: &Aabb,
    player: &mut Player,
) -> Vec<Bullet> {
    bullets
        .iter()
        .filter_map(|bullet| {
            let bounds = bullet.bounds();
            if bounds.overlaps_any(obstacles) {
                return None;
            }
            if bounds.overlaps(target) {
                player.health = clamp_health(player.health - BULLET_DAMAGE);
                return None;
            }
            advance(bullet)
        })
        .collect()
}
