//! Level loading and progression

use super::collision::Aabb;
use super::state::{GameState, Player};

/// Index into `levels` for a level counter, wrapping past the end
pub fn map_index(level_index: usize, level_count: usize) -> Option<usize> {
    (level_count > 0).then(|| level_index % level_count)
}

/// Rebuild the world from the map for `level_index`
///
/// Walls, exits and monsters are replaced wholesale and all bullets are
/// dropped. The player moves to the map's spawn point (the origin if it has
/// none) but keeps its health.
pub fn load_level(state: &mut GameState, level_index: usize) {
    state.level_index = level_index;
    let Some(index) = map_index(level_index, state.levels.len()) else {
        log::warn!("No levels to load");
        return;
    };
    let map = &state.levels[index];

    let health = state.player.health;
    state.player = Player {
        health,
        ..map.player().unwrap_or_default()
    };
    state.walls = map.walls();
    state.exits = map.exits();
    state.monsters = map.monsters();
    state.bullets.clear();
    state.monster_bullets.clear();

    log::info!(
        "Level {} loaded (map {}): {} monsters, {} walls, {} exits",
        level_index + 1,
        index,
        state.monsters.len(),
        state.walls.len(),
        state.exits.len()
    );
}

/// Move on to the next level
pub fn advance_level(state: &mut GameState) {
    load_level(state, state.level_index + 1);
}

/// Exits only open once every monster is gone
pub fn exits_open(state: &GameState) -> bool {
    state.monsters.is_empty()
}

/// The player is standing on an open exit
pub fn player_on_open_exit(state: &GameState) -> bool {
    let player = state.player.bounds();
    exits_open(state) && state.exits.iter().any(|exit| player.overlaps(&exit.bounds()))
}

/// What blocks the player: walls, plus exits while the level is uncleared
pub fn player_obstacles(state: &GameState) -> Vec<Aabb> {
    let exits = state
        .exits
        .iter()
        .filter(|_| !exits_open(state))
        .map(|exit| exit.bounds());
    state.walls.iter().map(|wall| wall.bounds()).chain(exits).collect()
}

/// What blocks monsters and bullets: walls and exits, always
pub fn solid_tiles(state: &GameState) -> Vec<Aabb> {
    state
        .walls
        .iter()
        .chain(state.exits.iter())
        .map(|tile| tile.bounds())
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::sim::map::GameMap;
    use crate::sim::state::Bullet;

    fn two_levels() -> Vec<GameMap> {
        vec![
            GameMap::from_rows(&["#E  ", " P M"]),
            GameMap::from_rows(&["P   ", "  ##"]),
        ]
    }

    #[test]
    fn test_new_state_loads_first_level() {
        let state = GameState::new(two_levels());
        assert_eq!(state.level_index, 0);
        assert_eq!(state.player.pos, IVec2::new(20, 20));
        assert_eq!(state.monsters.len(), 1);
        assert_eq!(state.exits.len(), 1);
    }

    #[test]
    fn test_advance_keeps_health_and_clears_bullets() {
        let mut state = GameState::new(two_levels());
        state.player.health = 40;
        state
            .bullets
            .push(Bullet::new(glam::Vec2::new(10.0, 10.0), glam::Vec2::X));
        advance_level(&mut state);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.player.health, 40);
        assert_eq!(state.player.pos, IVec2::ZERO);
        assert!(state.bullets.is_empty());
        assert!(state.monsters.is_empty());
        assert_eq!(state.walls.len(), 2);
    }

    #[test]
    fn test_advance_wraps_to_first_map() {
        let mut state = GameState::new(two_levels());
        advance_level(&mut state);
        advance_level(&mut state);
        assert_eq!(state.level_index, 2);
        assert_eq!(state.monsters.len(), 1);
        assert_eq!(state.player.pos, IVec2::new(20, 20));
    }

    #[test]
    fn test_missing_spawn_defaults_to_origin() {
        let state = GameState::new(vec![GameMap::from_rows(&["   #", " M  "])]);
        assert_eq!(state.player.pos, IVec2::ZERO);
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_no_levels_is_harmless() {
        let state = GameState::new(Vec::new());
        assert!(state.walls.is_empty());
        assert!(state.monsters.is_empty());
    }

    #[test]
    fn test_exit_gating() {
        let mut state = GameState::new(two_levels());
        state.player.pos = IVec2::new(20, 0);
        assert!(!player_on_open_exit(&state));
        assert_eq!(player_obstacles(&state).len(), 2);

        state.monsters.clear();
        assert!(player_on_open_exit(&state));
        assert_eq!(player_obstacles(&state).len(), 1);
        assert_eq!(solid_tiles(&state).len(), 2);
    }

    #[test]
    fn test_map_index() {
        assert_eq!(map_index(3, 2), Some(1));
        assert_eq!(map_index(0, 0), None);
    }
}
