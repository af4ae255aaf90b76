//! State reducer
//!
//! `reduce` is the only entry point that advances the game. It never mutates
//! its input, never reads a clock and never rolls dice: time and monster
//! intents arrive inside [`Action::Tick`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::bullet::{fire, player_shot, update_monster_bullets, update_player_bullets};
use super::collision::resolve_slide;
use super::level::{player_obstacles, solid_tiles};
use super::monster::{MonsterMove, move_for, update_monsters};
use super::state::{GameState, Status, VocabWord};
use super::status::{collect_pickups, grade_review, toggle_word_known, transition, try_exit_level};

/// Everything that can happen to the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Replace the vocabulary (title screen only)
    SetVocabulary { words: Vec<VocabWord> },
    /// Mark a word known/unknown (title screen only)
    ToggleWordKnown { word: String },
    /// Leave the title screen
    StartGame,
    KeyDown { key: String },
    KeyUp { key: String },
    /// Close the new-word screen
    Resume,
    PassReview,
    FailReview,
    /// One animation frame
    Tick {
        /// Wall-clock time (ms)
        time: u64,
        /// One intent per monster, by index
        monster_moves: Vec<MonsterMove>,
    },
}

impl Action {
    pub fn key_down(key: &str) -> Self {
        Action::KeyDown {
            key: key.to_string(),
        }
    }

    pub fn key_up(key: &str) -> Self {
        Action::KeyUp {
            key: key.to_string(),
        }
    }

    pub fn tick(time: u64, monster_moves: Vec<MonsterMove>) -> Self {
        Action::Tick {
            time,
            monster_moves,
        }
    }
}

/// Produce the state that follows `state` after `action`
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    match action {
        Action::SetVocabulary { words } => {
            if next.status == Status::Start {
                next = next.with_vocabulary(words.clone());
            }
        }
        Action::ToggleWordKnown { word } => {
            if next.status == Status::Start {
                toggle_word_known(&mut next, word);
            }
        }
        Action::StartGame => {
            if next.status == Status::Start {
                log::info!(
                    "Game started with {} unknown words",
                    next.unknown_words.len()
                );
                transition(&mut next, Status::Active);
            }
        }
        // Outside `Active` only the pause key is heard
        Action::KeyDown { key } => {
            let key = key.to_lowercase();
            if key == next.controls.pause {
                match next.status {
                    Status::Active => transition(&mut next, Status::Paused),
                    Status::Paused => transition(&mut next, Status::Active),
                    _ => {}
                }
            } else if next.status.is_active() {
                next.keys_down.insert(key);
            }
        }
        Action::KeyUp { key } => {
            if next.status.is_active() {
                next.keys_down.remove(&key.to_lowercase());
            }
        }
        Action::Resume => {
            if matches!(next.status, Status::ShowingNewWord { .. }) {
                transition(&mut next, Status::Active);
            }
        }
        Action::PassReview => grade_review(&mut next, true),
        Action::FailReview => grade_review(&mut next, false),
        Action::Tick {
            time,
            monster_moves,
        } => step(&mut next, *time, monster_moves),
    }
    next
}

/// Movement requested by the held arrow keys; left beats right, up beats down
pub fn player_delta(state: &GameState) -> IVec2 {
    let controls = &state.controls;
    let x = if state.is_key_down(&controls.left) {
        -1
    } else if state.is_key_down(&controls.right) {
        1
    } else {
        0
    };
    let y = if state.is_key_down(&controls.up) {
        -1
    } else if state.is_key_down(&controls.down) {
        1
    } else {
        0
    };
    IVec2::new(x, y)
}

/// Advance the simulation by one frame
fn step(state: &mut GameState, time: u64, monster_moves: &[MonsterMove]) {
    if matches!(&state.status, Status::ShowingLevelReview { words } if words.is_empty()) {
        transition(state, Status::Active);
        return;
    }
    if !state.status.is_active() {
        return;
    }

    // Everything below reads the frame-start snapshot
    let before = state.clone();
    let solid = solid_tiles(&before);

    // Player
    let delta = player_delta(&before);
    state.player.pos = resolve_slide(
        before.player.pos,
        before.player.size,
        delta,
        &player_obstacles(&before),
    );

    // Monsters
    state.monsters = update_monsters(&before.monsters, monster_moves, &solid);

    // Existing bullets
    state.bullets =
        update_player_bullets(&before.bullets, &solid, &before.monsters, &mut state.monsters);
    state.monster_bullets = update_monster_bullets(
        &before.monster_bullets,
        &solid,
        &before.player.bounds(),
        &mut state.player,
    );

    // New bullets
    let fire_held = before.is_key_down(&before.controls.fire);
    if let Some(bullet) = player_shot(
        &before.player,
        &before.monsters,
        fire_held,
        time,
        before.last_bullet_fired_at,
    ) {
        state.bullets.push(bullet);
        state.last_bullet_fired_at = time;
    }
    let shots = before
        .monsters
        .iter()
        .enumerate()
        .filter(|&(i, _)| state.monsters[i].is_alive() && move_for(monster_moves, i).shoot)
        .map(|(_, monster)| fire(monster.pos, before.player.pos))
        .collect::<Vec<_>>();
    state.monster_bullets.extend(shots);

    // Damage can kill a monster this frame; it stops chasing right away
    for monster in state.monsters.iter_mut().filter(|m| !m.is_alive()) {
        monster.target = None;
    }

    collect_pickups(state);
    if state.status.is_active() {
        try_exit_level(state);
    }
}
