//! Vocabulary screens: new-word pickups and end-of-level reviews

use super::level::{advance_level, player_on_open_exit};
use super::state::{GameState, Status, VocabWord};
use crate::consts::WORDS_PER_LEVEL;

/// Switch status, logging the transition
pub fn transition(state: &mut GameState, status: Status) {
    log::debug!("Status {:?} -> {:?}", state.status, status);
    state.status = status;
}

/// Word revealed by the pickup numbered `item_count`, cycling through the unknown list
pub fn new_word(state: &GameState, item_count: u32) -> Option<VocabWord> {
    let len = state.unknown_words.len();
    if len == 0 {
        return None;
    }
    let word = &state.unknown_words[item_count as usize % len];
    Some(state.resolve_word(word))
}

/// Words reviewed at the end of level `level_index`
///
/// The offset cycles through the unknown list; the batch itself does not wrap
/// and may come up short near the end of the list.
pub fn review_batch(state: &GameState, level_index: usize) -> Vec<VocabWord> {
    let len = state.unknown_words.len();
    if len == 0 {
        return Vec::new();
    }
    let offset = (level_index * WORDS_PER_LEVEL) % len;
    let end = (offset + WORDS_PER_LEVEL).min(len);
    state.unknown_words[offset..end]
        .iter()
        .map(|word| state.resolve_word(word))
        .collect()
}

/// Remove the player's pickups: dead monsters the player is touching
///
/// The first pickup of the tick opens the new-word screen when there are
/// unknown words left.
pub fn collect_pickups(state: &mut GameState) {
    let player = state.player.bounds();
    let (picked, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut state.monsters)
        .into_iter()
        .partition(|m| !m.is_alive() && player.overlaps(&m.bounds()));
    state.monsters = remaining;

    for _ in &picked {
        let shown = new_word(state, state.item_count);
        state.item_count += 1;
        log::debug!("Pickup #{}", state.item_count);
        match shown {
            Some(word) if state.status.is_active() => {
                transition(state, Status::ShowingNewWord { word });
            }
            _ => {}
        }
    }
}

/// Leave through an open exit
///
/// With words to study the review screen opens over the freshly loaded level;
/// otherwise the level simply advances.
pub fn try_exit_level(state: &mut GameState) {
    if !player_on_open_exit(state) {
        return;
    }
    let words = review_batch(state, state.level_index);
    advance_level(state);
    if !words.is_empty() {
        transition(state, Status::ShowingLevelReview { words });
    }
}

/// Grade the word at the head of the review
///
/// A passed word is no longer unknown. The review closes once every word is graded.
pub fn grade_review(state: &mut GameState, passed: bool) {
    let Status::ShowingLevelReview { words } = &state.status else {
        return;
    };
    let mut words = words.clone();
    if words.is_empty() {
        transition(state, Status::Active);
        return;
    }
    let reviewed = words.remove(0);
    if passed {
        state.unknown_words.retain(|w| *w != reviewed.word);
    }
    log::debug!(
        "Review of {:?}: {}",
        reviewed.word,
        if passed { "pass" } else { "fail" }
    );
    if words.is_empty() {
        transition(state, Status::Active);
    } else {
        state.status = Status::ShowingLevelReview { words };
    }
}

/// Flip a word between known and unknown, keeping vocabulary order
pub fn toggle_word_known(state: &mut GameState, word: &str) {
    if state.unknown_words.iter().any(|w| w == word) {
        state.unknown_words.retain(|w| w != word);
        return;
    }
    if !state.vocab_words.iter().any(|w| w.word == word) {
        return;
    }
    let unknown: Vec<String> = state
        .vocab_words
        .iter()
        .map(|w| w.word.clone())
        .filter(|w| w == word || state.unknown_words.contains(w))
        .collect();
    state.unknown_words = unknown;
}
