//! Vocab Blaster headless driver
//!
//! Runs the simulation on the shipped levels with scripted input and a seeded
//! tick driver, logging what happens. Renderers and keyboard capture live in
//! the host shell, not here.

use vocab_blaster::sim::{Action, GameState, Status, VocabWord, reduce};
use vocab_blaster::{MonsterMoveGenerator, Settings};

/// Frames simulated per run (about 30 s at 60 fps)
const FRAMES: u64 = 1_800;
/// Milliseconds per frame
const FRAME_MS: u64 = 16;

fn demo_vocabulary() -> Vec<VocabWord> {
    vec![
        VocabWord::new("來", "lai2", "come", "來一下！"),
        VocabWord::new("等", "deng3", "wait", "等一下！"),
        VocabWord::new("快", "kuai4", "fast", "快一點！"),
        VocabWord::new("哪", "na3", "which", "哪一個？"),
        VocabWord::new("试", "shi4", "to try", "试一试！"),
    ]
}

/// Held keys for a frame: wander in a slow square while firing
fn scripted_keys(frame: u64) -> [&'static str; 2] {
    match (frame / 120) % 4 {
        0 => ["arrowright", "arrowup"],
        1 => ["arrowup", "arrowleft"],
        2 => ["arrowleft", "arrowdown"],
        _ => ["arrowdown", "arrowright"],
    }
}

fn main() {
    env_logger::init();
    log::info!("Vocab Blaster (headless) starting...");

    let settings = std::env::var("VOCAB_BLASTER_SETTINGS")
        .map(|json| Settings::from_json_or_default(&json))
        .unwrap_or_default();
    let seed = std::env::var("VOCAB_BLASTER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);
    log::info!("Seed: {}", seed);

    let mut driver = MonsterMoveGenerator::with_tuning(seed, settings.driver.clone());
    let mut state = GameState::with_builtin_levels().with_controls(settings.controls.clone());
    state = reduce(
        &state,
        &Action::SetVocabulary {
            words: demo_vocabulary(),
        },
    );
    state = reduce(&state, &Action::StartGame);
    state = reduce(&state, &Action::key_down(&settings.controls.fire));

    let mut held: [&str; 2] = ["", ""];
    for frame in 0..FRAMES {
        // Stand-in for the player clicking through vocabulary screens
        let dismiss = match &state.status {
            Status::ShowingNewWord { word } => {
                log::info!("New word: {} ({}) - {}", word.word, word.pronunciation, word.meaning);
                Some(Action::Resume)
            }
            Status::ShowingLevelReview { words } => {
                log::info!("Reviewing {} words", words.len());
                Some(Action::PassReview)
            }
            _ => None,
        };
        if let Some(action) = dismiss {
            state = reduce(&state, &action);
        }

        // Key changes only register once the game is active again
        let keys = scripted_keys(frame);
        if keys != held && state.status.is_active() {
            for key in held.iter().filter(|k| !k.is_empty()) {
                state = reduce(&state, &Action::key_up(key));
            }
            for key in keys {
                state = reduce(&state, &Action::key_down(key));
            }
            held = keys;
        }

        let action = driver.tick(frame * FRAME_MS, &state.monsters);
        state = reduce(&state, &action);
    }

    log::info!(
        "Finished: level {}, {} items, player health {}, {} monsters left",
        state.level_index + 1,
        state.item_count,
        state.player.health,
        state.monsters.len()
    );
    match serde_json::to_string(&state.status) {
        Ok(status) => println!("{status}"),
        Err(err) => log::error!("Could not serialize status: {err}"),
    }
}
