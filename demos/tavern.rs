/// Tavern example: plays a short conversation with scripted choices.
///
/// A base dialog file is overridden by a patch file loaded after it, and
/// the host loop reacts to events between lines.
///
/// Run with: cargo run --example tavern

use dialog_engine::core::playback::{DialogEngine, PlaybackState};
use dialog_engine::core::store::MemoryStore;
use std::path::Path;

fn main() {
    env_logger::init();

    // --- Load the base dialog and a patch that overrides one scene ---
    let base = MemoryStore::load_from_ron(Path::new("tests/fixtures/tavern.ron"))
        .expect("Failed to load tavern dialog");
    let patch = MemoryStore::load_from_ron(Path::new("tests/fixtures/tavern_patch.ron"))
        .expect("Failed to load tavern patch");

    let mut engine = DialogEngine::builder()
        .store(&base)
        .store(&patch)
        .build()
        .expect("Failed to build engine");

    println!("========================================");
    println!("   THE DROWNED RAT");
    println!("========================================");
    println!();

    // Rumours, then a room (backing out), then goodbye.
    let mut choices = vec![0, 0, 1, 0].into_iter();
    let mut gold = 20;
    let mut cellar_quest = false;

    engine
        .start_conversation("innkeeper")
        .expect("innkeeper conversation missing");

    while !engine.is_ready() {
        engine.execute();
        match engine.state() {
            PlaybackState::DisplayingSpeech => {
                println!("{}: \"{}\"", engine.speech_actor(), engine.speech_text());
            }
            PlaybackState::SendingEvent => match engine.event_payload() {
                "quest:cellar" => {
                    cellar_quest = true;
                    println!("  * New quest: investigate the cellar");
                }
                payload => {
                    if let Some(amount) = payload.strip_prefix("gold:") {
                        gold += amount.parse::<i32>().unwrap_or(0);
                        println!("  * Gold: {}", gold);
                    }
                }
            },
            PlaybackState::DisplayingOptions => {
                for (i, option) in engine.offered_options().iter().enumerate() {
                    println!("    {}. {}", i + 1, option.text);
                }
                let choice = choices.next().unwrap_or(engine.option_count() - 1);
                println!("  > {}", engine.option_text(choice).unwrap_or("?"));
                engine.select_option(choice);
            }
            _ => {}
        }
    }

    if cellar_quest {
        println!();
        println!("--- Later, in the cellar ---");
        engine
            .start_conversation("cellar")
            .expect("cellar conversation missing");
        while !engine.is_ready() {
            engine.execute();
            if engine.state() == PlaybackState::DisplayingSpeech {
                println!("{}: \"{}\"", engine.speech_actor(), engine.speech_text());
            }
        }
    }

    println!();
    println!(
        "One-shot choices used this session: {}",
        engine.consumed_options().len()
    );
}
