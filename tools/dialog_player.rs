/// Dialog Player: interactive terminal playback of RON dialog files.
///
/// Usage: dialog_player <dialog.ron>... [--config <config.ron>] [--start <id>]
///
/// Files are loaded in argument order; later files override same-named
/// conversations of earlier ones. Set RUST_LOG=debug to trace the engine.

use dialog_engine::core::config::EngineConfig;
use dialog_engine::core::playback::{DialogEngine, PlaybackState};
use dialog_engine::core::store::MemoryStore;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(0);
    }

    let mut dialog_paths: Vec<String> = Vec::new();
    let mut config_path: Option<String> = None;
    let mut start_id: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--start" if i + 1 < args.len() => {
                i += 1;
                start_id = Some(args[i].clone());
            }
            arg if arg.starts_with("--") => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
                process::exit(1);
            }
            path => dialog_paths.push(path.to_string()),
        }
        i += 1;
    }

    let config = match config_path {
        Some(ref path) => match EngineConfig::load_from_ron(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR loading config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    // Stores must outlive the engine that borrows them.
    let mut stores = Vec::new();
    for path in &dialog_paths {
        match MemoryStore::load_from_ron(Path::new(path)) {
            Ok(store) => stores.push(store),
            Err(e) => {
                eprintln!("ERROR loading {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    let mut engine = DialogEngine::with_config(config);
    for store in &stores {
        engine.add_store(store);
    }

    println!(
        "Loaded {} conversations from {} files",
        engine.conversation_count(),
        engine.source_count()
    );
    println!("Type 'help' for commands.\n");

    if let Some(ref id) = start_id {
        start(&mut engine, id);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if engine.state() == PlaybackState::DisplayingOptions {
            print!("choose> ");
        } else {
            print!("dialog> ");
        }
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if engine.state() == PlaybackState::DisplayingOptions {
            if let Ok(choice) = line.parse::<usize>() {
                if choice == 0 || !engine.select_option(choice - 1) {
                    println!("No option {}.", choice);
                    continue;
                }
                pump(&mut engine);
                continue;
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "list" | "ls" => {
                for (i, id) in engine.conversation_ids().enumerate() {
                    println!("  {:>3}. {}", i, id);
                }
            }
            "start" => {
                if parts.len() < 2 {
                    println!("Usage: start <conversation>");
                    continue;
                }
                if !engine.is_ready() {
                    println!("A conversation is already playing ({}).", engine.state());
                    continue;
                }
                start(&mut engine, parts[1]);
            }
            "state" => {
                println!(
                    "{} (depth {}, {} one-shot options used)",
                    engine.state(),
                    engine.stack_depth(),
                    engine.consumed_options().len()
                );
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn start(engine: &mut DialogEngine<'_>, id: &str) {
    match engine.start_conversation(id) {
        Ok(()) => pump(engine),
        Err(e) => println!("ERROR: {}", e),
    }
}

/// Execute until the engine needs a choice or has finished, printing
/// lines and events along the way.
fn pump(engine: &mut DialogEngine<'_>) {
    loop {
        let before = engine.state();
        engine.execute();
        match engine.state() {
            PlaybackState::DisplayingSpeech => {
                println!("{}: {}", engine.speech_actor(), engine.speech_text());
            }
            PlaybackState::SendingEvent => {
                println!("  [event] {}", engine.event_payload());
            }
            PlaybackState::DisplayingOptions => {
                for (i, option) in engine.offered_options().iter().enumerate() {
                    println!("  {}. {}", i + 1, option.text);
                }
                return;
            }
            PlaybackState::Ready => {
                println!("--- end of conversation ---\n");
                return;
            }
            PlaybackState::RunConversation if before == PlaybackState::RunConversation => {
                println!("ERROR: conversation is looping without pausing");
                return;
            }
            PlaybackState::RunConversation | PlaybackState::ExecutingOptions => {}
        }
    }
}

fn print_usage() {
    println!("Usage: dialog_player <dialog.ron>... [--config <config.ron>] [--start <id>]");
}

fn print_help() {
    println!("Commands:");
    println!("  list             list all conversations, shadowed ones included");
    println!("  start <id>       play a conversation");
    println!("  <n>              pick option n while a menu is shown");
    println!("  state            show the engine state");
    println!("  quit             exit the player");
}
