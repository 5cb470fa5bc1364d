//! Media Player
//!
//! This example drives a small media player machine through its states,
//! using undo and redo, and prints the journal at the end.
//!
//! Run with: RUST_LOG=debug cargo run --example media_player

use pocket_fsm::{fsm_config, Fsm, FsmError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Media Player Example ===\n");

    let config = fsm_config! {
        initial: "idle",
        "idle" => { "start" => "running" },
        "running" => { "stop" => "idle", "pause" => "paused" },
        "paused" => { "resume" => "running", "stop" => "idle" },
    };

    let problems = config.validate();
    println!("Configuration valid: {}", problems.is_success());

    let mut fsm = Fsm::new(config);
    println!("Initial state: {}", fsm.state());
    println!("Available events: {:?}", fsm.events());

    fsm.trigger("start")?;
    println!("After start: {}", fsm.state());

    fsm.trigger("pause")?;
    println!("After pause: {}", fsm.state());

    match fsm.trigger("eject") {
        Ok(()) => println!("Unexpected eject"),
        Err(e) => println!("Rejected: {e}"),
    }

    let undone = fsm.undo();
    println!("Undo: {undone} -> {}", fsm.state());
    let redone = fsm.redo();
    println!("Redo: {redone} -> {}", fsm.state());
    println!("States handling 'stop': {:?}", fsm.states_for("stop"));

    println!("\nJournal:");
    for entry in fsm.journal().entries() {
        println!("  {} -> {} ({:?})", entry.from, entry.to, entry.kind);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
