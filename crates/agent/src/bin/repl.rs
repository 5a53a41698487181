//! Interactive terminal session against the fitness agent.
//!
//! Reads one utterance per line; `quit` or EOF ends the session. Set
//! `FITNESS_AGENT_API__API_KEY` to enable live nutrition/exercise lookups;
//! without it the exercise flow serves the built-in fallback table.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fitness_agent_agent::FitnessAgent;
use fitness_agent_config::load_settings;
use fitness_agent_core::ConversationState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = load_settings(None)?;
    let agent = FitnessAgent::from_settings(&settings)?;
    tracing::info!(strategy = agent.strategy_name(), "agent ready");

    let mut state = ConversationState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Type a message ('quit' to exit).\n");
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        println!("\n{}\n", agent.process(&mut state, line));
    }

    Ok(())
}
