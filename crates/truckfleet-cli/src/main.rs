//! truck-bot - conversational fleet registration
//!
//! Walks a customer through describing their trucks and saves the fleet
//! table and the conversation transcript.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
