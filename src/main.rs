//! Grimgrid -- a rules engine for a two-player monster game.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr; set `RUST_LOG` to change the filter.

use std::io::{self, BufRead};

use clap::Parser;
use log::error;

use grimgrid::config::SessionConfig;
use grimgrid::protocol::parse_command;
use grimgrid::session::Session;

#[derive(Parser, Debug)]
#[command(name = "grimgrid", version, about = "Rules engine for a two-player monster game")]
struct Args {
    /// Seed for deterministic game setup
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,
}

/// Runs the protocol loop until `quit` or end of input.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SessionConfig {
        seed: args.seed,
        pretty: args.pretty,
    };
    let mut session = Session::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match session.handle(cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("failed to write response: {}", e);
                break;
            }
        }
    }
}
