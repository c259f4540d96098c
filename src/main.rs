//! Drop replay runner (default binary).
//!
//! Puts one piece on a named board, prints the board, the landing test and the
//! quick-drop row at the given anchor, then hard-drops the piece and prints the
//! resulting board.

use anyhow::Result;
use tracing::{debug, Level};
use tracing_subscriber::util::SubscriberInitExt;

use tetrazone::replay::{parse_replay_args, run_replay, USAGE};

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_replay_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    setup_logging(config.verbose);
    debug!(?config, "replay config");

    let report = run_replay(&config)?;
    if config.json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
