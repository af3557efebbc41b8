//! `vi-cjk`: a minimal modal editor for the terminal.
//!
//! Run with: cargo run -- notes.txt

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vi_cjk::{FsStorage, Session};

mod logging;
mod tui;

use tui::Tui;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "vi-cjk", version, about = "Minimal modal editor with wide-character input")]
struct Args {
    /// File to edit. Created by the first `:w` if it does not exist.
    path: Option<PathBuf>,
    /// Append logs to this file, filtered by RUST_LOG (default `info`).
    #[arg(long, env = "VI_CJK_LOG")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = args.log_file.as_deref().map(logging::init).transpose()?;
    info!(target: "runtime", path = ?args.path, "startup");

    let mut session = Session::open(FsStorage, args.path);
    let mut tui = Tui::enter().context("failed to set up the terminal")?;
    run(&mut tui, &mut session)?;
    info!(target: "runtime", "shutdown");
    Ok(())
}

fn run(tui: &mut Tui, session: &mut Session<FsStorage>) -> Result<()> {
    loop {
        tui.draw(session).context("failed to paint")?;
        let Some(event) = tui.read_event().context("failed to read input")? else {
            return Ok(());
        };
        if !session.feed(event, tui) {
            return Ok(());
        }
    }
}
