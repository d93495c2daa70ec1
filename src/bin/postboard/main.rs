//! postboard: terminal front-end for the post board.
//! Interactive board by default; `posts ...` subcommands for scripting.
#![deny(clippy::all, clippy::pedantic)]

mod client;
mod handlers;
mod print;
mod repl;


use std::sync::Arc;

use postboard::application::board::PostBoard;
use postboard::config::{self, Command};
use postboard::infra::telemetry;
use tokio::io::BufReader;
use tracing::info;

use client::{CliError, build_store};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let (cli, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let store = build_store(&settings)?;
    info!(
        target: "postboard",
        base_url = %store.base(),
        "using post store"
    );

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let mut board = PostBoard::new(Arc::new(store));
            let input = BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();
            repl::run(&mut board, input, &mut out).await?;
        }
        Command::Posts(args) => {
            let mut out = std::io::stdout();
            handlers::handle(&store, args.action, &mut out).await?;
        }
    }

    Ok(())
}
