#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use anyhow::{Context, Result};
use memory_game::{game, Answer, Seed};
use runner::Solver;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app: App = App::parse();
    app.run()?;
    Ok(())
}

/// Memory game: find the number spoken on a given turn
#[derive(Debug, Parser)]
#[clap(version)]
struct App {
    /// Starting numbers, comma separated [default: 13,16,0,12,15,1]
    #[clap(short = 's', long, value_parser, conflicts_with = "input")]
    seed: Option<Seed>,

    /// Optional path to a file holding the starting numbers.
    #[clap(short = 'i', long, value_parser)]
    input: Option<PathBuf>,

    /// Turn whose spoken number is reported
    #[clap(short = 't', long, value_parser, default_value_t = game::DEFAULT_TARGET)]
    target: u32,
}

impl App {
    fn run(&self) -> Result<()> {
        let answer = Answer {
            target: self.target,
        };
        let seed = match (&self.input, &self.seed) {
            (Some(path), _) => answer.load_input(path).with_context(|| {
                format!("unable to read starting numbers from `{}`", path.display())
            })?,
            (None, Some(seed)) => seed.clone(),
            (None, None) => Seed::default(),
        };

        info!(%seed, target = self.target, "starting game");
        answer.run("Memory Game", &seed)
    }
}
