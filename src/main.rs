//! ADAS Monitoring Console
//!
//! Usage:
//!   adas-console                          Run interactive TUI
//!   adas-console --headless               Print display commands as JSON lines
//!   adas-console --headless --ticks 10    Stop after 10 indicator ticks
//!   adas-console --seed 42                Reproducible indicator sequence

use adas_console::app::App;
use adas_console::cli::Cli;
use adas_console::error::{ConsoleError, Result};
use adas_console::indicator::{RandomSource, SeededRandom, SystemRandom};
use adas_console::{config, headless, logging, ui};
use clap::Parser;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, !cli.headless);

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;

    let random: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            info!("Using seeded indicator sequence ({})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(SystemRandom::default()),
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| ConsoleError::Runtime { source })?;

    if cli.headless {
        rt.block_on(headless::run(config, random, cli.ticks))
    } else {
        let mut app = App::new(config, random)?;
        rt.block_on(ui::run(&mut app))
    }
}
