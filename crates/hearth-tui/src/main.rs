mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hearth_core::store::UuidIdGenerator;
use hearth_core::{CoreConfig, StateStore};

use crate::runtime::run_app;
use crate::ui::App;

/// hearth - a start page for your terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory for persisted state (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    hearth_core::tracing_setup::init_tracing();

    // Restore the terminal before showing any panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        eprintln!("\n{panic_info}");
        original_hook(panic_info);
    }));

    let config = match cli.data_dir {
        Some(dir) => CoreConfig::new(dir),
        None => CoreConfig::default(),
    };
    let store = StateStore::open(&config, Box::new(UuidIdGenerator));
    let mut app = App::new(config, store);

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
