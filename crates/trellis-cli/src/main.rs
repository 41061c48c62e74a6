//! Trellis CLI - render class and package diagram models as PlantUML source

mod cli;
mod manifest;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let app = cli::TrellisApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
