//! webpage - build and serve the voxel-test web page
//!
//! Usage: webpage [OPTIONS] [VERB]
//!
//! Verbs:
//!   build   Reset the deploy directory, compile with emscripten, deploy assets
//!   serve   Open a browser and run the local HTTP server
//!   help    Show verb usage

mod commands;
mod ui;

use clap::Parser;
use voxel_webpage::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::run(&cli) {
        let ui = commands::error_ui(&cli);
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}
