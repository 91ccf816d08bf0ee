// src/bin/cli.rs
use bricklink_export::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
