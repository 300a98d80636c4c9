//! Render an Ulam spiral to an image file.
//!
//! # Examples
//!
//! ```sh
//! # 201x201 PNG (the default dimension)
//! uspiral ulam.png
//!
//! # Larger spiral as a PGM, with the lattice dumped as text
//! uspiral --dimension 1001 --text ulam.txt ulam.pgm
//!
//! # Show progress
//! uspiral -v ulam.png
//! ```

mod cli;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let config = cli.to_config();
    match ulam::run(&config) {
        Ok(summary) => {
            tracing::info!(
                output = %summary.output.display(),
                dimension = summary.dimension.get(),
                "done"
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
