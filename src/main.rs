//! Command-line interface for punctconv.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "PUNCTCONV_LOG";

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Text file to convert. Output goes to `<name>_converted.txt`.
    /// Anything after the first file is ignored.
    #[arg(
        value_name = "INPUT_FILE",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    input_files: Vec<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let Some(input_file) = cli.input_files.into_iter().next() else {
        println!("Usage: punctconv <input_file>");
        return;
    };

    match punctconv::run(&input_file) {
        Ok(summary) => println!(
            "Conversion complete. Output written to {}",
            summary.output_path.display()
        ),
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}
