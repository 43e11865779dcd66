use clap::Parser;
use construction_db::cli::{self, Cli};
use std::process;

fn main() {
    // Logs go to stderr; stdout carries rows only.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e}");
        // 2: the database rejected the row (foreign key, NOT NULL, ...)
        let code = if e.is_constraint_violation() { 2 } else { 1 };
        process::exit(code);
    }
}
