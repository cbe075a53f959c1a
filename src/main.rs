use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use anyhow::Context;
use brik::{
    config::glyphs::Glyphs, display_error, lexer::lexer::tokenize_with, parser::parser::parse,
};
use clap::Parser;
use log::info;

/// Reads a BRIK file and prints its bindings as JSON.
#[derive(Parser, Debug)]
#[command(name = "brik", version, about)]
struct Cli {
    /// Path to the BRIK source file
    path: PathBuf,

    /// Print the token stream instead of the bindings
    #[arg(long)]
    tokens: bool,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let file_name = cli.path.to_string_lossy().into_owned();

    let start = Instant::now();
    let glyphs = Glyphs::default();

    let tokens = match tokenize_with(source.clone(), Some(file_name), &glyphs) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            exit(1);
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in tokens.iter() {
            println!("{}", token);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let symbols = match parse(tokens) {
        Ok(symbols) => symbols,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            exit(1);
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    let output = if cli.compact {
        serde_json::to_string(&symbols)?
    } else {
        serde_json::to_string_pretty(&symbols)?
    };
    println!("{}", output);

    Ok(())
}
