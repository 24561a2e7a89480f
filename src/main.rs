//! Interactive spell checker.
//!
//! Loads a word list into a Bloom filter, then reports for each word read from
//! standard input whether it's probably in the list.
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spellbloom::checker::DEFAULT_FALSE_POSITIVE_RATE;
use spellbloom::{Error, SpellChecker};

#[derive(Parser)]
#[command(name = "spellbloom", version, about = "Spell checker backed by a Bloom filter")]
struct Cli {
    /// Name or path of the word list file, one word per line
    #[arg(short, long, visible_alias = "wl", default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// False positive probability, strictly between 0 and 1
    #[arg(short = 'p', long, visible_alias = "fp", default_value_t = DEFAULT_FALSE_POSITIVE_RATE)]
    false_pos_prob: f64,

    /// Don't print the prompt; useful when piping words in
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Error>() {
                Some(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    eprintln!(
                        "Error: could not find file '{}'. Please check the filename or path and try again",
                        cli.wordlist.display()
                    );
                }
                Some(Error::InvalidParameter { .. }) => {
                    eprintln!(
                        "Error: The false positive probability should be a decimal number between 0 and 1."
                    );
                    eprintln!("Example usage: spellbloom --wordlist wordlist.txt --false-pos-prob 0.05");
                }
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let checker = SpellChecker::from_path(&cli.wordlist, cli.false_pos_prob)?;
    let filter = checker.filter();

    if !cli.quiet {
        println!("Size of bit array: {}", filter.bits());
        println!("False positive probability: {}", filter.false_positive_rate());
        println!("Number of hash functions: {}", filter.hashes());
    }
    let summary = checker
        .run(io::stdin().lock(), io::stdout().lock(), !cli.quiet)
        .context("checking words")?;

    tracing::info!(
        checked = summary.checked,
        present = summary.present,
        absent = summary.absent(),
        "done"
    );
    Ok(())
}
