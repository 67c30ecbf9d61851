use clap::{Parser, Subcommand};
use ens_normalize_core::EnsNameNormalizer;

#[derive(Parser)]
#[command(name = "ens-normalize", about = "ENSIP-15 name normalization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a name, printing the canonical form or a diagnostic.
    Normalize { name: String },
    /// Normalize and re-render emoji/Greek in "beautified" form.
    Beautify { name: String },
    /// Iteratively strip curable errors until the name normalizes.
    Cure { name: String },
    /// Print the raw token stream for a name (never fails).
    Tokenize { name: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let normalizer = EnsNameNormalizer::default();

    match cli.command {
        Command::Tokenize { name } => {
            println!("{:#?}", normalizer.tokenize(&name));
        }
        Command::Normalize { name } => print_result(normalizer.normalize(&name)),
        Command::Beautify { name } => print_result(normalizer.beautify(&name)),
        Command::Cure { name } => print_result(normalizer.cure(&name)),
    }
}

fn print_result(result: Result<String, ens_normalize_core::ProcessError>) {
    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{}: {}", err.code(), err);
            std::process::exit(1);
        }
    }
}
