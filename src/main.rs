use clap::{Parser, Subcommand};

mod commands;

use commands::{id, name};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version = VERSION)]
#[command(about = "Rename an app's display name and bundle identifier across platform project files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read or rewrite the human-readable application name
    Name(name::NameArgs),
    /// Read or rewrite the bundle/package identifier
    Id(id::IdArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Name(args) => name::run(args).and_then(print_json),
        Commands::Id(args) => id::run(args).and_then(print_json),
    };

    if let Err(err) = result {
        eprintln!(
            "{}",
            serde_json::json!({ "error": err.to_string(), "code": err.code() })
        );
        std::process::exit(1);
    }
}

fn print_json<T: serde::Serialize>(output: T) -> rebrand::Result<()> {
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
