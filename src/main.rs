use clap::Parser;
use miette::Result;
use tetris_weather::cli::{generate, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => generate::run(generate::GenerateArgs::default())?,
        Some(Commands::Generate(args)) => generate::run(args)?,
        Some(Commands::List(args)) => tetris_weather::cli::list::run(args)?,
        Some(Commands::Completions(args)) => tetris_weather::cli::completions::run(args)?,
    }

    Ok(())
}
