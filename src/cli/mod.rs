pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// tetris-weather - Falling-blocks weather mockup generator
#[derive(Parser, Debug)]
#[command(name = "tetris-weather")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Runs `generate` with defaults when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the mockup SVGs and convert them to PNG
    Generate(generate::GenerateArgs),

    /// List the scenes and the files they produce
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
