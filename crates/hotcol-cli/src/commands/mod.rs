use crate::commands::{fit::FitArgs, inverse::InverseArgs, transform::TransformArgs};

pub mod fit;
pub mod inverse;
pub mod transform;

/// Subcommands for hotcol-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fit per-column vocabularies from JSONL records.
    Fit(FitArgs),

    /// Encode JSONL records against a fitted state.
    Transform(TransformArgs),

    /// Decode an indicator matrix back to JSONL records.
    Inverse(InverseArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Fit(cmd) => cmd.run(),
            Commands::Transform(cmd) => cmd.run(),
            Commands::Inverse(cmd) => cmd.run(),
        }
    }
}
