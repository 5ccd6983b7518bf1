/// Logging argument group.
#[derive(clap::Args, Debug)]
pub struct LoggingArgs {
    /// Increase logging verbosity; may be repeated.
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LoggingArgs {
    /// Initialize stderr logging at the requested verbosity.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .verbosity(self.verbose as usize + 1)
            .init()?;
        Ok(())
    }
}
