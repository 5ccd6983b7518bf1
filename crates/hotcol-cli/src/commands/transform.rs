use std::io::Write;

use hotcol::state::io::load_state_path;
use hotcol::{
    FittedState,
    OneHotEncoder,
    OneHotEncoderOptions,
    OutputFormat,
    Table,
};

use crate::{
    io_args::{InputArgs, OutputArgs},
    records,
};

/// Args for the transform command.
#[derive(clap::Args, Debug)]
pub struct TransformArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Path of the fitted state to encode against.
    #[clap(long)]
    state: String,

    /// Output representation.
    #[clap(long, default_value = "dense")]
    format: OutputFormat,

    /// Worker pool size; 0 uses all available parallelism.
    #[clap(long, default_value_t = 0)]
    threads: usize,
}

impl TransformArgs {
    /// Run the transform command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let state: FittedState<u32> = load_state_path(&self.state)?;
        let encoder = OneHotEncoder::from_state(
            state,
            OneHotEncoderOptions::default()
                .with_output_format(self.format)
                .with_thread_count(self.threads),
        );

        let mut reader = self.input.open_reader()?;
        let table = Table::from_json_records(&records::read_records(&mut reader)?)?;

        let matrix = encoder.transform(&table)?;

        let mut writer = self.output.open_writer()?;
        serde_json::to_writer(&mut writer, &matrix)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
