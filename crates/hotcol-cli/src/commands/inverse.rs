use hotcol::state::io::load_state_path;
use hotcol::{
    FittedState,
    IndicatorMatrix,
    OneHotEncoder,
    OneHotEncoderOptions,
};

use crate::{
    io_args::{InputArgs, OutputArgs},
    records,
};

/// Args for the inverse command.
#[derive(clap::Args, Debug)]
pub struct InverseArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Path of the fitted state to decode against.
    #[clap(long)]
    state: String,

    /// Worker pool size; 0 uses all available parallelism.
    #[clap(long, default_value_t = 0)]
    threads: usize,
}

impl InverseArgs {
    /// Run the inverse command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let state: FittedState<u32> = load_state_path(&self.state)?;
        let encoder = OneHotEncoder::from_state(
            state,
            OneHotEncoderOptions::default().with_thread_count(self.threads),
        );

        let mut reader = self.input.open_reader()?;
        let matrix: IndicatorMatrix<u32> = serde_json::from_reader(&mut reader)?;

        let table = encoder.inverse_transform(&matrix)?;

        let mut writer = self.output.open_writer()?;
        records::write_records(&table, &mut writer)?;
        Ok(())
    }
}
