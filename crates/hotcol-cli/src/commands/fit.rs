use core::num::NonZeroUsize;

use hotcol::state::io::save_state_path;
use hotcol::{OneHotEncoder, OneHotEncoderOptions, Table, UnknownPolicy};

use crate::{io_args::InputArgs, records};

/// Args for the fit command.
#[derive(clap::Args, Debug)]
pub struct FitArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Path to write the fitted state to.
    #[clap(long)]
    state: String,

    /// Behavior on unseen categories at transform time.
    #[clap(long, default_value = "error")]
    unknown_policy: UnknownPolicy,

    /// Upper bound on distinct categories per column; 0 is unbounded.
    #[clap(long, default_value_t = 0)]
    max_categories: usize,

    /// Exclude missing values from vocabularies.
    #[clap(long)]
    drop_missing: bool,

    /// Worker pool size; 0 uses all available parallelism.
    #[clap(long, default_value_t = 0)]
    threads: usize,
}

impl FitArgs {
    /// Run the fit command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let table = Table::from_json_records(&records::read_records(&mut reader)?)?;

        let options = OneHotEncoderOptions::default()
            .with_unknown_policy(self.unknown_policy)
            .with_max_categories_per_column(NonZeroUsize::new(self.max_categories))
            .with_drop_missing(self.drop_missing)
            .with_thread_count(self.threads);

        let mut encoder = OneHotEncoder::<u32>::new(options);
        encoder.fit(&table)?;

        let state = encoder.state().unwrap();
        save_state_path(state.as_ref(), &self.state)?;

        log::info!(
            "fit {} columns (output width {}); state written to {:?}",
            state.n_columns(),
            state.width(),
            self.state
        );
        Ok(())
    }
}
