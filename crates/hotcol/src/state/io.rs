//! # Fitted State Persistence
//!
//! The sole persistence format: a JSON document holding the ordered
//! column list, each with its name, its categories in assigned-index
//! order, its unknown-policy tag, and its bucket flag. Reloading
//! reconstructs bit-identical vocabularies.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::errors::{HCResult, HotcolError};
use crate::state::FittedState;
use crate::types::IndexType;

/// Save a [`FittedState`] to a file.
///
/// # Arguments
/// * `state` - the state to save.
/// * `path` - the path to save the state to.
pub fn save_state_path<T: IndexType, P: AsRef<Path>>(
    state: &FittedState<T>,
    path: P,
) -> HCResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    write_state(state, &mut writer)?;
    writer.flush()?;

    log::debug!(
        "saved fitted state ({} columns) to {:?}",
        state.n_columns(),
        path.as_ref()
    );
    Ok(())
}

/// Save a [`FittedState`] to a [`Write`] writer.
pub fn write_state<T, W>(
    state: &FittedState<T>,
    writer: &mut W,
) -> HCResult<()>
where
    T: IndexType,
    W: Write,
{
    serde_json::to_writer(writer, state)
        .map_err(|e| HotcolError::Parse(e.to_string()))
}

/// Load a [`FittedState`] from a file.
///
/// # Arguments
/// * `path` - the path to the state file.
pub fn load_state_path<T, P>(path: P) -> HCResult<FittedState<T>>
where
    T: IndexType,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let state = read_state(reader)?;

    log::debug!(
        "loaded fitted state ({} columns) from {:?}",
        state.n_columns(),
        path.as_ref()
    );
    Ok(state)
}

/// Load a [`FittedState`] from a [`BufRead`] stream.
pub fn read_state<T, R>(reader: R) -> HCResult<FittedState<T>>
where
    T: IndexType,
    R: BufRead,
{
    serde_json::from_reader(reader)
        .map_err(|e| HotcolError::Parse(e.to_string()))
}
