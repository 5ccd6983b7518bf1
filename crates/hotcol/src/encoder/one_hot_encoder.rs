//! # One-Hot Encoder Coordinator

use std::sync::Arc;

use compact_str::CompactString;

use crate::category::CategoryToken;
use crate::decoders::ColumnDecoder;
use crate::encoder::options::{OneHotEncoderOptions, OutputFormat};
use crate::encoders::{ColumnEncoder, UnknownPolicy};
use crate::errors::{HCResult, HotcolError};
use crate::matrix::{DenseMatrix, IndicatorMatrix, SparseTriplets};
use crate::state::{ColumnSpec, FittedState};
use crate::table::Table;
use crate::threads;
use crate::types::IndexType;
use crate::vocab::VocabBuilder;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The multi-column fit / transform / inverse-transform coordinator.
///
/// Owns the [`FittedState`] produced by the latest successful fit;
/// a failed fit leaves the previous state untouched. Columns are
/// processed independently and in parallel; within a column, vocabulary
/// building is sequential so index assignment stays deterministic.
///
/// Transform and inverse-transform additionally fan out over row
/// chunks. Each worker writes to a pre-addressed output region, so
/// output row order always matches input row order regardless of
/// thread scheduling, and the reported error is always the first in
/// column/chunk order rather than completion order.
pub struct OneHotEncoder<T: IndexType> {
    options: OneHotEncoderOptions,
    state: Option<Arc<FittedState<T>>>,

    #[cfg(feature = "rayon")]
    pool: Option<rayon::ThreadPool>,
}

#[cfg(feature = "rayon")]
fn build_pool(workers: usize) -> Option<rayon::ThreadPool> {
    if workers <= 1 {
        return None;
    }
    Some(
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .unwrap(),
    )
}

impl<T: IndexType> OneHotEncoder<T> {
    /// Create an unfitted encoder.
    ///
    /// ## Arguments
    /// * `options` - The encoder configuration.
    pub fn new(options: OneHotEncoderOptions) -> Self {
        Self {
            options,
            state: None,
            #[cfg(feature = "rayon")]
            pool: build_pool(threads::resolve_thread_count(
                options.thread_count,
            )),
        }
    }

    /// Create an encoder around a previously persisted state.
    ///
    /// ## Arguments
    /// * `state` - The reloaded fitted state.
    /// * `options` - The encoder configuration.
    pub fn from_state(
        state: FittedState<T>,
        options: OneHotEncoderOptions,
    ) -> Self {
        let mut encoder = Self::new(options);
        encoder.state = Some(Arc::new(state));
        encoder
    }

    /// Drop the worker pool and run everything on the calling thread.
    pub fn to_single_thread(&mut self) {
        self.options.thread_count = 1;
        #[cfg(feature = "rayon")]
        {
            self.pool = None;
        }
    }

    /// The encoder configuration.
    pub fn options(&self) -> &OneHotEncoderOptions {
        &self.options
    }

    /// The fitted state, if any.
    pub fn state(&self) -> Option<&Arc<FittedState<T>>> {
        self.state.as_ref()
    }

    fn fitted(&self) -> HCResult<&FittedState<T>> {
        self.state.as_deref().ok_or(HotcolError::StateNotFitted)
    }

    fn workers(&self) -> usize {
        #[cfg(feature = "rayon")]
        {
            match &self.pool {
                Some(pool) => pool.current_num_threads(),
                None => 1,
            }
        }

        #[cfg(not(feature = "rayon"))]
        1
    }

    /// Discover per-column vocabularies from a table.
    ///
    /// All-or-nothing: on any column failure the previous fitted state
    /// is left unchanged and the first failure (in column order) is
    /// returned, tagged with its column.
    ///
    /// ## Arguments
    /// * `table` - The training table.
    pub fn fit(
        &mut self,
        table: &Table,
    ) -> HCResult<()> {
        let builder = VocabBuilder::default()
            .with_max_categories(self.options.max_categories_per_column)
            .with_drop_missing(self.options.drop_missing);
        let policy = self.options.unknown_policy;
        let bucket = policy == UnknownPolicy::InfrequentBucket;

        let fit_column = |(name, values): &(
            CompactString,
            Vec<CategoryToken>,
        )|
         -> HCResult<ColumnSpec<T>> {
            let categories = builder
                .build(values)
                .map_err(|e| e.in_column(name.clone()))?;
            Ok(ColumnSpec {
                name: name.clone(),
                categories,
                policy,
                bucket,
            })
        };

        #[cfg(feature = "rayon")]
        let results: Vec<HCResult<ColumnSpec<T>>> = match &self.pool {
            Some(pool) => pool.install(|| {
                table.columns().par_iter().map(fit_column).collect()
            }),
            None => table.columns().iter().map(fit_column).collect(),
        };

        #[cfg(not(feature = "rayon"))]
        let results: Vec<HCResult<ColumnSpec<T>>> =
            table.columns().iter().map(fit_column).collect();

        let mut columns = Vec::with_capacity(results.len());
        for result in results {
            columns.push(result?);
        }

        let state = FittedState::init(columns)?;
        log::info!(
            "fit {} columns over {} rows; output width {}",
            state.n_columns(),
            table.n_rows(),
            state.width()
        );

        self.state = Some(Arc::new(state));
        Ok(())
    }

    /// Encode a table against the fitted state.
    ///
    /// ## Arguments
    /// * `table` - The table to encode; columns must match the fitted
    ///   state name for name, in order.
    ///
    /// ## Returns
    /// The indicator matrix in the configured output format.
    pub fn transform(
        &self,
        table: &Table,
    ) -> HCResult<IndicatorMatrix<T>> {
        let state = self.fitted()?;
        state.check_table(table)?;

        log::debug!(
            "transform {} rows to {} output ({} wide)",
            table.n_rows(),
            self.options.output_format,
            state.width()
        );

        match self.options.output_format {
            OutputFormat::Dense => {
                Ok(self.transform_dense(state, table)?.into())
            }
            OutputFormat::Sparse => {
                Ok(self.transform_sparse(state, table)?.into())
            }
        }
    }

    /// Fit on a table, then encode that same table.
    pub fn fit_transform(
        &mut self,
        table: &Table,
    ) -> HCResult<IndicatorMatrix<T>> {
        self.fit(table)?;
        self.transform(table)
    }

    fn transform_dense(
        &self,
        state: &FittedState<T>,
        table: &Table,
    ) -> HCResult<DenseMatrix> {
        let n_rows = table.n_rows();
        let width = state.width();

        let mut matrix = DenseMatrix::zeros(n_rows, width);
        if n_rows == 0 || width == 0 {
            return Ok(matrix);
        }

        let chunk = threads::chunk_rows(n_rows, self.workers());

        let encode_chunk = |ci: usize, slab: &mut [f64]| -> HCResult<()> {
            let row0 = ci * chunk;
            let rows = slab.len() / width;

            for (col, spec) in state.columns().iter().enumerate() {
                let encoder = ColumnEncoder::new(
                    &spec.categories,
                    spec.policy,
                    spec.bucket,
                    state.offsets()[col],
                );
                encoder
                    .encode_dense_into(
                        &table.values(col)[row0..row0 + rows],
                        row0,
                        width,
                        slab,
                    )
                    .map_err(|e| e.in_column(spec.name.clone()))?;
            }
            Ok(())
        };

        #[cfg(feature = "rayon")]
        let results: Vec<HCResult<()>> = match &self.pool {
            Some(pool) => pool.install(|| {
                matrix
                    .as_mut_slice()
                    .par_chunks_mut(chunk * width)
                    .enumerate()
                    .map(|(ci, slab)| encode_chunk(ci, slab))
                    .collect()
            }),
            None => matrix
                .as_mut_slice()
                .chunks_mut(chunk * width)
                .enumerate()
                .map(|(ci, slab)| encode_chunk(ci, slab))
                .collect(),
        };

        #[cfg(not(feature = "rayon"))]
        let results: Vec<HCResult<()>> = matrix
            .as_mut_slice()
            .chunks_mut(chunk * width)
            .enumerate()
            .map(|(ci, slab)| encode_chunk(ci, slab))
            .collect();

        for result in results {
            result?;
        }
        Ok(matrix)
    }

    fn transform_sparse(
        &self,
        state: &FittedState<T>,
        table: &Table,
    ) -> HCResult<SparseTriplets<T>> {
        let n_rows = table.n_rows();
        let width = state.width();
        let shape = (n_rows, width);

        if n_rows == 0 || width == 0 {
            return Ok(SparseTriplets::new(shape));
        }

        let chunk = threads::chunk_rows(n_rows, self.workers());
        let ranges: Vec<(usize, usize)> = (0..n_rows)
            .step_by(chunk)
            .map(|row0| (row0, (row0 + chunk).min(n_rows)))
            .collect();

        let encode_range = |&(row0, row1): &(usize, usize)|
         -> HCResult<SparseTriplets<T>> {
            let mut out = SparseTriplets::with_capacity(
                shape,
                (row1 - row0) * state.n_columns(),
            );
            for (col, spec) in state.columns().iter().enumerate() {
                let encoder = ColumnEncoder::new(
                    &spec.categories,
                    spec.policy,
                    spec.bucket,
                    state.offsets()[col],
                );
                encoder
                    .encode_sparse_into(
                        &table.values(col)[row0..row1],
                        row0,
                        &mut out,
                    )
                    .map_err(|e| e.in_column(spec.name.clone()))?;
            }
            Ok(out)
        };

        #[cfg(feature = "rayon")]
        let results: Vec<HCResult<SparseTriplets<T>>> = match &self.pool {
            Some(pool) => {
                pool.install(|| ranges.par_iter().map(encode_range).collect())
            }
            None => ranges.iter().map(encode_range).collect(),
        };

        #[cfg(not(feature = "rayon"))]
        let results: Vec<HCResult<SparseTriplets<T>>> =
            ranges.iter().map(encode_range).collect();

        let mut matrix = SparseTriplets::new(shape);
        for result in results {
            let mut part = result?;
            matrix.append(&mut part);
        }
        Ok(matrix)
    }

    /// Decode an indicator matrix back to a table.
    ///
    /// ## Arguments
    /// * `matrix` - A matrix with this state's output width.
    ///
    /// ## Returns
    /// A table with the fitted column names, in order.
    pub fn inverse_transform(
        &self,
        matrix: &IndicatorMatrix<T>,
    ) -> HCResult<Table> {
        let state = self.fitted()?;
        state.check_width(matrix.shape().1)?;

        let decode_column = |(col, spec): (usize, &ColumnSpec<T>)|
         -> HCResult<Vec<CategoryToken>> {
            let decoder = ColumnDecoder::new(
                &spec.categories,
                spec.bucket,
                state.offsets()[col],
            );
            match matrix {
                IndicatorMatrix::Dense(m) => decoder.decode_dense(m),
                IndicatorMatrix::Sparse(m) => decoder.decode_sparse(m),
            }
            .map_err(|e| e.in_column(spec.name.clone()))
        };

        #[cfg(feature = "rayon")]
        let results: Vec<HCResult<Vec<CategoryToken>>> = match &self.pool {
            Some(pool) => pool.install(|| {
                state
                    .columns()
                    .par_iter()
                    .enumerate()
                    .map(decode_column)
                    .collect()
            }),
            None => state
                .columns()
                .iter()
                .enumerate()
                .map(decode_column)
                .collect(),
        };

        #[cfg(not(feature = "rayon"))]
        let results: Vec<HCResult<Vec<CategoryToken>>> = state
            .columns()
            .iter()
            .enumerate()
            .map(decode_column)
            .collect();

        let mut columns = Vec::with_capacity(state.n_columns());
        for (spec, result) in state.columns().iter().zip(results) {
            columns.push((spec.name.clone(), result?));
        }
        Table::from_columns(columns)
    }
}

impl<T: IndexType> core::fmt::Debug for OneHotEncoder<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("OneHotEncoder")
            .field("options", &self.options)
            .field("fitted", &self.state.is_some())
            .field("workers", &self.workers())
            .finish()
    }
}
