#![allow(missing_docs)]

use hotcol::{
    CategoryToken,
    OneHotEncoder,
    OneHotEncoderOptions,
    OutputFormat,
    Table,
    UnknownPolicy,
};
use proptest::prelude::*;

fn token_strategy() -> impl Strategy<Value = CategoryToken> {
    prop_oneof![
        "[a-e]{1,3}".prop_map(|s| CategoryToken::from(s.as_str())),
        (0i64..8).prop_map(CategoryToken::Int),
        Just(CategoryToken::Missing),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..4, 1usize..40)
        .prop_flat_map(|(n_cols, n_rows)| {
            proptest::collection::vec(
                proptest::collection::vec(token_strategy(), n_rows),
                n_cols,
            )
        })
        .prop_map(|columns| {
            Table::from_columns(
                columns
                    .into_iter()
                    .enumerate()
                    .map(|(i, values)| (format!("col{i}"), values))
                    .collect(),
            )
            .unwrap()
        })
}

proptest! {
    #[test]
    fn fit_is_deterministic(table in table_strategy()) {
        let mut first =
            OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());
        let mut second =
            OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());

        first.fit(&table).unwrap();
        second.fit(&table).unwrap();

        prop_assert_eq!(first.state().unwrap(), second.state().unwrap());
    }

    #[test]
    fn decode_inverts_encode(table in table_strategy()) {
        let mut encoder =
            OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());
        let matrix = encoder.fit_transform(&table).unwrap();
        let decoded = encoder.inverse_transform(&matrix).unwrap();

        prop_assert_eq!(decoded, table);
    }

    #[test]
    fn sparse_decodes_like_dense(table in table_strategy()) {
        let mut dense =
            OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());
        let mut sparse = OneHotEncoder::<u32>::new(
            OneHotEncoderOptions::default()
                .with_output_format(OutputFormat::Sparse),
        );

        let dense_out = dense.fit_transform(&table).unwrap();
        let sparse_out = sparse.fit_transform(&table).unwrap();

        prop_assert_eq!(
            dense.inverse_transform(&dense_out).unwrap(),
            sparse.inverse_transform(&sparse_out).unwrap()
        );
    }

    #[test]
    fn bucketed_blocks_always_carry_one_bit(
        train in table_strategy(),
        probe in table_strategy(),
    ) {
        // Restrict to matching column layouts.
        prop_assume!(train.n_columns() == probe.n_columns());
        prop_assume!(
            train.names().collect::<Vec<_>>()
                == probe.names().collect::<Vec<_>>()
        );

        let mut encoder = OneHotEncoder::<u32>::new(
            OneHotEncoderOptions::default()
                .with_unknown_policy(UnknownPolicy::InfrequentBucket),
        );
        encoder.fit(&train).unwrap();
        let matrix = encoder.transform(&probe).unwrap();

        let state = encoder.state().unwrap();
        if let hotcol::IndicatorMatrix::Dense(m) = &matrix {
            for row in 0..m.shape().0 {
                let cells = m.row(row);
                for (col, spec) in state.columns().iter().enumerate() {
                    let offset = state.offsets()[col];
                    let set = cells[offset..offset + spec.width()]
                        .iter()
                        .filter(|&&v| v != 0.0)
                        .count();
                    prop_assert_eq!(set, 1);
                }
            }
        }
    }
}
