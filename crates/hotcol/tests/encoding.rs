#![allow(missing_docs)]

use hotcol::{
    CategoryToken,
    HotcolError,
    IndicatorMatrix,
    OneHotEncoder,
    OneHotEncoderOptions,
    OutputFormat,
    Table,
    UnknownPolicy,
};

fn column(values: &[&str]) -> Vec<CategoryToken> {
    values.iter().map(|&v| v.into()).collect()
}

fn dense_rows(matrix: &IndicatorMatrix<u32>) -> Vec<Vec<f64>> {
    match matrix {
        IndicatorMatrix::Dense(m) => {
            (0..m.shape().0).map(|r| m.row(r).to_vec()).collect()
        }
        other => panic!("expected dense output, got {other:?}"),
    }
}

#[test]
fn infrequent_bucket_scenario() {
    let train = Table::from_columns(vec![(
        "color",
        column(&["red", "blue", "red", "green"]),
    )])
    .unwrap();

    let mut encoder = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default()
            .with_unknown_policy(UnknownPolicy::InfrequentBucket),
    );
    encoder.fit(&train).unwrap();

    let vocab = &encoder.state().unwrap().columns()[0].categories;
    assert_eq!(vocab.lookup(&"red".into()), Some(0));
    assert_eq!(vocab.lookup(&"blue".into()), Some(1));
    assert_eq!(vocab.lookup(&"green".into()), Some(2));

    let probe = Table::from_columns(vec![(
        "color",
        column(&["blue", "red", "yellow"]),
    )])
    .unwrap();

    let matrix = encoder.transform(&probe).unwrap();
    assert_eq!(
        dense_rows(&matrix),
        vec![
            vec![0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
        ]
    );
}

#[test]
fn multi_column_scenario() {
    let table = Table::from_columns(vec![
        ("size", column(&["S", "M"])),
        ("color", column(&["red", "blue"])),
    ])
    .unwrap();

    let mut encoder =
        OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());
    let matrix = encoder.fit_transform(&table).unwrap();

    assert_eq!(matrix.shape(), (2, 4));
    assert_eq!(
        dense_rows(&matrix),
        vec![vec![1.0, 0.0, 1.0, 0.0], vec![0.0, 1.0, 0.0, 1.0]]
    );
}

#[test]
fn unknown_error_policy_names_value_and_row() {
    let mut encoder =
        OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());
    encoder
        .fit(
            &Table::from_columns(vec![("color", column(&["red", "blue"]))])
                .unwrap(),
        )
        .unwrap();

    let probe =
        Table::from_columns(vec![("color", column(&["blue", "yellow"]))])
            .unwrap();

    match encoder.transform(&probe) {
        Err(HotcolError::Column { column, source }) => {
            assert_eq!(column, "color");
            match *source {
                HotcolError::UnknownCategory { row, ref value } => {
                    assert_eq!(row, 1);
                    assert_eq!(value, &"yellow".into());
                }
                ref other => panic!("unexpected source: {other:?}"),
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unknown_ignore_policy_emits_zero_block() {
    let mut encoder = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default()
            .with_unknown_policy(UnknownPolicy::IgnoreZeroRow),
    );
    encoder
        .fit(
            &Table::from_columns(vec![("color", column(&["red", "blue"]))])
                .unwrap(),
        )
        .unwrap();

    let probe =
        Table::from_columns(vec![("color", column(&["yellow", "red"]))])
            .unwrap();

    let matrix = encoder.transform(&probe).unwrap();
    assert_eq!(
        dense_rows(&matrix),
        vec![vec![0.0, 0.0], vec![1.0, 0.0]]
    );

    // The zero block decodes to the missing placeholder.
    let decoded = encoder.inverse_transform(&matrix).unwrap();
    assert_eq!(decoded.values(0)[0], CategoryToken::Missing);
    assert_eq!(decoded.values(0)[1], "red".into());
}

#[test]
fn capacity_boundary() {
    use core::num::NonZeroUsize;

    let options = OneHotEncoderOptions::default()
        .with_max_categories_per_column(NonZeroUsize::new(3));

    let at_limit =
        Table::from_columns(vec![("c", column(&["a", "b", "c", "a"]))])
            .unwrap();
    let mut encoder = OneHotEncoder::<u32>::new(options);
    encoder.fit(&at_limit).unwrap();
    assert_eq!(encoder.state().unwrap().width(), 3);

    let over_limit =
        Table::from_columns(vec![("c", column(&["a", "b", "c", "d"]))])
            .unwrap();
    match encoder.fit(&over_limit) {
        Err(HotcolError::Column { column, source }) => {
            assert_eq!(column, "c");
            assert!(matches!(
                *source,
                HotcolError::CapacityExceeded { limit: 3, count: 4 }
            ));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn drop_missing_makes_missing_unknown() {
    let train = Table::from_columns(vec![(
        "color",
        vec!["red".into(), CategoryToken::Missing, "blue".into()],
    )])
    .unwrap();

    let mut encoder = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default()
            .with_drop_missing(true)
            .with_unknown_policy(UnknownPolicy::IgnoreZeroRow),
    );
    let matrix = encoder.fit_transform(&train).unwrap();

    assert_eq!(matrix.shape(), (3, 2));
    assert_eq!(
        dense_rows(&matrix),
        vec![
            vec![1.0, 0.0],
            vec![0.0, 0.0],
            vec![0.0, 1.0],
        ]
    );
}

#[test]
fn cardinality_invariant_per_block() {
    let table = Table::from_columns(vec![
        ("a", column(&["x", "y", "z", "x", "y", "z", "x"])),
        ("b", column(&["1", "2", "1", "2", "1", "2", "1"])),
        ("c", column(&["p", "p", "q", "q", "r", "r", "s"])),
    ])
    .unwrap();

    let mut encoder = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default()
            .with_unknown_policy(UnknownPolicy::InfrequentBucket),
    );
    let matrix = encoder.fit_transform(&table).unwrap();

    let state = encoder.state().unwrap();
    let rows = dense_rows(&matrix);
    for row in &rows {
        for (col, spec) in state.columns().iter().enumerate() {
            let offset = state.offsets()[col];
            let set: usize = row[offset..offset + spec.width()]
                .iter()
                .filter(|&&v| v != 0.0)
                .count();
            assert_eq!(set, 1);
        }
    }
}

#[test]
fn sparse_and_dense_agree() {
    let train = Table::from_columns(vec![
        ("size", column(&["S", "M", "L", "M", "S"])),
        ("color", column(&["red", "blue", "red", "green", "blue"])),
    ])
    .unwrap();

    let mut dense_encoder =
        OneHotEncoder::<u32>::new(OneHotEncoderOptions::default());
    let dense = dense_encoder.fit_transform(&train).unwrap();

    let mut sparse_encoder = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default()
            .with_output_format(OutputFormat::Sparse),
    );
    let sparse = sparse_encoder.fit_transform(&train).unwrap();

    assert_eq!(dense.shape(), sparse.shape());

    // Same cells set, and both decode to the input.
    let from_sparse = match &sparse {
        IndicatorMatrix::Sparse(m) => {
            let mut rows =
                vec![vec![0.0; m.shape.1]; m.shape.0];
            for (r, c, v) in m.iter() {
                rows[r][c as usize] = f64::from(v);
            }
            rows
        }
        other => panic!("expected sparse output, got {other:?}"),
    };
    assert_eq!(dense_rows(&dense), from_sparse);

    assert_eq!(dense_encoder.inverse_transform(&dense).unwrap(), train);
    assert_eq!(sparse_encoder.inverse_transform(&sparse).unwrap(), train);
}

#[test]
fn thread_counts_agree() {
    let values: Vec<CategoryToken> = (0..997)
        .map(|i| CategoryToken::Int(i % 13))
        .collect();
    let table = Table::from_columns(vec![
        ("a", values.clone()),
        ("b", values.iter().rev().cloned().collect()),
    ])
    .unwrap();

    let mut single = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default().with_thread_count(1),
    );
    let mut pooled = OneHotEncoder::<u32>::new(
        OneHotEncoderOptions::default().with_thread_count(4),
    );

    let single_out = single.fit_transform(&table).unwrap();
    let pooled_out = pooled.fit_transform(&table).unwrap();

    assert_eq!(single.state().unwrap(), pooled.state().unwrap());
    assert_eq!(single_out, pooled_out);
}
