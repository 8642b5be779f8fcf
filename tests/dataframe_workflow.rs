use rust_tabular_ml::frame::{DataFrame, DEFAULT_HEAD_ROWS, DISPLAY_MAX_ROWS};
use rust_tabular_ml::ingestion::csv::read_csv;
use rust_tabular_ml::metrics::{accuracy_score, mean_squared_error, r2_score};
use rust_tabular_ml::preprocessing::{train_test_split, StandardScaler, DEFAULT_SEED, DEFAULT_TEST_SIZE};
use rust_tabular_ml::processing::{filter, reduce, ReduceOp};
use rust_tabular_ml::types::{Cell, ColumnKind};
use rust_tabular_ml::DataError;

fn insurance() -> DataFrame {
    read_csv("tests/fixtures/insurance.csv").unwrap()
}

#[test]
fn loads_with_inferred_kinds() {
    let df = insurance();
    assert_eq!((df.rows(), df.cols()), (12, 7));
    assert_eq!(
        df.get_column_names(),
        vec!["age", "sex", "bmi", "children", "smoker", "region", "charges"]
    );
    for numeric in ["age", "bmi", "children", "charges"] {
        assert_eq!(df.column_kind(numeric).unwrap(), ColumnKind::Numeric);
    }
    for categorical in ["sex", "smoker", "region"] {
        assert_eq!(df.column_kind(categorical).unwrap(), ColumnKind::Categorical);
    }
}

#[test]
fn display_truncates_and_head_is_short() {
    let df = insurance();
    let out = df.to_string();
    assert!(out.starts_with("DataFrame (12 rows x 7 cols)\nage\tsex\tbmi\tchildren\tsmoker\tregion\tcharges\n"));
    assert_eq!(out.lines().count(), 3 + DISPLAY_MAX_ROWS + 1);
    assert!(out.ends_with("...\n"));
    assert!(out.contains("19\tfemale\t27.9\t0\tyes\tsouthwest\t16884.924\t\n"));

    let head = df.head_default();
    assert_eq!(head.rows(), DEFAULT_HEAD_ROWS);
    assert!(!head.to_string().contains("..."));
}

#[test]
fn filter_preserves_columns_and_order() {
    let df = insurance();
    let smokers = filter(&df, "smoker", |v| v == "yes").unwrap();
    assert_eq!(smokers.get_column_names(), df.get_column_names());
    assert_eq!(smokers.rows(), 2);
    assert_eq!(smokers.at(0, "age").unwrap(), 19.0);
    assert_eq!(smokers.at(1, "age").unwrap(), 62.0);

    let older = df
        .filter("age", |v| v.as_number().is_some_and(|a| a >= 37.0))
        .unwrap();
    let ages: Vec<f64> = (0..older.rows() as isize)
        .map(|r| older.at(r, "age").unwrap().as_number().unwrap())
        .collect();
    assert_eq!(ages, vec![46.0, 37.0, 37.0, 60.0, 62.0]);

    assert!(matches!(df.filter("income", |_| true), Err(DataError::KeyNotFound { .. })));
}

#[test]
fn encode_then_to_matrix_agrees_with_cells() {
    let mut df = insurance();
    df.encode_binary("smoker", "yes", "no").unwrap();
    let labels = df.encode_binary_auto("sex").unwrap();
    assert_eq!(labels, ["female".to_string(), "male".to_string()]);

    let names = ["age", "sex", "bmi", "smoker"];
    let x = df.to_matrix(&names).unwrap();
    assert_eq!(x.shape(), (12, 4));
    for i in 0..12isize {
        for (j, name) in names.iter().enumerate() {
            assert_eq!(df.at(i, *name).unwrap(), x.get(i, j as isize).unwrap());
        }
    }

    assert!(matches!(df.to_matrix(&["region"]), Err(DataError::InvalidArgument { .. })));
    assert!(matches!(df.to_matrix(&["age", "nope"]), Err(DataError::KeyNotFound { .. })));
}

#[test]
fn failed_encoding_leaves_table_untouched() {
    let mut df = insurance();
    let before = df.clone();
    let err = df.encode_binary("region", "southwest", "southeast").unwrap_err();
    assert!(matches!(err, DataError::EncodingConstraintViolation { .. }));
    assert_eq!(df, before);
    assert_eq!(df.at(2, "region").unwrap(), Cell::Text("southeast"));
}

#[test]
fn scale_split_and_score() {
    let mut df = insurance();
    df.encode_binary("smoker", "yes", "no").unwrap();
    let x = df.to_matrix(&["age", "bmi", "smoker"]).unwrap();
    let y = df.to_matrix(&["charges"]).unwrap();

    let split = train_test_split(&x, &y, DEFAULT_TEST_SIZE, DEFAULT_SEED).unwrap();
    assert_eq!(split.x_train.rows() + split.x_test.rows(), 12);
    assert_eq!(split.x_test.rows(), 2);

    let mut scaler = StandardScaler::new();
    let train = scaler.fit_transform(&split.x_train).unwrap();
    let test = scaler.transform(&split.x_test).unwrap();
    assert_eq!(train.shape(), (10, 3));
    assert_eq!(test.shape(), (2, 3));

    // Predicting the training mean scores exactly zero r2 on the training targets.
    let mean = reduce(&df, "charges", ReduceOp::Mean).unwrap().unwrap();
    assert!(mean > 0.0);
    let y_train_mean = split.y_train.as_slice().iter().sum::<f64>() / split.y_train.rows() as f64;
    let baseline = rust_tabular_ml::Matrix::from_vec(
        split.y_train.rows(),
        1,
        vec![y_train_mean; split.y_train.rows()],
    )
    .unwrap();
    assert!(r2_score(&split.y_train, &baseline).unwrap().abs() < 1e-9);
    assert!(mean_squared_error(&split.y_train, &split.y_train).unwrap() == 0.0);

    let smoker = df.to_matrix(&["smoker"]).unwrap();
    assert_eq!(accuracy_score(&smoker, &smoker).unwrap(), 1.0);
}

#[test]
fn drop_and_add_columns() {
    let mut df = insurance();
    let region = df.drop_column("region").unwrap();
    assert_eq!(region.len(), 12);
    assert_eq!(df.cols(), 6);
    assert!(matches!(df.drop_column("region"), Err(DataError::KeyNotFound { .. })));

    df.add_column("region", region.data).unwrap();
    assert_eq!(df.get_column_names().last(), Some(&"region"));
    assert!(matches!(
        df.add_column("short", vec![1.0, 2.0]),
        Err(DataError::InvalidArgument { .. })
    ));
}
