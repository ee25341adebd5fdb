use crate::analyser::logic::*;
use crate::analyser::logic::types::NO_VALUE;

fn single_column(values: &[&str]) -> ColumnSummary {
    let rows: Vec<&[&str]> = values.iter().map(std::slice::from_ref).collect();
    let table = Table::from_rows(&["col"], &rows);
    compute_stats(&table)
        .get("col")
        .cloned()
        .expect("column is reported")
}

#[test]
fn test_population_std_dev_fixture() {
    let summary = single_column(&["2", "4", "4", "4", "5", "5", "7", "9"]);
    assert_eq!(
        summary.stat,
        ColumnStatistic::Numeric {
            count: 8,
            mean: 5.0,
            min: 2.0,
            max: 9.0,
            std_dev: 2.0,
        }
    );
}

#[test]
fn test_categorical_fixture() {
    let summary = single_column(&["a", "b", "a", "c", "a"]);
    assert_eq!(
        summary.stat,
        ColumnStatistic::Categorical {
            count: 5,
            unique_count: 3,
            most_frequent: ("a".to_owned(), 3),
        }
    );
    assert_eq!(
        summary.top_values,
        vec![
            ("a".to_owned(), 3),
            ("b".to_owned(), 1),
            ("c".to_owned(), 1)
        ]
    );
}

#[test]
fn test_numeric_bounds_hold() {
    let summary = single_column(&["3.5", "-1", "12", "0.25", "7"]);
    let ColumnStatistic::Numeric {
        count,
        mean,
        min,
        max,
        ..
    } = summary.stat
    else {
        panic!("expected a numeric column, got {:?}", summary.stat);
    };
    assert_eq!(count, 5);
    assert!(min <= mean && mean <= max, "{min} <= {mean} <= {max}");
}

#[test]
fn test_mean_stays_within_bounds_under_rounding() {
    let summary = single_column(&["0.1", "0.1", "0.1"]);
    assert_eq!(
        summary.stat,
        ColumnStatistic::Numeric {
            count: 3,
            mean: 0.1,
            min: 0.1,
            max: 0.1,
            std_dev: 0.0,
        }
    );

    let summary = single_column(&["0.1", "0.2", "0.7", "0.3"]);
    let ColumnStatistic::Numeric { mean, min, max, .. } = summary.stat else {
        panic!("expected a numeric column, got {:?}", summary.stat);
    };
    assert!(min <= mean && mean <= max, "{min} <= {mean} <= {max}");
}

#[test]
fn test_constant_column() {
    let summary = single_column(&["4", "4", "4"]);
    assert_eq!(
        summary.stat,
        ColumnStatistic::Numeric {
            count: 3,
            mean: 4.0,
            min: 4.0,
            max: 4.0,
            std_dev: 0.0,
        }
    );
}

#[test]
fn test_mixed_column_drops_non_numeric_cells() {
    let summary = single_column(&["1", "x", "3"]);
    assert_eq!(
        summary.stat,
        ColumnStatistic::Numeric {
            count: 2,
            mean: 2.0,
            min: 1.0,
            max: 3.0,
            std_dev: 1.0,
        }
    );
}

#[test]
fn test_missing_cells_are_excluded() {
    let numeric = single_column(&["1", "", "3", ""]);
    assert_eq!(numeric.stat.count(), 2);
    assert_eq!(numeric.missing, 2);

    let categorical = single_column(&["", "a", "", "a", "b"]);
    assert_eq!(
        categorical.stat,
        ColumnStatistic::Categorical {
            count: 3,
            unique_count: 2,
            most_frequent: ("a".to_owned(), 2),
        }
    );
    assert!(
        categorical.top_values.iter().all(|(v, _)| !v.is_empty()),
        "empty cells must not appear as a category"
    );
}

#[test]
fn test_all_missing_column() {
    let summary = single_column(&["", ""]);
    assert_eq!(
        summary.stat,
        ColumnStatistic::Categorical {
            count: 0,
            unique_count: 0,
            most_frequent: (NO_VALUE.to_owned(), 0),
        }
    );
}

#[test]
fn test_tie_goes_to_first_seen_value() {
    let summary = single_column(&["blue", "red", "red", "blue", "green"]);
    let ColumnStatistic::Categorical { most_frequent, .. } = summary.stat else {
        panic!("expected a categorical column");
    };
    assert_eq!(most_frequent, ("blue".to_owned(), 2));
}

#[test]
fn test_non_finite_literals_are_categorical() {
    let summary = single_column(&["inf", "NaN", "inf"]);
    assert!(!summary.stat.is_numeric(), "got {:?}", summary.stat);
}

#[test]
fn test_empty_table_gives_empty_map() {
    let table = Table::from_rows(&["a", "b"], &[]);
    assert!(compute_stats(&table).is_empty());
}

#[test]
fn test_short_rows_are_padded_as_missing() {
    let table = Table::new(
        vec!["a".to_owned(), "b".to_owned()],
        vec![vec!["1".to_owned()], vec!["2".to_owned(), "x".to_owned()]],
    );
    let stats = compute_stats(&table);
    assert_eq!(stats.get("b").map(|s| s.missing), Some(1));
    assert_eq!(stats.stat("a").map(ColumnStatistic::count), Some(2));
}
