//! Result table and report output.

use mcdm_core::rank_alternatives;
use mcdm_model::{
    AlternativeId, AlternativeRow, CriterionId, CriterionTable, NameTable, RankingOptions,
    RankingOutcome,
};
use polars::prelude::DataType;

use mcdm_report::{
    RankingReport, ReportOptions, result_frame, result_rows, write_json_report, write_result_csv,
};

fn criterion(name: &str) -> CriterionId {
    CriterionId::new(name).unwrap()
}

fn names() -> NameTable {
    [(1, "A"), (2, "B"), (3, "C")]
        .into_iter()
        .map(|(id, name)| (AlternativeId::new(id), name.to_string()))
        .collect()
}

fn outcome(options: &RankingOptions) -> RankingOutcome {
    let table = CriterionTable::new(
        vec![criterion("col2"), criterion("col1")],
        vec![
            AlternativeRow::new(AlternativeId::new(1), vec![1.0, 10.0]),
            AlternativeRow::new(AlternativeId::new(2), vec![5.0, 8.0]),
            AlternativeRow::new(AlternativeId::new(3), vec![5.0, 8.0]),
            AlternativeRow::new(AlternativeId::new(4), vec![9.0, 2.0]),
        ],
    )
    .unwrap();
    rank_alternatives(&table, &[2.0, 1.0], options).unwrap()
}

#[test]
fn result_rows_follow_ranked_order() {
    let outcome = outcome(&RankingOptions::new().with_pareto(false));
    let rendered = result_rows(&outcome, &names())
        .iter()
        .map(|row| {
            format!(
                "{}. tier {} | {} ({}) | {:?}",
                row.position, row.tier, row.name, row.id, row.values
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    1. tier 1 | A (1) | [10.0, 1.0]
    2. tier 2 | B (2) | [8.0, 5.0]
    3. tier 2 | C (3) | [8.0, 5.0]
    4. tier 3 | #4 (4) | [2.0, 9.0]
    ");
}

#[test]
fn result_frame_orders_columns_by_significance() {
    let outcome = outcome(&RankingOptions::default());
    let options = ReportOptions {
        name_header: "Alternatives".to_string(),
        ..ReportOptions::default()
    };
    let df = result_frame(&outcome, &names(), &options).unwrap();

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(columns, vec!["Position", "Tier", "Alternatives", "col1", "col2"]);
    assert_eq!(df.height(), 2);
}

#[test]
fn result_frame_without_rank_columns() {
    let outcome = outcome(&RankingOptions::default());
    let options = ReportOptions {
        include_rank_columns: false,
        ..ReportOptions::default()
    };
    let df = result_frame(&outcome, &names(), &options).unwrap();
    assert_eq!(df.width(), 3);
}

#[test]
fn writes_csv_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cards_result.csv");
    let outcome = outcome(&RankingOptions::default());

    write_result_csv(&path, &outcome, &names(), &ReportOptions::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Position,Tier,Alternative,col1,col2");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,1,A,"));
    assert!(lines[2].starts_with("2,2,#4,"));
}

#[test]
fn json_report_includes_pareto_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let options = RankingOptions::default();
    let outcome = outcome(&options);

    write_json_report(&path, &RankingReport::new(&outcome, &names(), options)).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["criteria_order"], serde_json::json!(["col1", "col2"]));
    assert_eq!(json["pareto"]["discarded"], serde_json::json!([2, 3]));
    assert_eq!(json["pareto"]["mean"], serde_json::json!(0.0075));
    assert_eq!(json["ranked"][1]["name"], "#4");
    assert_eq!(json["options"]["direction"], "lowest-first");
}

fn columns_of(df: &polars::prelude::DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn tier_named_outcome() -> RankingOutcome {
    let table = CriterionTable::new(
        vec![criterion("Tier"), criterion("Price")],
        vec![
            AlternativeRow::new(AlternativeId::new(1), vec![3.0, 1.0]),
            AlternativeRow::new(AlternativeId::new(2), vec![1.0, 2.0]),
        ],
    )
    .unwrap();
    rank_alternatives(&table, &[1.0, 2.0], &RankingOptions::new().with_pareto(false)).unwrap()
}

#[test]
fn criterion_named_like_rank_column_keeps_its_label() {
    let outcome = tier_named_outcome();
    let df = result_frame(&outcome, &NameTable::new(), &ReportOptions::default()).unwrap();

    assert_eq!(
        columns_of(&df),
        vec!["Position", "Tier_1", "Alternative", "Tier", "Price"]
    );
    assert_eq!(df.height(), 2);
}

#[test]
fn name_header_colliding_with_criterion_gets_suffix() {
    let outcome = tier_named_outcome();
    let options = ReportOptions {
        name_header: "Price".to_string(),
        ..ReportOptions::default()
    };
    let df = result_frame(&outcome, &names(), &options).unwrap();
    assert_eq!(
        columns_of(&df),
        vec!["Position", "Tier_1", "Price_1", "Tier", "Price"]
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranked.csv");
    write_result_csv(&path, &outcome, &names(), &options).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written.lines().next(),
        Some("Position,Tier_1,Price_1,Tier,Price")
    );
}

#[test]
fn rank_columns_are_unsigned_64_bit() {
    let outcome = outcome(&RankingOptions::default());
    let df = result_frame(&outcome, &names(), &ReportOptions::default()).unwrap();
    assert_eq!(df.column("Position").unwrap().dtype(), &DataType::UInt64);
    assert_eq!(df.column("Tier").unwrap().dtype(), &DataType::UInt64);
}

#[cfg(target_os = "linux")]
#[test]
fn json_report_surfaces_write_failure() {
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return;
    }
    let options = RankingOptions::default();
    let outcome = outcome(&options);

    let err = write_json_report(full, &RankingReport::new(&outcome, &names(), options))
        .unwrap_err();
    assert!(matches!(err, mcdm_report::ReportError::Write { .. }));
}
