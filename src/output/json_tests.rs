use super::*;
use crate::aggregate::LanguageTotals;
use crate::language::LanguageCatalog;
use crate::ranking::{BucketPolicy, rank};

fn sample_view(policy: BucketPolicy) -> RankedView {
    let totals: LanguageTotals = [("Markdown", 10_u64), ("Python", 5), ("build", 3)]
        .into_iter()
        .collect();
    rank(&totals, &LanguageCatalog::default(), policy)
}

fn parse(view: &RankedView) -> serde_json::Value {
    let output = JsonFormatter.format(view).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn json_has_totals() {
    let json = parse(&sample_view(BucketPolicy::All));
    assert_eq!(json["total"], 18);
    assert_eq!(json["total_display"], "18");
}

#[test]
fn json_rows_are_ascending() {
    let json = parse(&sample_view(BucketPolicy::All));
    let rows = json["rows"].as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["label"], "build");
    assert_eq!(rows[0]["count"], 3);
    assert_eq!(rows[0]["display"], "build 3");
    assert_eq!(rows[2]["label"], "Markdown");
    assert!(rows[0]["color"].as_str().unwrap().starts_with('#'));
}

#[test]
fn json_other_is_null_without_overflow() {
    let json = parse(&sample_view(BucketPolicy::All));
    assert!(json["other"].is_null());
}

#[test]
fn json_other_present_with_overflow() {
    let json = parse(&sample_view(BucketPolicy::TopN(1)));
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["other"]["label"], "Other");
    assert_eq!(json["other"]["count"], 8);
    assert_eq!(json["other"]["color"], "#000000");
}

#[test]
fn json_empty_view() {
    let json = parse(&RankedView::default());
    assert_eq!(json["total"], 0);
    assert!(json["rows"].as_array().unwrap().is_empty());
}
