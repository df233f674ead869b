mod common;

use common::{corner_market_receipt, receipt, target_receipt};
use receipt_processor::domain::points::{PointsBreakdown, calculate_points};

#[test]
fn test_canonical_receipts() {
    assert_eq!(calculate_points(&target_receipt()), 28);
    assert_eq!(calculate_points(&corner_market_receipt()), 109);
}

#[test]
fn test_two_item_target_receipt() {
    let data = receipt(
        "Target",
        "2022-01-01",
        "13:01",
        &[("Mountain Dew 12PK", "6.49"), ("Emils Cheese Pizza", "12.25")],
        "35.35",
    );

    let breakdown = PointsBreakdown::evaluate(&data);

    assert_eq!(breakdown.retailer_name, 6);
    assert_eq!(breakdown.round_dollar, 0);
    assert_eq!(breakdown.quarter_multiple, 0);
    assert_eq!(breakdown.item_pairs, 5);
    // Only "Emils Cheese Pizza" (18 characters) qualifies: ceil(12.25 * 0.2) = 3
    assert_eq!(breakdown.item_descriptions, 3);
    assert_eq!(breakdown.odd_day, 6);
    assert_eq!(breakdown.afternoon, 0);
    assert_eq!(calculate_points(&data), 20);
}

#[test]
fn test_round_total_scores_both_total_rules() {
    let breakdown = PointsBreakdown::evaluate(&receipt("", "", "", &[], "100.00"));
    assert_eq!(breakdown.round_dollar, 50);
    assert_eq!(breakdown.quarter_multiple, 25);
    assert_eq!(breakdown.total(), 75);
}

#[test]
fn test_afternoon_boundaries() {
    let at = |time: &str| PointsBreakdown::evaluate(&receipt("", "2022-01-02", time, &[], "")).afternoon;
    assert_eq!(at("14:33"), 10);
    assert_eq!(at("16:00"), 0);
}

#[test]
fn test_unparseable_total_scores_nothing_for_either_total_rule() {
    for total in ["", "abc", "$35.35", "35,35", "inf"] {
        let breakdown = PointsBreakdown::evaluate(&receipt("", "", "", &[], total));
        assert_eq!(breakdown.round_dollar, 0, "total {total:?}");
        assert_eq!(breakdown.quarter_multiple, 0, "total {total:?}");
    }
}

#[test]
fn test_bad_fields_only_zero_their_own_rule() {
    let data = receipt(
        "Target",
        "someday",
        "14:10",
        &[("abc", "oops"), ("def", "5.00")],
        "2.50",
    );

    let breakdown = PointsBreakdown::evaluate(&data);

    assert_eq!(breakdown.retailer_name, 6);
    assert_eq!(breakdown.round_dollar, 0);
    assert_eq!(breakdown.quarter_multiple, 25);
    assert_eq!(breakdown.item_pairs, 5);
    assert_eq!(breakdown.item_descriptions, 1);
    assert_eq!(breakdown.odd_day, 0);
    assert_eq!(breakdown.afternoon, 10);
}

#[test]
fn test_blank_description_still_scores_its_price() {
    let data = receipt("", "", "", &[("    ", "7.00")], "");
    assert_eq!(PointsBreakdown::evaluate(&data).item_descriptions, 2);
}

#[test]
fn test_no_items_scores_nothing_from_item_rules() {
    let breakdown = PointsBreakdown::evaluate(&receipt("Target", "2022-01-01", "13:01", &[], "35.35"));
    assert_eq!(breakdown.item_pairs, 0);
    assert_eq!(breakdown.item_descriptions, 0);
}

#[test]
fn test_scoring_is_deterministic() {
    let data = target_receipt();
    let first = calculate_points(&data);
    for _ in 0..100 {
        assert_eq!(calculate_points(&data), first);
    }
}

#[test]
fn test_extreme_amounts_never_panic() {
    let huge = receipt(
        "Target",
        "2022-01-01",
        "14:30",
        &[("abc", "1e300"), ("def", "1e300"), ("ghi", "1.7976931348623157e308")],
        "1e300",
    );
    assert_eq!(calculate_points(&huge), u64::MAX);

    let tiny = receipt("", "", "", &[("abc", "-1e300"), ("def", "1e-300")], "-1e300");
    let breakdown = PointsBreakdown::evaluate(&tiny);
    assert_eq!(breakdown.item_descriptions, 1);
    assert_eq!(breakdown.round_dollar, 50);
}

#[test]
fn test_misshapen_dates_score_nothing() {
    for date in ["2022-1-1", "2022-01-1", "+2022-01-01", " 2022-01-01", "22-01-01"] {
        let breakdown = PointsBreakdown::evaluate(&receipt("", date, "14:30", &[], ""));
        assert_eq!(breakdown.odd_day, 0, "date {date:?}");
        assert_eq!(breakdown.afternoon, 10, "date {date:?}");
    }
}

#[test]
fn test_misshapen_times_score_nothing() {
    for time in ["14:3", " 14:30", "14:30 ", "014:30", "14:30:00"] {
        let breakdown = PointsBreakdown::evaluate(&receipt("", "2022-01-01", time, &[], ""));
        assert_eq!(breakdown.odd_day, 0, "time {time:?}");
        assert_eq!(breakdown.afternoon, 0, "time {time:?}");
    }

    // A one-digit hour is still a valid time.
    let breakdown = PointsBreakdown::evaluate(&receipt("", "2022-01-01", "2:30", &[], ""));
    assert_eq!(breakdown.odd_day, 6);
    assert_eq!(breakdown.afternoon, 0);
}
