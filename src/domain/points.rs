//! The reward-points rule engine.
//!
//! Scoring is a fold over seven rules. Each rule reads the receipt fields it
//! needs and every field parse yields a `Result`; a failed parse contributes
//! zero points to its rule and never aborts the whole computation.
//!
//! Rules 2 and 3 share one parsed total, which is why the total is parsed
//! once up front and handed to both.

use super::receipt::{Item, ReceiptData};
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Joint date-time format for rule 6, applied to `"{date} {time}"`.
pub const PURCHASE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Time-only format for rule 7.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Four-digit year, two-digit month and day. No sign, no padding.
static PURCHASE_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));
/// One- or two-digit hour, two-digit minute.
static PURCHASE_TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("valid time pattern"));

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// Afternoon window as a half-open hour range: 14:00 up to, not including, 16:00.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Reason a receipt field could not be used by its rule.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FieldError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("amount is not finite: {0:?}")]
    NonFiniteAmount(String),
    #[error("invalid purchase date/time: {0:?}")]
    InvalidDateTime(String),
    #[error("invalid purchase time: {0:?}")]
    InvalidTime(String),
}

/// Parses a textual decimal amount such as `"35.35"`.
pub fn parse_amount(text: &str) -> Result<f64, FieldError> {
    let value: f64 = text
        .parse()
        .map_err(|_| FieldError::InvalidAmount(text.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError::NonFiniteAmount(text.to_string()))
    }
}

/// Parses the purchase date and time together, e.g. `"2022-01-01 13:01"`.
///
/// chrono alone accepts single-digit fields, signed years and leading
/// whitespace, so the field widths are checked first.
pub fn parse_purchase_datetime(date: &str, time: &str) -> Result<NaiveDateTime, FieldError> {
    let joined = format!("{date} {time}");
    if !PURCHASE_DATE_SHAPE.is_match(date) || !PURCHASE_TIME_SHAPE.is_match(time) {
        return Err(FieldError::InvalidDateTime(joined));
    }
    NaiveDateTime::parse_from_str(&joined, PURCHASE_DATETIME_FORMAT)
        .map_err(|_| FieldError::InvalidDateTime(joined))
}

/// Parses the purchase time alone, e.g. `"14:33"`.
pub fn parse_purchase_time(time: &str) -> Result<NaiveTime, FieldError> {
    if !PURCHASE_TIME_SHAPE.is_match(time) {
        return Err(FieldError::InvalidTime(time.to_string()));
    }
    NaiveTime::parse_from_str(time, PURCHASE_TIME_FORMAT)
        .map_err(|_| FieldError::InvalidTime(time.to_string()))
}

/// Points earned under each rule for one receipt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Runs every rule against `data`.
    pub fn evaluate(data: &ReceiptData) -> Self {
        let total = parse_amount(&data.total);

        Self {
            retailer_name: retailer_name_points(&data.retailer),
            round_dollar: round_dollar_points(&total),
            quarter_multiple: quarter_multiple_points(&total),
            item_pairs: item_pair_points(&data.items),
            item_descriptions: data
                .items
                .iter()
                .map(item_description_points)
                .fold(0, u64::saturating_add),
            odd_day: odd_day_points(&data.purchase_date, &data.purchase_time),
            afternoon: afternoon_points(&data.purchase_time),
        }
    }

    /// Sum of all rules, saturating at `u64::MAX` for absurd prices.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the reward points for a receipt.
pub fn calculate_points(data: &ReceiptData) -> u64 {
    PointsBreakdown::evaluate(data).total()
}

/// Rule 1: one point per retailer character once `&` and spaces are removed.
fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| *c != '&' && *c != ' ').count() as u64
}

/// Rule 2: the total has no cents.
fn round_dollar_points(total: &Result<f64, FieldError>) -> u64 {
    match total {
        Ok(value) if *value == value.trunc() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

/// Rule 3: the total in cents is a multiple of 25.
fn quarter_multiple_points(total: &Result<f64, FieldError>) -> u64 {
    match total {
        Ok(value) if (value * 100.0) % 25.0 == 0.0 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

/// Rule 4: five points for every two items.
fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Rule 5: `ceil(price * 0.2)` when the trimmed description length is a
/// multiple of three. An empty description has length 0 and qualifies.
fn item_description_points(item: &Item) -> u64 {
    let trimmed_len = item.short_description.trim().chars().count();
    if trimmed_len % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    match parse_amount(&item.price) {
        // Negative prices are floored at zero; `as` saturates on huge values.
        Ok(price) => (price * PRICE_MULTIPLIER).ceil().max(0.0) as u64,
        Err(_) => 0,
    }
}

/// Rule 6: the purchase day of month is odd.
fn odd_day_points(date: &str, time: &str) -> u64 {
    match parse_purchase_datetime(date, time) {
        Ok(purchased_at) if purchased_at.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Rule 7: purchased between 14:00 and 16:00.
fn afternoon_points(time: &str) -> u64 {
    match parse_purchase_time(time) {
        Ok(purchased_at) if AFTERNOON_HOURS.contains(&purchased_at.hour()) => AFTERNOON_POINTS,
        _ => 0,
    }
}
