//! # Points Module
//!
//! The points engine: seven independent rules, each scoring one aspect of a
//! receipt, summed into a single non-negative integer.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule              Field(s)              Contribution                   │
//! │  ────────────────  ────────────────────  ───────────────────────────    │
//! │  RetailerName      retailer              +1 per letter or digit         │
//! │  RoundTotal        total                 +50 if no cents                │
//! │  QuarterMultiple   total                 +25 if cents % 25 == 0         │
//! │  ItemPairs         items                 +5 per two items               │
//! │  ItemDescription   items[].description   +ceil(price × 0.2) when the    │
//! │                    items[].price          trimmed length % 3 == 0       │
//! │  OddDay            purchaseDate          +6 if the day is odd           │
//! │  AfternoonWindow   purchaseTime          +10 if 14:00 < t < 16:00       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Containment
//! ```text
//! Rule::evaluate ──► RuleResult ──┬── Ok(points) ──► points
//!                                 └── Err(e)     ──► 0, e kept in failures
//! ```
//! A rule that cannot read its field contributes zero. [`calculate`] never
//! fails; [`breakdown`] shows which rules were zeroed and why.
//!
//! ## Usage
//! ```rust
//! use receipt_core::points::{self, Rule};
//! use receipt_core::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     id: "id-1".to_string(),
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     total: "9.00".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//! };
//!
//! let breakdown = points::breakdown(&receipt);
//! assert_eq!(breakdown.points_for(Rule::RoundTotal), 50);
//! assert_eq!(breakdown.total(), 109);
//! assert_eq!(points::calculate(&receipt), 109);
//! ```

use chrono::{Datelike, Timelike};

use crate::calendar::{parse_purchase_date, parse_purchase_time};
use crate::error::{MoneyError, RuleError, RuleResult};
use crate::money::{DecimalAmount, Money};
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Points per alphanumeric character in the retailer name.
pub const RETAILER_CHAR_POINTS: u64 = 1;

/// Points for a total with no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Points for a total that is a multiple of $0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Points per pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Price multiplier for qualifying item descriptions, as a fraction (0.2).
pub const DESCRIPTION_PRICE_MULTIPLIER: (u64, u64) = (1, 5);

/// Trimmed description lengths divisible by this qualify.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// Points for an odd day of the month.
pub const ODD_DAY_POINTS: u64 = 6;

/// Points for a purchase inside the afternoon window.
pub const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// Afternoon window bounds, minutes after midnight, both exclusive.
const AFTERNOON_WINDOW_START: u32 = 14 * 60;
const AFTERNOON_WINDOW_END: u32 = 16 * 60;

// =============================================================================
// Rule
// =============================================================================

/// One independent scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RetailerName,
    RoundTotal,
    QuarterMultiple,
    ItemPairs,
    ItemDescription,
    OddDay,
    AfternoonWindow,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundTotal,
        Rule::QuarterMultiple,
        Rule::ItemPairs,
        Rule::ItemDescription,
        Rule::OddDay,
        Rule::AfternoonWindow,
    ];

    /// Stable snake_case name, used as a log field.
    pub const fn name(&self) -> &'static str {
        match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundTotal => "round_total",
            Rule::QuarterMultiple => "quarter_multiple",
            Rule::ItemPairs => "item_pairs",
            Rule::ItemDescription => "item_description",
            Rule::OddDay => "odd_day",
            Rule::AfternoonWindow => "afternoon_window",
        }
    }

    /// Scores one receipt under this rule.
    ///
    /// Parse failures are turned into a zero contribution here and kept in
    /// [`RuleOutcome::failures`].
    pub fn evaluate(&self, receipt: &Receipt) -> RuleOutcome {
        match self {
            Rule::RetailerName => {
                RuleOutcome::scored(*self, points_for_retailer_name(&receipt.retailer))
            }
            Rule::RoundTotal => {
                RuleOutcome::from_result(*self, points_for_round_total(&receipt.total))
            }
            Rule::QuarterMultiple => {
                RuleOutcome::from_result(*self, points_for_quarter_multiple(&receipt.total))
            }
            Rule::ItemPairs => RuleOutcome::scored(*self, points_for_item_pairs(&receipt.items)),
            Rule::ItemDescription => {
                // Per item: one unreadable price zeroes that item only
                let mut outcome = RuleOutcome::scored(*self, 0);
                for item in &receipt.items {
                    outcome.absorb(points_for_item_description(item));
                }
                outcome
            }
            Rule::OddDay => {
                RuleOutcome::from_result(*self, points_for_odd_day(&receipt.purchase_date))
            }
            Rule::AfternoonWindow => RuleOutcome::from_result(
                *self,
                points_for_afternoon_window(&receipt.purchase_time),
            ),
        }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// What one rule contributed, and any failures it absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub points: u64,
    pub failures: Vec<RuleError>,
}

impl RuleOutcome {
    fn scored(rule: Rule, points: u64) -> Self {
        RuleOutcome {
            rule,
            points,
            failures: Vec::new(),
        }
    }

    fn from_result(rule: Rule, result: RuleResult) -> Self {
        let mut outcome = RuleOutcome::scored(rule, 0);
        outcome.absorb(result);
        outcome
    }

    /// Adds one result: `Ok` adds its points, `Err` adds zero and is recorded.
    fn absorb(&mut self, result: RuleResult) {
        match result {
            Ok(points) => self.points += points,
            Err(err) => self.failures.push(err),
        }
    }

    /// True when at least one input this rule needed could not be parsed.
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Per-rule outcomes for one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub outcomes: Vec<RuleOutcome>,
}

impl PointsBreakdown {
    /// Sum of every rule's contribution.
    pub fn total(&self) -> u64 {
        self.outcomes.iter().map(|o| o.points).sum()
    }

    /// Contribution of a single rule.
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.outcomes
            .iter()
            .filter(|o| o.rule == rule)
            .map(|o| o.points)
            .sum()
    }

    /// Every failure absorbed while scoring, with the rule it came from.
    pub fn failures(&self) -> impl Iterator<Item = (Rule, &RuleError)> {
        self.outcomes
            .iter()
            .flat_map(|o| o.failures.iter().map(move |e| (o.rule, e)))
    }
}

// =============================================================================
// Aggregator
// =============================================================================

/// Evaluates every rule against the receipt.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        outcomes: Rule::ALL.iter().map(|rule| rule.evaluate(receipt)).collect(),
    }
}

/// Total points for a receipt.
///
/// Deterministic, side-effect free, and total: it returns a number for any
/// receipt, including one that never went through validation.
pub fn calculate(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point for every Unicode letter or digit in the retailer name.
pub fn points_for_retailer_name(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64 * RETAILER_CHAR_POINTS
}

/// 50 points if the total is a round dollar amount.
pub fn points_for_round_total(total: &str) -> RuleResult {
    let total = Money::parse(total)?;
    Ok(if total.is_round_dollar() {
        ROUND_TOTAL_POINTS
    } else {
        0
    })
}

/// 25 points if the total is a multiple of 0.25.
pub fn points_for_quarter_multiple(total: &str) -> RuleResult {
    let total = Money::parse(total)?;
    Ok(if total.is_multiple_of(25) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    })
}

/// 5 points for every two items; an odd item out earns nothing.
pub fn points_for_item_pairs(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price × 0.2)` when the trimmed description length is a non-zero
/// multiple of 3.
///
/// Length is counted in UTF-8 bytes after trimming Unicode whitespace. The
/// price is read as any unsigned decimal (`"10"`, `"3.5"`), and only for
/// qualifying items, so an unreadable price on a non-qualifying item is not a
/// failure.
pub fn points_for_item_description(item: &Item) -> RuleResult {
    let length = item.short_description.trim().len();
    if length == 0 || length % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return Ok(0);
    }

    let price = DecimalAmount::parse(&item.price)?;
    let (numerator, denominator) = DESCRIPTION_PRICE_MULTIPLIER;
    price
        .ceil_scaled(numerator, denominator)
        .ok_or_else(|| RuleError::InvalidAmount(MoneyError::Overflow(item.price.clone())))
}

/// 6 points if the day of the purchase date is odd.
pub fn points_for_odd_day(purchase_date: &str) -> RuleResult {
    let date = parse_purchase_date(purchase_date)
        .ok_or_else(|| RuleError::InvalidDate(purchase_date.to_string()))?;

    Ok(if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase time is after 14:00 and before 16:00.
pub fn points_for_afternoon_window(purchase_time: &str) -> RuleResult {
    let time = parse_purchase_time(purchase_time)
        .ok_or_else(|| RuleError::InvalidTime(purchase_time.to_string()))?;

    let minutes = time.hour() * 60 + time.minute();
    Ok(
        if minutes > AFTERNOON_WINDOW_START && minutes < AFTERNOON_WINDOW_END {
            AFTERNOON_WINDOW_POINTS
        } else {
            0
        },
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn target_receipt() -> Receipt {
        Receipt {
            id: "target".to_string(),
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            id: "corner-market".to_string(),
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            total: "9.00".to_string(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
        }
    }

    #[rstest]
    #[case::all_letters("abcdefghijklmnopqrstuvwxyz", 26)]
    #[case::all_letters_uppercase("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 26)]
    #[case::all_numbers("0123456789", 10)]
    #[case::all_symbols("!@#$%^&*()", 0)]
    #[case::letters_and_symbols("abcdefghijklmnopqrstuvwxyz!@#$%^&*()", 26)]
    #[case::mixed_with_spaces_and_dashes("aB@c!D012#3eFGhi45jkl*mn67oPQRst8u9vw@xyz - -", 36)]
    #[case::unicode_letters("Café Zürich", 10)]
    #[case::empty("", 0)]
    fn test_retailer_name(#[case] retailer: &str, #[case] expected: u64) {
        assert_eq!(points_for_retailer_name(retailer), expected);
    }

    #[rstest]
    #[case("42.00", 50)]
    #[case("0.00", 50)]
    #[case("42.01", 0)]
    #[case("42.25", 0)]
    fn test_round_total(#[case] total: &str, #[case] expected: u64) {
        assert_eq!(points_for_round_total(total), Ok(expected));
    }

    #[rstest]
    #[case("42.00", 25)]
    #[case("42.25", 25)]
    #[case("42.50", 25)]
    #[case("42.75", 25)]
    #[case("42.42", 0)]
    fn test_quarter_multiple(#[case] total: &str, #[case] expected: u64) {
        assert_eq!(points_for_quarter_multiple(total), Ok(expected));
    }

    #[rstest]
    #[case("9.99999999999999999999999")]
    #[case("42.2499999999999999999999999999")]
    #[case("!@#$%^&*()")]
    #[case("42")]
    fn test_total_rules_reject_malformed_totals(#[case] total: &str) {
        let expected = Err(RuleError::InvalidAmount(MoneyError::InvalidFormat(
            total.to_string(),
        )));
        assert_eq!(points_for_round_total(total), expected);
        assert_eq!(points_for_quarter_multiple(total), expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(4, 10)]
    #[case(5, 10)]
    #[case(6, 15)]
    fn test_item_pairs(#[case] count: usize, #[case] expected: u64) {
        let items = vec![Item::default(); count];
        assert_eq!(points_for_item_pairs(&items), expected);
    }

    #[rstest]
    #[case::length_multiple_of_three("abc", "3.00", 1)] // 0.6 → 1
    #[case::length_not_multiple_of_three("abcde", "3.00", 0)]
    #[case::trimmed_length_multiple_of_three("  abc  ", "6.42", 2)] // 1.284 → 2
    #[case::exact_product_is_not_rounded("abc", "35.00", 7)]
    #[case::zero_price("abc", "0.00", 0)]
    #[case::empty_description("", "10.00", 0)]
    #[case::whitespace_description("      ", "10.00", 0)]
    #[case::bad_price_on_non_qualifying_item("abcd", "oops", 0)]
    #[case::price_with_one_decimal("abc", "3.5", 1)] // 0.7 → 1
    #[case::price_without_fraction("abc", "10", 2)]
    #[case::price_with_three_decimals("abc", "1.999", 1)] // 0.3998 → 1
    #[case::multibyte_counted_in_bytes("Crème", "10.00", 2)] // 6 bytes
    #[case::multibyte_not_multiple_of_three("Cafés!", "10.00", 0)] // 7 bytes
    #[case::multibyte_trimmed(" \u{3000}日本\u{3000} ", "5.00", 1)] // 6 bytes
    fn test_item_description(
        #[case] description: &str,
        #[case] price: &str,
        #[case] expected: u64,
    ) {
        assert_eq!(
            points_for_item_description(&Item::new(description, price)),
            Ok(expected)
        );
    }

    #[test]
    fn test_item_description_bad_price_is_an_error() {
        let result = points_for_item_description(&Item::new("abc", "!@#$%^"));
        assert!(matches!(result, Err(RuleError::InvalidAmount(_))));
    }

    #[rstest]
    #[case::odd_date("2025-03-15", 6)]
    #[case::even_date("2025-03-16", 0)]
    #[case::leap_day("2024-02-29", 6)]
    #[case::first_of_month("2022-01-01", 6)]
    fn test_odd_day(#[case] date: &str, #[case] expected: u64) {
        assert_eq!(points_for_odd_day(date), Ok(expected));
    }

    #[rstest]
    #[case("42.42")]
    #[case("2022-3-5")]
    #[case("+2022-03-05")]
    #[case("2023-02-29")]
    fn test_odd_day_invalid_date(#[case] date: &str) {
        assert_eq!(
            points_for_odd_day(date),
            Err(RuleError::InvalidDate(date.to_string()))
        );
    }

    #[rstest]
    #[case::window_start_excluded("14:00", 0)]
    #[case::just_after_start("14:01", 10)]
    #[case::inside("15:00", 10)]
    #[case::just_before_end("15:59", 10)]
    #[case::window_end_excluded("16:00", 0)]
    #[case::morning("08:13", 0)]
    fn test_afternoon_window(#[case] time: &str, #[case] expected: u64) {
        assert_eq!(points_for_afternoon_window(time), Ok(expected));
    }

    #[rstest]
    #[case("42.42")]
    #[case("14:5")]
    #[case("3:30")]
    #[case("24:00")]
    fn test_afternoon_window_invalid_time(#[case] time: &str) {
        assert_eq!(
            points_for_afternoon_window(time),
            Err(RuleError::InvalidTime(time.to_string()))
        );
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let receipt = target_receipt();
        let breakdown = breakdown(&receipt);

        assert_eq!(breakdown.points_for(Rule::RetailerName), 6);
        assert_eq!(breakdown.points_for(Rule::RoundTotal), 0);
        assert_eq!(breakdown.points_for(Rule::QuarterMultiple), 0);
        assert_eq!(breakdown.points_for(Rule::ItemPairs), 10);
        assert_eq!(breakdown.points_for(Rule::ItemDescription), 6);
        assert_eq!(breakdown.points_for(Rule::OddDay), 6);
        assert_eq!(breakdown.points_for(Rule::AfternoonWindow), 0);
        assert_eq!(calculate(&receipt), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let receipt = corner_market_receipt();
        let breakdown = breakdown(&receipt);

        assert_eq!(breakdown.points_for(Rule::RetailerName), 14);
        assert_eq!(breakdown.points_for(Rule::RoundTotal), 50);
        assert_eq!(breakdown.points_for(Rule::QuarterMultiple), 25);
        assert_eq!(breakdown.points_for(Rule::ItemPairs), 10);
        assert_eq!(breakdown.points_for(Rule::AfternoonWindow), 10);
        assert_eq!(calculate(&receipt), 109);
    }

    #[rstest]
    #[case("42.00", 75)]
    #[case("42.25", 25)]
    #[case("42.42", 0)]
    fn test_total_rules_combined(#[case] total: &str, #[case] expected: u64) {
        let receipt = Receipt {
            total: total.to_string(),
            ..target_receipt()
        };
        let breakdown = breakdown(&receipt);
        assert_eq!(
            breakdown.points_for(Rule::RoundTotal) + breakdown.points_for(Rule::QuarterMultiple),
            expected
        );
    }

    #[test]
    fn test_calculate_is_deterministic_and_leaves_receipt_untouched() {
        let receipt = target_receipt();
        let before = receipt.clone();

        let first = calculate(&receipt);
        for _ in 0..10 {
            assert_eq!(calculate(&receipt), first);
        }
        assert_eq!(calculate(&before.clone()), first);
        assert_eq!(receipt, before);
    }

    #[test]
    fn test_malformed_fields_zero_only_their_rules() {
        let receipt = Receipt {
            purchase_date: "2022/01/01".to_string(),
            purchase_time: "1:01 PM".to_string(),
            total: "35.3".to_string(),
            items: vec![
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "twelve"),
            ],
            ..target_receipt()
        };

        let breakdown = breakdown(&receipt);

        // Retailer and pairs still score; date, time, total are zeroed
        assert_eq!(breakdown.points_for(Rule::RetailerName), 6);
        assert_eq!(breakdown.points_for(Rule::ItemPairs), 5);
        assert_eq!(breakdown.points_for(Rule::ItemDescription), 3);
        assert_eq!(breakdown.total(), 14);

        let failed: Vec<Rule> = breakdown.failures().map(|(rule, _)| rule).collect();
        assert_eq!(
            failed,
            vec![
                Rule::RoundTotal,
                Rule::QuarterMultiple,
                Rule::ItemDescription,
                Rule::OddDay,
                Rule::AfternoonWindow,
            ]
        );
        assert!(!breakdown.outcomes[0].is_degraded());
    }

    #[test]
    fn test_calculate_without_items() {
        let receipt = Receipt {
            items: Vec::new(),
            ..corner_market_receipt()
        };
        // 14 + 50 + 25 + 10 (afternoon)
        assert_eq!(calculate(&receipt), 99);
    }

    #[test]
    fn test_breakdown_covers_every_rule_once() {
        let breakdown = breakdown(&target_receipt());
        let rules: Vec<Rule> = breakdown.outcomes.iter().map(|o| o.rule).collect();
        assert_eq!(rules, Rule::ALL.to_vec());
        assert_eq!(Rule::AfternoonWindow.name(), "afternoon_window");
    }
}
