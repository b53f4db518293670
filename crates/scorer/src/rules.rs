// Rust guideline compliant 2026-10-19

//! Rule catalogue and predicate evaluation.
//!
//! [`default_rules`] returns the five stock rules in reporting order.
//! [`matches`] evaluates one [`Condition`] against a transaction.

use domain::{Condition, RiskRule, Transaction};

/// Rule id: amount above 1000.
pub const HIGH_AMOUNT: &str = "high_amount";
/// Rule id: gambling or electronics merchant.
pub const RISKY_CATEGORY: &str = "risky_category";
/// Rule id: country other than `"US"`.
pub const FOREIGN_TRANSACTION: &str = "foreign_transaction";
/// Rule id: hour before 06:00 or after 22:59.
pub const UNUSUAL_TIME: &str = "unusual_time";
/// Rule id: mobile device.
pub const MOBILE_DEVICE: &str = "mobile_device";

/// Character offset of the hour in an ISO-8601 timestamp.
const HOUR_OFFSET: usize = 11;

/// The stock rule set, in the order reasons are reported.
#[must_use]
pub fn default_rules() -> Vec<RiskRule> {
    vec![
        RiskRule::new(
            HIGH_AMOUNT,
            Condition::AmountAbove { threshold: 1000.0 },
            0.3,
            "High transaction amount",
        ),
        RiskRule::new(
            RISKY_CATEGORY,
            Condition::CategoryIn { categories: vec!["gambling".to_owned(), "electronics".to_owned()] },
            0.2,
            "Risky merchant category",
        ),
        RiskRule::new(
            FOREIGN_TRANSACTION,
            Condition::CountryNot { country: "US".to_owned() },
            0.2,
            "Foreign transaction",
        ),
        RiskRule::new(
            UNUSUAL_TIME,
            Condition::HourOutside { earliest: 6, latest: 22 },
            0.1,
            "Unusual transaction time",
        ),
        RiskRule::new(
            MOBILE_DEVICE,
            Condition::DeviceIs { device: "mobile".to_owned() },
            0.1,
            "Mobile transaction",
        ),
    ]
}

/// Evaluate `condition` against `tx`.
#[must_use]
pub fn matches(condition: &Condition, tx: &Transaction) -> bool {
    match condition {
        Condition::AmountAbove { threshold } => tx.amount > *threshold,
        Condition::CategoryIn { categories } => {
            let category = tx.category.to_lowercase();
            categories.iter().any(|c| c.to_lowercase() == category)
        }
        Condition::CountryNot { country } => tx.country != *country,
        Condition::DeviceIs { device } => tx.device == *device,
        Condition::HourOutside { earliest, latest } => {
            parse_hour(&tx.transaction_time)
                .is_some_and(|hour| hour < i32::from(*earliest) || hour > i32::from(*latest))
        }
    }
}

/// Read the hour from characters 11..13 of `transaction_time`.
///
/// The slice may be shorter than two characters when the string ends early.
/// It is read as a plain integer: surrounding whitespace and a leading sign
/// are accepted and the value is not range-checked, so `"T24"` reads as 24
/// and `"T-1"` as -1. Returns `None` when the slice is not an integer.
#[must_use]
pub fn parse_hour(transaction_time: &str) -> Option<i32> {
    let slice: String = transaction_time.chars().skip(HOUR_OFFSET).take(2).collect();
    slice.trim().parse().ok()
}
