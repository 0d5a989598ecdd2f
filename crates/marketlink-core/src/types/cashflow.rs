//! Scheduled cash flows as reported by an instrument.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity
    Redemption,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::Redemption => "Redemption",
        };
        write!(f, "{name}")
    }
}

/// A single dated payment.
///
/// # Example
///
/// ```rust
/// use marketlink_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::coupon(Date::from_ymd(2025, 6, 15).unwrap(), 2.5);
/// assert_eq!(cf.amount(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    date: Date,
    amount: f64,
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64, cf_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            cf_type,
        }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowType::Coupon)
    }

    /// Creates a redemption cash flow.
    #[must_use]
    pub fn redemption(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowType::Redemption)
    }

    /// Payment date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Payment amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Cash flow type.
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// True if the payment falls exactly on `date`.
    pub fn pays_on(&self, date: Date) -> bool {
        self.date == date
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {:.6}", self.date, self.cf_type, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors() {
        let date = Date::from_ymd(2025, 12, 15).unwrap();

        let coupon = CashFlow::coupon(date, 2.5);
        assert_eq!(coupon.cf_type(), CashFlowType::Coupon);
        assert_relative_eq!(coupon.amount(), 2.5);

        let redemption = CashFlow::redemption(date, 100.0);
        assert_eq!(redemption.cf_type(), CashFlowType::Redemption);
        assert_eq!(redemption.date(), date);
    }

    #[test]
    fn test_pays_on_is_exact() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let cf = CashFlow::coupon(date, 3.0);
        assert!(cf.pays_on(date));
        assert!(!cf.pays_on(date.add_days(1).unwrap()));
        assert!(!cf.pays_on(date.add_days(-1).unwrap()));
    }

    #[test]
    fn test_display() {
        let cf = CashFlow::coupon(Date::from_ymd(2025, 6, 15).unwrap(), 2.5);
        assert_eq!(cf.to_string(), "2025-06-15 Coupon: 2.500000");
    }

    #[test]
    fn test_cashflow_type_names() {
        assert_eq!(CashFlowType::Coupon.to_string(), "Coupon");
        assert_eq!(CashFlowType::Redemption.to_string(), "Redemption");
    }
}
