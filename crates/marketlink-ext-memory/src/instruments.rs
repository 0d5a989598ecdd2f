//! Instruments valued by the in-memory engine.

use marketlink_core::{CashFlow, Date};
use marketlink_traits::{
    EngineError, EngineResult, EvaluationSettings, Instrument, Quote, Shared,
};

use crate::quotes::RelinkableQuoteHandle;

/// Days per year for the Act/365 year fraction used when discounting.
const DAYS_PER_YEAR: f64 = 365.0;

/// A bullet bond with a fixed coupon schedule.
///
/// Discounts at a flat, continuously compounded rate read through a
/// relinkable handle, so relinking the handle reprices the bond. Only flows
/// strictly after the evaluation date contribute; an expired bond is worth
/// zero.
pub struct FixedRateBond {
    coupons: Vec<CashFlow>,
    maturity: Date,
    redemption: f64,
    discount_rate: Shared<RelinkableQuoteHandle>,
    settings: Shared<dyn EvaluationSettings>,
}

impl FixedRateBond {
    /// Creates a bond without coupons.
    pub fn new(
        maturity: Date,
        redemption: f64,
        discount_rate: Shared<RelinkableQuoteHandle>,
        settings: Shared<dyn EvaluationSettings>,
    ) -> Self {
        Self {
            coupons: Vec::new(),
            maturity,
            redemption,
            discount_rate,
            settings,
        }
    }

    /// Adds a coupon payment.
    #[must_use]
    pub fn with_coupon(mut self, date: Date, amount: f64) -> Self {
        self.coupons.push(CashFlow::coupon(date, amount));
        self.coupons.sort_by_key(CashFlow::date);
        self
    }

    /// Adds several coupon payments.
    #[must_use]
    pub fn with_coupons(mut self, coupons: impl IntoIterator<Item = (Date, f64)>) -> Self {
        self.coupons
            .extend(coupons.into_iter().map(|(d, a)| CashFlow::coupon(d, a)));
        self.coupons.sort_by_key(CashFlow::date);
        self
    }

    fn discount_factor(rate: f64, from: Date, to: Date) -> f64 {
        let t = from.days_between(&to) as f64 / DAYS_PER_YEAR;
        (-rate * t).exp()
    }
}

impl Instrument for FixedRateBond {
    fn npv(&self) -> EngineResult<f64> {
        let today = self
            .settings
            .evaluation_date()
            .ok_or(EngineError::EvaluationDateUnset)?;
        let rate = self
            .discount_rate
            .value()
            .ok_or_else(|| EngineError::EmptyHandle("discount rate".to_string()))?;

        let pv: f64 = self
            .coupons
            .iter()
            .copied()
            .chain(std::iter::once(CashFlow::redemption(
                self.maturity,
                self.redemption,
            )))
            .filter(|cf| cf.date() > today)
            .map(|cf| cf.amount() * Self::discount_factor(rate, today, cf.date()))
            .sum();

        if !pv.is_finite() {
            return Err(EngineError::Calculation(format!(
                "non-finite present value at {today}"
            )));
        }
        Ok(pv)
    }

    fn cashflows(&self) -> Option<&[CashFlow]> {
        Some(&self.coupons)
    }

    fn maturity_date(&self) -> Option<Date> {
        Some(self.maturity)
    }

    fn redemption(&self) -> Option<CashFlow> {
        Some(CashFlow::redemption(self.maturity, self.redemption))
    }
}

/// A position in a quoted asset (equity, fund unit, FX amount).
///
/// Valued at quantity times the current quote. Has no payment schedule.
pub struct QuotedAsset {
    name: String,
    quantity: f64,
    quote: Shared<dyn Quote>,
}

impl QuotedAsset {
    /// Creates a position of `quantity` units valued off `quote`.
    pub fn new(name: impl Into<String>, quantity: f64, quote: Shared<dyn Quote>) -> Self {
        Self {
            name: name.into(),
            quantity,
            quote,
        }
    }
}

impl Instrument for QuotedAsset {
    fn npv(&self) -> EngineResult<f64> {
        let price = self
            .quote
            .value()
            .ok_or_else(|| EngineError::UnsetQuote(self.name.clone()))?;
        Ok(self.quantity * price)
    }
}
