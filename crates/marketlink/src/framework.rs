//! Contracts expected by the portfolio-optimization framework.
//!
//! The framework treats market contexts and instrument adapters as
//! estimator-like values: it clones them freely while selecting models and
//! cross-validating, and only ever asks an adapter for a price or a realized
//! cash flow under a context. `Clone` is the clone hook; implementations decide
//! what a clone shares.

use std::collections::HashMap;

use marketlink_core::Date;

use crate::adapter::InstrumentAdapter;
use crate::error::AdapterResult;
use crate::snapshot::MarketSnapshot;

/// A market context: a valuation date plus named observable values.
pub trait MarketContext: Clone {
    /// The valuation date, if any.
    fn date(&self) -> Option<Date>;

    /// All observable values.
    fn data(&self) -> &HashMap<String, f64>;

    /// Value of a single observable.
    fn get(&self, name: &str) -> Option<f64> {
        self.data().get(name).copied()
    }
}

/// Prices one instrument under a market context.
pub trait PricingAdapter: Clone {
    /// The context type this adapter understands.
    type Context: MarketContext;

    /// Present value under `context`.
    fn price(&self, context: &Self::Context) -> AdapterResult<f64>;

    /// Cash flow realized on the context's valuation date.
    fn cashflow(&self, context: &Self::Context) -> AdapterResult<f64>;
}

impl MarketContext for MarketSnapshot {
    fn date(&self) -> Option<Date> {
        MarketSnapshot::date(self)
    }

    fn data(&self) -> &HashMap<String, f64> {
        MarketSnapshot::data(self)
    }
}

impl PricingAdapter for InstrumentAdapter {
    type Context = MarketSnapshot;

    fn price(&self, context: &MarketSnapshot) -> AdapterResult<f64> {
        InstrumentAdapter::price(self, context)
    }

    fn cashflow(&self, context: &MarketSnapshot) -> AdapterResult<f64> {
        InstrumentAdapter::cashflow(self, context)
    }
}
