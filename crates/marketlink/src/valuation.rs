//! Sequential revaluation over a series of snapshots.

use marketlink_core::Date;
use serde::Serialize;
use tracing::debug;

use crate::error::AdapterResult;
use crate::framework::{MarketContext, PricingAdapter};

/// Price and realized cash flow of an instrument on one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    /// Snapshot date.
    pub date: Option<Date>,
    /// Present value.
    pub price: f64,
    /// Cash flow realized on the date.
    pub cashflow: f64,
}

impl Valuation {
    /// Price plus the cash flow paid out on the date.
    pub fn total_value(&self) -> f64 {
        self.price + self.cashflow
    }
}

/// Prices `adapter` under each snapshot, in order.
///
/// Each step synchronizes the engine to that snapshot, so the engine is left
/// reflecting the last one. Stops at the first error.
pub fn revalue<'a, P>(
    adapter: &P,
    snapshots: impl IntoIterator<Item = &'a P::Context>,
) -> AdapterResult<Vec<Valuation>>
where
    P: PricingAdapter,
    P::Context: 'a,
{
    let valuations = snapshots
        .into_iter()
        .map(|snapshot| {
            let price = adapter.price(snapshot)?;
            let cashflow = adapter.cashflow(snapshot)?;
            Ok(Valuation {
                date: snapshot.date(),
                price,
                cashflow,
            })
        })
        .collect::<AdapterResult<Vec<_>>>()?;

    debug!(steps = valuations.len(), "revaluation complete");
    Ok(valuations)
}
