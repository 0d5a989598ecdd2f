//! Priced instruments.

use marketlink_core::{CashFlow, Date};

use crate::error::EngineResult;

/// A financial instrument valued by the engine.
///
/// Only [`npv`](Instrument::npv) is mandatory. Instruments with a payment
/// schedule (bonds, swaps legs) override the schedule accessors; the rest
/// report none and realize no cash flows.
pub trait Instrument: Send + Sync {
    /// Net present value under the engine's current evaluation date and quotes.
    fn npv(&self) -> EngineResult<f64>;

    /// Scheduled cash flows, `None` if the instrument has no schedule.
    fn cashflows(&self) -> Option<&[CashFlow]> {
        None
    }

    /// Maturity date, if the instrument has one.
    fn maturity_date(&self) -> Option<Date> {
        None
    }

    /// Principal redemption paid at maturity, modeled apart from the schedule.
    fn redemption(&self) -> Option<CashFlow> {
        None
    }
}
