//! Instrument adapter.

use std::sync::Arc;

use marketlink_core::CashFlow;
use marketlink_traits::{Instrument, Shared};
use tracing::trace;

use crate::error::{AdapterError, AdapterResult};
use crate::snapshot::MarketSnapshot;

/// Exposes one engine instrument to the portfolio framework.
///
/// Holds no state besides the instrument, which is shared with the caller
/// and with every clone of the adapter. Build one adapter per instrument and
/// reuse it across snapshots.
#[derive(Debug, Clone)]
pub struct InstrumentAdapter {
    instrument: Shared<dyn Instrument>,
}

impl InstrumentAdapter {
    /// Wraps an engine instrument.
    pub fn new(instrument: Shared<dyn Instrument>) -> Self {
        Self { instrument }
    }

    /// Wraps an engine instrument held in an `Arc`.
    pub fn from_arc(instrument: Arc<dyn Instrument>) -> Self {
        Self::new(Shared::from_arc(instrument))
    }

    /// The wrapped instrument.
    pub fn instrument(&self) -> &Shared<dyn Instrument> {
        &self.instrument
    }

    /// Present value under `snapshot`.
    ///
    /// Synchronizes the snapshot into the engine first, on every call, then
    /// reads the engine's NPV. The synchronization mutates engine state seen
    /// by every other consumer.
    ///
    /// # Errors
    ///
    /// Engine failures are returned as `AdapterError::Engine`, unchanged.
    pub fn price(&self, snapshot: &MarketSnapshot) -> AdapterResult<f64> {
        snapshot.synchronize();
        let npv = self.instrument.npv()?;
        trace!(npv, "instrument priced");
        Ok(npv)
    }

    /// Cash flow realized on the snapshot date.
    ///
    /// Sums scheduled flows dated exactly on the snapshot date. On the
    /// maturity date the redemption amount is subtracted, since the engine
    /// reports principal apart from the schedule. An instrument without a
    /// schedule realizes nothing. Reads the schedule only; engine state is not
    /// touched.
    ///
    /// An undated snapshot is an error for instruments with a schedule, rather
    /// than a lookup at an empty date that matches no flow. Instruments without
    /// a schedule still realize 0.0 on an undated snapshot.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::MissingDate` when the instrument has a schedule
    /// but the snapshot has no date.
    pub fn cashflow(&self, snapshot: &MarketSnapshot) -> AdapterResult<f64> {
        let Some(schedule) = self.instrument.cashflows() else {
            return Ok(0.0);
        };
        let date = snapshot.date().ok_or(AdapterError::MissingDate)?;

        let mut amount: f64 = schedule
            .iter()
            .filter(|cf| cf.pays_on(date))
            .map(CashFlow::amount)
            .sum();

        if self.instrument.maturity_date() == Some(date) {
            if let Some(redemption) = self.instrument.redemption() {
                amount -= redemption.amount();
            }
        }

        Ok(amount)
    }
}
