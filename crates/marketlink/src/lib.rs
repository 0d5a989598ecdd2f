//! # Marketlink
//!
//! Glue between a portfolio-optimization framework and an external valuation
//! engine.
//!
//! - [`MarketSnapshot`]: the market context of one scenario. Holds the
//!   valuation date and named observable values, and on
//!   [`synchronize`](MarketSnapshot::synchronize) pushes them into the engine's
//!   quotes and relinkable handles and moves the engine's evaluation date.
//! - [`InstrumentAdapter`]: wraps one engine instrument. `price` synchronizes
//!   then reads NPV; `cashflow` reads the schedule without touching engine
//!   state.
//!
//! ## Example
//!
//! ```rust,ignore
//! use marketlink::prelude::*;
//!
//! let snapshot = MarketSnapshot::builder(settings)
//!     .date("2024-03-15")
//!     .bind("spot", spot_quote)
//!     .value("spot", 101.5)
//!     .build()?;
//!
//! let adapter = InstrumentAdapter::new(instrument);
//! let pv = adapter.price(&snapshot)?;
//! let realized = adapter.cashflow(&snapshot)?;
//! ```
//!
//! ## Engine state
//!
//! The engine's evaluation date and its quote objects are process-wide
//! mutable state. Synchronization mutates them for every consumer; use one
//! sequence of snapshots at a time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod adapter;
pub mod binding;
pub mod config;
pub mod error;
pub mod framework;
pub mod snapshot;
pub mod valuation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::InstrumentAdapter;
    pub use crate::binding::{BindingKind, EngineBinding};
    pub use crate::config::SnapshotConfig;
    pub use crate::error::{AdapterError, AdapterResult};
    pub use crate::framework::{MarketContext, PricingAdapter};
    pub use crate::snapshot::{MarketSnapshot, MarketSnapshotBuilder, SyncReport};
    pub use crate::valuation::{revalue, Valuation};
    pub use marketlink_core::{CashFlow, Date, DateInput};
    pub use marketlink_traits::{
        EngineError, EngineObject, EvaluationSettings, Instrument, Quote, RelinkableHandle,
        Shared,
    };
}

pub use adapter::InstrumentAdapter;
pub use error::{AdapterError, AdapterResult};
pub use snapshot::MarketSnapshot;
