//! # Marketlink Ext Memory
//!
//! An in-memory valuation engine implementing the Marketlink capability traits.
//!
//! This crate provides default implementations for testing and for small
//! standalone setups:
//! - [`GlobalSettings`]: evaluation-date setting with a write counter, plus a
//!   process-wide singleton
//! - [`SimpleQuote`] and [`RelinkableQuoteHandle`]: market observables
//! - [`FixedRateBond`] and [`QuotedAsset`]: instruments priced off the above
//!
//! Bindings to a production analytics library implement the same traits in
//! their own extension crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod instruments;
mod quotes;
mod settings;

pub use instruments::*;
pub use quotes::*;
pub use settings::*;
