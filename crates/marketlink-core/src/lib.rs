//! # Marketlink Core
//!
//! Core types shared by every Marketlink crate:
//!
//! - **Dates**: the engine-native [`Date`] and the [`DateInput`] union of the
//!   representations callers are allowed to hand in
//! - **Cash flows**: dated payment amounts as reported by an instrument schedule
//! - **Errors**: [`CoreError`] for date resolution failures
//!
//! ## Example
//!
//! ```rust
//! use marketlink_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let from_iso = DateInput::from("2024-03-15").resolve().unwrap();
//! let from_calendar = DateInput::from(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
//!     .resolve()
//!     .unwrap();
//! assert_eq!(from_iso, from_calendar);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowType, Date, DateInput};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowType, Date, DateInput};
