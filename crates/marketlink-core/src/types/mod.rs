//! Domain types.

mod cashflow;
mod date;
mod date_input;

pub use cashflow::{CashFlow, CashFlowType};
pub use date::Date;
pub use date_input::{resolve_optional, DateInput};
