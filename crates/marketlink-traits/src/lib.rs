//! # Marketlink Traits
//!
//! Capability contracts the adapter requires from a valuation engine.
//!
//! This crate contains ONLY trait definitions and the thin [`Shared`] alias
//! wrapper. Engine implementations live in separate extension crates.
//!
//! ## Module Structure
//!
//! - [`engine`]: global evaluation settings, quotes, relinkable handles, and
//!   the [`EngineObject`](engine::EngineObject) capability probe
//! - [`instrument`]: the priced instrument and its optional schedule
//! - [`shared`]: explicit aliasing of engine objects that cannot be cloned
//!
//! ## Dependency Injection
//!
//! The adapter never reaches for a process global directly. It is handed
//! the engine's settings object and quote objects:
//!
//! ```ignore
//! let settings: Shared<dyn EvaluationSettings> = Shared::from_arc(GlobalSettings::instance());
//! let snapshot = MarketSnapshot::builder(settings)
//!     .date("2024-03-15")
//!     .bind("spot", spot_quote)
//!     .value("spot", 101.5)
//!     .build()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod instrument;
pub mod shared;

// Re-export commonly used types
pub use engine::{EngineObject, EvaluationSettings, Quote, RelinkableHandle};
pub use error::{EngineError, EngineResult};
pub use instrument::Instrument;
pub use shared::Shared;
