//! Snapshot configuration documents.
//!
//! A scenario can be described in a file instead of code:
//!
//! ```toml
//! date = "2024-03-15"
//!
//! [data]
//! spot = 101.5
//! discount = 0.0425
//! ```
//!
//! The same shape is accepted as JSON. Engine objects are never part of the
//! document; they are bound when the snapshot is built with
//! [`MarketSnapshot::from_config`](crate::MarketSnapshot::from_config).

use std::collections::BTreeMap;
use std::path::Path;

use marketlink_core::{Date, DateInput};
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Date and observable values of one scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Valuation date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Observable values by name.
    #[serde(default)]
    pub data: BTreeMap<String, f64>,
}

impl SnapshotConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> AdapterResult<Self> {
        toml::from_str(s).map_err(|e| AdapterError::configuration(format!("invalid TOML: {e}")))
    }

    /// Parses a JSON document.
    pub fn from_json_str(s: &str) -> AdapterResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| AdapterError::configuration(format!("invalid JSON: {e}")))
    }

    /// Loads a document from disk; `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> AdapterResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AdapterError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> AdapterResult<String> {
        toml::to_string(self)
            .map_err(|e| AdapterError::configuration(format!("cannot serialize: {e}")))
    }

    /// The configured date, resolved.
    pub fn resolved_date(&self) -> AdapterResult<Option<Date>> {
        self.date
            .as_deref()
            .map(|s| {
                DateInput::from(s)
                    .resolve()
                    .map_err(|e| AdapterError::configuration(format!("unrecognized date: {e}")))
            })
            .transpose()
    }
}
