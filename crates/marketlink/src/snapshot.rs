//! Market snapshots.
//!
//! A [`MarketSnapshot`] is the market context of one scenario: a valuation
//! date, a table of named observable values, and the engine objects those
//! values are pushed into. Snapshots are cheap; build one per scenario (per
//! historical date in a backtest) and let [`synchronize`] hand its state to the
//! engine right before pricing.
//!
//! [`synchronize`]: MarketSnapshot::synchronize

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use marketlink_core::types::resolve_optional;
use marketlink_core::{CoreError, Date, DateInput};
use marketlink_traits::{EngineObject, EvaluationSettings, Quote, RelinkableHandle, Shared};
use tracing::{debug, trace};

use crate::binding::EngineBinding;
use crate::config::SnapshotConfig;
use crate::error::{AdapterError, AdapterResult};

/// Market context for a single valuation scenario.
///
/// `date` and `data` are owned and copied on clone. Every [`Shared`] field
/// (the settings, quotes and relinkable handles) is an engine object and a
/// clone refers to the very same object. Synchronizing one clone is therefore
/// visible through all of them; scenarios that must stay independent need
/// their own engine objects.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    date: Option<Date>,
    data: HashMap<String, f64>,
    quotes: BTreeMap<String, Shared<dyn Quote>>,
    relinkable_handles: BTreeMap<String, Shared<dyn RelinkableHandle>>,
    settings: Shared<dyn EvaluationSettings>,
}

/// What a call to [`MarketSnapshot::synchronize`] changed in the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// The evaluation date was written.
    pub date_updated: bool,
    /// Quotes that received a value.
    pub quotes_set: usize,
    /// Handles that were relinked.
    pub handles_relinked: usize,
}

impl MarketSnapshot {
    /// Builds a snapshot from a date, engine objects to bind, and the initial
    /// observable values.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if the date cannot be resolved, if an
    /// engine object is neither a quote nor a relinkable handle, or if a key is
    /// bound twice.
    pub fn new<K, V>(
        settings: Shared<dyn EvaluationSettings>,
        date: Option<DateInput>,
        env: impl IntoIterator<Item = (K, Arc<dyn EngineObject>)>,
        extra_data: impl IntoIterator<Item = (V, f64)>,
    ) -> AdapterResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut builder = Self::builder(settings).bind_all(env).values(extra_data);
        builder.date = date;
        builder.build()
    }

    /// Starts building a snapshot against the given engine settings.
    pub fn builder(settings: Shared<dyn EvaluationSettings>) -> MarketSnapshotBuilder {
        MarketSnapshotBuilder {
            settings,
            date: None,
            env: Vec::new(),
            data: HashMap::new(),
        }
    }

    /// Builds a snapshot from a configuration document.
    pub fn from_config<K>(
        config: &SnapshotConfig,
        settings: Shared<dyn EvaluationSettings>,
        env: impl IntoIterator<Item = (K, Arc<dyn EngineObject>)>,
    ) -> AdapterResult<Self>
    where
        K: Into<String>,
    {
        let mut builder = Self::builder(settings)
            .bind_all(env)
            .values(config.data.iter().map(|(k, v)| (k.clone(), *v)));
        if let Some(date) = &config.date {
            builder = builder.date(date.as_str());
        }
        builder.build()
    }

    /// The valuation date, if one was given.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// All observable values.
    pub fn data(&self) -> &HashMap<String, f64> {
        &self.data
    }

    /// Value of a single observable.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.data.get(name).copied()
    }

    /// True if the observable has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Sets an observable value, returning the previous one.
    ///
    /// Takes effect in the engine at the next synchronization.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.data.insert(name.into(), value)
    }

    /// Removes an observable value; its bound object is then left alone by
    /// synchronization.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.data.remove(name)
    }

    /// Bound quotes by key.
    pub fn quotes(&self) -> &BTreeMap<String, Shared<dyn Quote>> {
        &self.quotes
    }

    /// Bound relinkable handles by key.
    pub fn relinkable_handles(&self) -> &BTreeMap<String, Shared<dyn RelinkableHandle>> {
        &self.relinkable_handles
    }

    /// The engine settings this snapshot writes its date into.
    pub fn settings(&self) -> &Shared<dyn EvaluationSettings> {
        &self.settings
    }

    /// A clone of this snapshot moved to another date.
    ///
    /// Shares every engine object with `self`, like [`Clone`].
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if the date cannot be resolved.
    pub fn with_date(&self, date: impl Into<DateInput>) -> AdapterResult<Self> {
        let date = resolve_date(&date.into())?;
        Ok(Self {
            date: Some(date),
            ..self.clone()
        })
    }

    /// Makes the engine reflect this snapshot.
    ///
    /// First moves the engine's evaluation date to the snapshot date, writing
    /// only when it differs so cached engine results survive repeated calls.
    /// Then pushes every value in `data` into the quote or handle bound under
    /// the same key. Bound keys without a value are skipped, leaving the engine
    /// object as it was.
    pub fn synchronize(&self) -> SyncReport {
        let mut report = SyncReport {
            date_updated: self.update_evaluation_date(),
            ..SyncReport::default()
        };

        for (name, quote) in &self.quotes {
            if let Some(&value) = self.data.get(name) {
                trace!(name = %name, value, "setting quote");
                quote.set_value(value);
                report.quotes_set += 1;
            }
        }

        for (name, handle) in &self.relinkable_handles {
            if let Some(&value) = self.data.get(name) {
                trace!(name = %name, value, "relinking handle");
                handle.link_to(value);
                report.handles_relinked += 1;
            }
        }

        debug!(
            quotes = report.quotes_set,
            handles = report.handles_relinked,
            "market snapshot synchronized"
        );
        report
    }

    /// Writes the snapshot date into the engine settings if it changed.
    /// Returns true if a write happened.
    fn update_evaluation_date(&self) -> bool {
        let Some(target) = self.date else {
            debug!("snapshot has no date, evaluation date left unchanged");
            return false;
        };

        let current = self.settings.evaluation_date();
        if current == Some(target) {
            trace!(date = %target, "evaluation date unchanged");
            return false;
        }

        debug!(from = ?current, to = %target, "moving evaluation date");
        self.settings.set_evaluation_date(target);
        true
    }
}

/// Builder for [`MarketSnapshot`].
///
/// Collects inputs as given; resolution and classification happen in
/// [`build`](MarketSnapshotBuilder::build), which fails on the first bad input.
pub struct MarketSnapshotBuilder {
    settings: Shared<dyn EvaluationSettings>,
    date: Option<DateInput>,
    env: Vec<(String, Arc<dyn EngineObject>)>,
    data: HashMap<String, f64>,
}

impl MarketSnapshotBuilder {
    /// Sets the valuation date.
    #[must_use]
    pub fn date(mut self, date: impl Into<DateInput>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Binds an engine object to a key.
    #[must_use]
    pub fn bind(mut self, key: impl Into<String>, object: Arc<dyn EngineObject>) -> Self {
        self.env.push((key.into(), object));
        self
    }

    /// Binds several engine objects.
    #[must_use]
    pub fn bind_all<K: Into<String>>(
        mut self,
        env: impl IntoIterator<Item = (K, Arc<dyn EngineObject>)>,
    ) -> Self {
        self.env
            .extend(env.into_iter().map(|(k, object)| (k.into(), object)));
        self
    }

    /// Sets an observable value.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>, value: f64) -> Self {
        self.data.insert(name.into(), value);
        self
    }

    /// Sets several observable values.
    #[must_use]
    pub fn values<K: Into<String>>(mut self, values: impl IntoIterator<Item = (K, f64)>) -> Self {
        self.data
            .extend(values.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Resolves the date, classifies every bound object, and builds the
    /// snapshot.
    pub fn build(self) -> AdapterResult<MarketSnapshot> {
        let date = resolve_optional(self.date).map_err(unrecognized_date)?;

        let mut quotes = BTreeMap::new();
        let mut relinkable_handles = BTreeMap::new();
        for (key, object) in self.env {
            if quotes.contains_key(&key) || relinkable_handles.contains_key(&key) {
                return Err(AdapterError::DuplicateBinding { key });
            }
            let binding = EngineBinding::classify(&key, object)?;
            debug!(key = %key, kind = %binding.kind(), "bound engine object");
            match binding {
                EngineBinding::Quote(quote) => {
                    quotes.insert(key, quote);
                }
                EngineBinding::RelinkableHandle(handle) => {
                    relinkable_handles.insert(key, handle);
                }
            }
        }

        Ok(MarketSnapshot {
            date,
            data: self.data,
            quotes,
            relinkable_handles,
            settings: self.settings,
        })
    }
}

fn resolve_date(input: &DateInput) -> AdapterResult<Date> {
    input.resolve().map_err(unrecognized_date)
}

fn unrecognized_date(err: CoreError) -> AdapterError {
    AdapterError::configuration(format!("unrecognized date: {err}"))
}
