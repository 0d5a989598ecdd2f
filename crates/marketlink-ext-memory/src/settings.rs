//! Evaluation-date setting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use marketlink_core::Date;
use marketlink_traits::EvaluationSettings;

static INSTANCE: Lazy<Arc<GlobalSettings>> = Lazy::new(|| Arc::new(GlobalSettings::new()));

/// Engine settings holding the evaluation date.
///
/// Counts every write so callers can tell whether an update actually reached
/// the engine.
#[derive(Debug, Default)]
pub struct GlobalSettings {
    evaluation_date: RwLock<Option<Date>>,
    writes: AtomicUsize,
}

impl GlobalSettings {
    /// Creates settings with no evaluation date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings with an initial evaluation date (not counted as a write).
    pub fn with_date(date: Date) -> Self {
        Self {
            evaluation_date: RwLock::new(Some(date)),
            writes: AtomicUsize::new(0),
        }
    }

    /// The process-wide settings shared by every engine object that does not
    /// get its own.
    pub fn instance() -> Arc<GlobalSettings> {
        Arc::clone(&INSTANCE)
    }

    /// Number of evaluation-date writes since creation or the last reset.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Clears the evaluation date and the write counter.
    pub fn reset(&self) {
        *self.evaluation_date.write() = None;
        self.writes.store(0, Ordering::SeqCst);
    }
}

impl EvaluationSettings for GlobalSettings {
    fn evaluation_date(&self) -> Option<Date> {
        *self.evaluation_date.read()
    }

    fn set_evaluation_date(&self, date: Date) {
        *self.evaluation_date.write() = Some(date);
        self.writes.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(%date, "evaluation date set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_counter() {
        let settings = GlobalSettings::new();
        assert_eq!(settings.evaluation_date(), None);
        assert_eq!(settings.write_count(), 0);

        let date = Date::from_ymd(2024, 5, 1).unwrap();
        settings.set_evaluation_date(date);
        settings.set_evaluation_date(date);
        assert_eq!(settings.evaluation_date(), Some(date));
        assert_eq!(settings.write_count(), 2);

        settings.reset();
        assert_eq!(settings.evaluation_date(), None);
        assert_eq!(settings.write_count(), 0);
    }

    #[test]
    fn test_initial_date_is_not_a_write() {
        let date = Date::from_ymd(2024, 5, 1).unwrap();
        let settings = GlobalSettings::with_date(date);
        assert_eq!(settings.evaluation_date(), Some(date));
        assert_eq!(settings.write_count(), 0);
    }

    #[test]
    fn test_instance_is_a_singleton() {
        assert!(Arc::ptr_eq(
            &GlobalSettings::instance(),
            &GlobalSettings::instance()
        ));
    }
}
