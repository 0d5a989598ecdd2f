//! Integration tests for the in-memory engine.

use std::sync::Arc;

use approx::assert_relative_eq;
use marketlink_core::Date;
use marketlink_ext_memory::{FixedRateBond, GlobalSettings, RelinkableQuoteHandle, SimpleQuote};
use marketlink_traits::{EvaluationSettings, Instrument, Quote, RelinkableHandle, Shared};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_bonds_on_the_process_settings_follow_its_date() {
    let settings = GlobalSettings::instance();
    let shared: Shared<dyn EvaluationSettings> =
        Shared::from_arc(settings.clone() as Arc<dyn EvaluationSettings>);
    let rate = Shared::new(RelinkableQuoteHandle::linked(Arc::new(SimpleQuote::with_value(
        0.0,
    ))));

    let short = FixedRateBond::new(date(2025, 1, 31), 100.0, rate.clone(), shared.clone())
        .with_coupon(date(2025, 1, 31), 1.0);
    let long = FixedRateBond::new(date(2027, 1, 31), 100.0, rate.clone(), shared)
        .with_coupons([(date(2026, 1, 31), 1.0), (date(2027, 1, 31), 1.0)]);

    settings.set_evaluation_date(date(2025, 1, 1));
    assert_relative_eq!(short.npv().unwrap(), 101.0);
    assert_relative_eq!(long.npv().unwrap(), 102.0);

    // moving the date past maturity expires the short bond only
    settings.set_evaluation_date(date(2025, 2, 1));
    assert_relative_eq!(short.npv().unwrap(), 0.0);
    assert_relative_eq!(long.npv().unwrap(), 102.0);
}

#[test]
fn test_relinking_the_shared_handle_reprices_every_dependent() {
    let settings = Arc::new(GlobalSettings::with_date(date(2025, 1, 31)));
    let shared: Shared<dyn EvaluationSettings> =
        Shared::from_arc(settings as Arc<dyn EvaluationSettings>);
    let original = Arc::new(SimpleQuote::with_value(0.0));
    let rate = Shared::new(RelinkableQuoteHandle::linked(original.clone()));

    let a = FixedRateBond::new(date(2026, 1, 31), 100.0, rate.clone(), shared.clone());
    let b = FixedRateBond::new(date(2026, 1, 31), 50.0, rate.clone(), shared);
    assert_relative_eq!(a.npv().unwrap(), 100.0);

    rate.link_to(0.03);
    let df = (-0.03f64).exp();
    assert_relative_eq!(a.npv().unwrap(), 100.0 * df, epsilon = 1e-10);
    assert_relative_eq!(b.npv().unwrap(), 50.0 * df, epsilon = 1e-10);

    // the quote linked before is untouched by the relink
    assert_eq!(original.value(), Some(0.0));
}
