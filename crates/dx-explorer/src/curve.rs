//! Curve data and the observable sources that hold it.

use std::cell::{Ref, RefCell};
use std::sync::Weak;

use dx_core::{Observable, ObserverList, Observer, Real};

/// Two parallel arrays ready to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveData {
    /// Abscissae.
    pub x: Vec<Real>,
    /// Ordinates; NaN marks a gap.
    pub y: Vec<Real>,
}

impl CurveData {
    /// Largest finite ordinate, if any.
    pub fn max_finite(&self) -> Option<Real> {
        self.y
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: Real| m.max(v))))
    }
}

/// Holds one curve and tells observers when it is replaced.
///
/// Data is swapped as a whole before observers run, so an observer that
/// reads the source back always sees a complete curve.
#[derive(Debug, Default)]
pub struct CurveSource {
    data: RefCell<CurveData>,
    observable: ObserverList,
}

impl CurveSource {
    /// An empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current curve.
    ///
    /// Drop the borrow before the next replacement.
    pub fn data(&self) -> Ref<'_, CurveData> {
        self.data.borrow()
    }

    /// Replace the curve and notify observers.
    pub fn replace(&self, data: CurveData) {
        *self.data.borrow_mut() = data;
        self.observable.notify();
    }
}

impl Observable for CurveSource {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.observable.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.observable.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl Observer for Counter {
        fn update(&self) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn replace_notifies_once() {
        let source = CurveSource::new();
        let counter = Arc::new(Counter::default());
        source.register_observer(Arc::downgrade(&counter) as Weak<dyn Observer>);
        source.replace(CurveData {
            x: vec![0.0, 1.0],
            y: vec![0.5, 0.25],
        });
        assert_eq!(counter.0.load(Ordering::Relaxed), 1);
        assert_eq!(source.data().y, vec![0.5, 0.25]);
    }

    #[test]
    fn unregistered_observer_is_silent() {
        let source = CurveSource::new();
        let counter = Arc::new(Counter::default());
        let weak = Arc::downgrade(&counter) as Weak<dyn Observer>;
        source.register_observer(weak.clone());
        source.unregister_observer(&weak);
        source.replace(CurveData::default());
        assert_eq!(counter.0.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn max_finite_skips_gaps() {
        let data = CurveData {
            x: vec![0.0, 1.0, 2.0, 3.0],
            y: vec![Real::NAN, 0.3, Real::INFINITY, 0.1],
        };
        assert_eq!(data.max_finite(), Some(0.3));
        assert_eq!(CurveData::default().max_finite(), None);
    }
}
