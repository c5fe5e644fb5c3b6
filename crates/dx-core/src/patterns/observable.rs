//! Change notification between curve sources and whoever draws them.
//!
//! A source holds an [`ObserverList`] and, once its data has been swapped,
//! calls [`ObserverList::notify`]. Observers are weak: the list never keeps a
//! renderer alive, and dropped observers disappear on the next notification.

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Weak};

/// Something observers can subscribe to.
pub trait Observable {
    /// Subscribe `observer`. Subscribing the same observer twice is a no-op.
    fn register_observer(&self, observer: Weak<dyn Observer>);

    /// Drop a subscription.
    fn unregister_observer(&self, observer: &Weak<dyn Observer>);

    /// Tell every live subscriber that the data changed.
    fn notify_observers(&self);
}

/// Receives change notifications.
pub trait Observer: Send + Sync {
    /// Called after the observed data has been replaced.
    fn update(&self);
}

/// Weak subscriber list embedded in observable types.
#[derive(Default)]
pub struct ObserverList {
    entries: RefCell<Vec<Weak<dyn Observer>>>,
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObserverList({} live)", self.len())
    }
}

impl ObserverList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `observer` unless it is already present.
    pub fn register(&self, observer: Weak<dyn Observer>) {
        let mut entries = self.entries.borrow_mut();
        if !entries.iter().any(|o| Weak::ptr_eq(o, &observer)) {
            entries.push(observer);
        }
    }

    /// Remove `observer` if present.
    pub fn unregister(&self, observer: &Weak<dyn Observer>) {
        self.entries
            .borrow_mut()
            .retain(|o| !Weak::ptr_eq(o, observer));
    }

    /// Live subscribers.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    /// `true` when no subscriber is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prune dead entries, then call every live observer in registration
    /// order.
    ///
    /// The list is not borrowed while observers run, so an observer may
    /// register or unregister from inside `update`.
    pub fn notify(&self) {
        let live: Vec<Arc<dyn Observer>> = {
            let mut entries = self.entries.borrow_mut();
            let mut live = Vec::with_capacity(entries.len());
            entries.retain(|o| match o.upgrade() {
                Some(strong) => {
                    live.push(strong);
                    true
                }
                None => false,
            });
            live
        };
        for observer in live {
            observer.update();
        }
    }
}
