//! Typed state cell with replace-on-write semantics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A shared, observable value.
///
/// `get` returns a clone of the current value; `set` replaces the value
/// whole and notifies subscribers. There is deliberately no way to borrow
/// the interior: every edit goes through a full replace, so a concurrent
/// reader only ever sees a complete old value or a complete new one.
pub struct Slot<T> {
    inner: Arc<SlotInner<T>>,
}

struct SlotInner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<(usize, Callback<T>)>>,
    next_token: AtomicUsize,
}

impl<T: Clone> Slot<T> {
    /// Create a slot holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(SlotInner {
                value: RwLock::new(value),
                subscribers: Mutex::new(Vec::new()),
                next_token: AtomicUsize::new(0),
            }),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().unwrap().clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        *self.inner.value.write().unwrap() = value;
        self.notify();
    }

    /// Replace the value with a transform of the current one.
    pub fn update(&self, transform: impl FnOnce(T) -> T) {
        {
            let mut guard = self.inner.value.write().unwrap();
            let next = transform(guard.clone());
            *guard = next;
        }
        self.notify();
    }

    /// Register a subscriber. The callback fires immediately with the
    /// current value, then after every `set`/`update`. Dropping the returned
    /// [`Subscription`] unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let token = self.inner.next_token.fetch_add(1, Ordering::Relaxed);
        let callback: Callback<T> = Arc::new(callback);

        callback(&self.get());
        self.inner
            .subscribers
            .lock()
            .unwrap()
            .push((token, callback));

        Subscription {
            slot: Arc::clone(&self.inner),
            token,
        }
    }

    fn notify(&self) {
        let value = self.get();
        // Snapshot the subscriber list so a callback may subscribe or
        // unsubscribe without deadlocking.
        let subscribers: Vec<Callback<T>> = self
            .inner
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default> Default for Slot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.get()).finish()
    }
}

/// Handle keeping a subscription alive. Dropping it removes the callback.
pub struct Subscription<T> {
    slot: Arc<SlotInner<T>>,
    token: usize,
}

impl<T> Subscription<T> {
    /// Explicitly remove the callback (same as dropping the handle).
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Ok(mut subscribers) = self.slot.subscribers.lock() {
            subscribers.retain(|(token, _)| *token != self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_get_returns_clone() {
        let slot = Slot::new(vec![1, 2, 3]);
        let mut copy = slot.get();
        copy.push(4);

        assert_eq!(slot.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let slot = Slot::new("a".to_string());
        slot.set("b".to_string());
        assert_eq!(slot.get(), "b");
    }

    #[test]
    fn test_update_transforms_current_value() {
        let slot = Slot::new(10);
        slot.update(|n| n + 1);
        assert_eq!(slot.get(), 11);
    }

    #[test]
    fn test_subscribe_fires_immediately_and_on_set() {
        let slot = Slot::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = slot.subscribe(move |value| sink.lock().unwrap().push(*value));
        slot.set(2);
        slot.set(3);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let slot = Slot::new(0);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let sub = slot.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sub.unsubscribe();
        slot.set(1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let slot = Slot::new(1);
        let alias = slot.clone();
        alias.set(2);
        assert_eq!(slot.get(), 2);
    }
}
