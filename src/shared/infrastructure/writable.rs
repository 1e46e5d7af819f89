// Observable value container.
//
// Purpose
// - Hold one value and push it to every registered observer whenever it changes.
//
// Responsibilities
// - Replay the current value to an observer at the moment it subscribes.
// - Notify observers synchronously, in registration order, after every write.
// - Serialise writers so each change is delivered exactly once, in write order.
//
// Boundaries
// - Observers are called with a snapshot taken right after the write, with no lock on the
//   value or the observer list held. They may read the container and unsubscribe.
// - Writing or subscribing from inside an observer of the same container panics.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};

type Observer<T> = Arc<Mutex<dyn FnMut(&T) + Send>>;

struct Observers<T> {
    next_id: u64,
    entries: BTreeMap<u64, Observer<T>>,
}

struct Shared<T> {
    value: Mutex<T>,
    observers: Mutex<Observers<T>>,
    // Held for a whole write + notify (or subscribe + replay) so deliveries never interleave.
    delivery: Mutex<()>,
    delivering_on: Mutex<Option<ThreadId>>,
}

// A panicking observer poisons a lock; the guarded data is still consistent.
fn lock<U: ?Sized>(mutex: &Mutex<U>) -> MutexGuard<'_, U> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Delivery<'a, T> {
    shared: &'a Shared<T>,
    _serial: MutexGuard<'a, ()>,
}

impl<T> Shared<T> {
    fn begin_delivery(&self, operation: &str) -> Delivery<'_, T> {
        let current = thread::current().id();
        if *lock(&self.delivering_on) == Some(current) {
            panic!("Writable::{operation} called from inside one of its own observers");
        }
        let serial = lock(&self.delivery);
        *lock(&self.delivering_on) = Some(current);
        Delivery {
            shared: self,
            _serial: serial,
        }
    }

    fn notify(&self, value: &T) {
        let observers: Vec<Observer<T>> = lock(&self.observers).entries.values().cloned().collect();
        for observer in observers {
            let mut observer = lock(&observer);
            (*observer)(value);
        }
    }
}

impl<T> Drop for Delivery<'_, T> {
    fn drop(&mut self) {
        *lock(&self.shared.delivering_on) = None;
    }
}

pub struct Writable<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: Mutex::new(value),
                observers: Mutex::new(Observers {
                    next_id: 0,
                    entries: BTreeMap::new(),
                }),
                delivery: Mutex::new(()),
                delivering_on: Mutex::new(None),
            }),
        }
    }

    /// Registers `observer` and calls it once with the current value before returning.
    pub fn subscribe<F>(&self, observer: F) -> Unsubscriber<T>
    where
        F: FnMut(&T) + Send + 'static,
    {
        let _delivery = self.shared.begin_delivery("subscribe");
        let observer: Observer<T> = Arc::new(Mutex::new(observer));
        let snapshot = self.get();
        (*lock(&observer))(&snapshot);

        let mut observers = lock(&self.shared.observers);
        let id = observers.next_id;
        observers.next_id += 1;
        observers.entries.insert(id, observer);

        Unsubscriber {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    pub fn set(&self, value: T) {
        let _delivery = self.shared.begin_delivery("set");
        let snapshot = {
            let mut held = lock(&self.shared.value);
            *held = value;
            held.clone()
        };
        self.shared.notify(&snapshot);
    }

    /// Mutates the held value in place, then notifies. Returns whatever `f` returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let _delivery = self.shared.begin_delivery("update");
        let (result, snapshot) = {
            let mut held = lock(&self.shared.value);
            let result = f(&mut held);
            (result, held.clone())
        };
        self.shared.notify(&snapshot);
        result
    }

    /// Reads the held value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.shared.value))
    }

    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared.observers).entries.len()
    }
}

/// Handle returned by [`Writable::subscribe`]. Dropping it keeps the observer registered.
#[must_use = "dropping an Unsubscriber leaves the observer registered forever"]
pub struct Unsubscriber<T> {
    id: u64,
    shared: Weak<Shared<T>>,
}

impl<T> Unsubscriber<T> {
    /// Takes effect from the next write. A delivery already under way on another thread
    /// may still reach the observer once.
    pub fn unsubscribe(self) {
        if let Some(shared) = self.shared.upgrade() {
            lock(&shared.observers).entries.remove(&self.id);
        }
    }
}
