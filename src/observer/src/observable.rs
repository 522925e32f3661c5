use std::fmt;
use std::ptr;

use log::{debug, trace, warn};

use crate::errors::NotifyError;
use crate::naming::{kind_of, NameStrategy};
use crate::Observer;

/// Insertion-ordered, duplicate-free registry of borrowed observers.
///
/// Meant to be embedded as a field of whatever type owns the observed state; that type decides
/// when a change happened and calls [`Observable::notify`] with the new value.
///
/// Observers are compared by address, so two distinct observers sharing a name are two entries.
pub struct Observable<'a, V: ?Sized> {
    name: String,
    observers: Vec<&'a dyn Observer<V>>,
}

impl<'a, V: ?Sized> Observable<'a, V> {
    pub fn new(name: impl Into<String>) -> Self {
        return Self {
            name: name.into(),
            observers: Vec::new(),
        };
    }

    /// Names the observable after its owning type `T`, e.g. `NewValuePublisher0`.
    pub fn for_owner<T: ?Sized>(names: &mut dyn NameStrategy) -> Self {
        return Self::new(names.next_name(&kind_of::<T>()));
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn attach(&mut self, observer: &'a dyn Observer<V>) {
        if self.contains(observer) {
            trace!("{}: {} is already attached", self.name, observer.name());
            return;
        }

        debug!("{}: attaching {}", self.name, observer.name());
        self.observers.push(observer);
    }

    pub fn detach(&mut self, observer: &dyn Observer<V>) {
        let Some(index) = self.position(observer) else {
            trace!("{}: {} is not attached", self.name, observer.name());
            return;
        };

        debug!("{}: detaching {}", self.name, observer.name());
        self.observers.remove(index);
    }

    /// Forwards `value` to every attached observer in attachment order.
    ///
    /// Stops at the first observer that fails; observers after it are not called.
    pub fn notify(&self, value: &V) -> Result<(), NotifyError> {
        trace!("{}: notifying {} observer(s)", self.name, self.observers.len());

        for (position, observer) in self.observers.iter().enumerate() {
            if let Err(error) = observer.update(value) {
                warn!("{}: {} failed to handle update: {}", self.name, observer.name(), error);

                return Err(NotifyError::ObserverFailed {
                    observer: observer.name().to_string(),
                    position,
                    source: error,
                });
            }
        }

        return Ok(());
    }

    pub fn contains(&self, observer: &dyn Observer<V>) -> bool {
        return self.position(observer).is_some();
    }

    pub fn len(&self) -> usize {
        return self.observers.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.observers.is_empty();
    }

    /// Names of the attached observers, in notification order.
    pub fn observer_names(&self) -> Vec<&str> {
        return self.observers.iter().map(|observer| observer.name()).collect();
    }

    pub fn clear(&mut self) {
        debug!("{}: dropping {} observer(s)", self.name, self.observers.len());
        self.observers.clear();
    }

    fn position(&self, observer: &dyn Observer<V>) -> Option<usize> {
        return self
            .observers
            .iter()
            .position(|attached| ptr::addr_eq(*attached, observer));
    }
}

impl<V: ?Sized> fmt::Debug for Observable<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("name", &self.name)
            .field("observers", &self.observer_names())
            .finish()
    }
}
