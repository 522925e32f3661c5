//! Observer is a behavioral design pattern that allows one object to notify other objects about changes in its state.

pub mod errors;
pub mod naming;
pub mod observable;

pub use errors::NotifyError;
pub use naming::{InstanceCounter, NameStrategy, UniqueNames};
pub use observable::Observable;

pub trait Observer<V: ?Sized> {
    fn name(&self) -> &str;

    /// Called by an [`Observable`] with the value passed to [`Observable::notify`].
    fn update(&self, value: &V) -> anyhow::Result<()>;
}

/// Wraps a closure so it can be attached without declaring a type.
pub struct FnObserver<F> {
    name: String,
    callback: F,
}

impl<F> FnObserver<F> {
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        return Self {
            name: name.into(),
            callback,
        };
    }
}

impl<V: ?Sized, F> Observer<V> for FnObserver<F>
where
    F: Fn(&V) -> anyhow::Result<()>,
{
    fn name(&self) -> &str {
        return &self.name;
    }

    fn update(&self, value: &V) -> anyhow::Result<()> {
        return (self.callback)(value);
    }
}
