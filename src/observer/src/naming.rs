use std::any::type_name;
use std::collections::HashMap;

use uuid::Uuid;

/// Hands out names for observers and observables that were not given one explicitly.
pub trait NameStrategy {
    fn next_name(&mut self, kind: &str) -> String;
}

/// Issues `<Kind><n>` names, with an independent counter per kind starting at 0.
#[derive(Debug, Default, Clone)]
pub struct InstanceCounter {
    counters: HashMap<String, usize>,
}

impl InstanceCounter {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn next_for<T: ?Sized>(&mut self) -> String {
        return self.next_name(&kind_of::<T>());
    }

    /// Number of names issued so far for `kind`.
    pub fn count(&self, kind: &str) -> usize {
        return self.counters.get(kind).copied().unwrap_or(0);
    }

    pub fn count_for<T: ?Sized>(&self) -> usize {
        return self.count(&kind_of::<T>());
    }
}

impl NameStrategy for InstanceCounter {
    fn next_name(&mut self, kind: &str) -> String {
        let counter = self.counters.entry(kind.to_string()).or_insert(0);
        let name = format!("{}{}", kind, counter);
        *counter += 1;

        return name;
    }
}

/// Issues `<Kind>-<uuid>` names that never repeat.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueNames;

impl NameStrategy for UniqueNames {
    fn next_name(&mut self, kind: &str) -> String {
        return format!("{}-{}", kind, Uuid::new_v4());
    }
}

/// Short type name: module path and generic arguments are stripped.
pub fn kind_of<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);

    return without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .to_string();
}
