//! Slot - a single reactive value with named subscribers.
//!
//! A `Slot` holds at most one value. Callbacks are bound under a name and
//! run synchronously, in binding order, every time the value is set.
//! Reading a slot that was never written is an error rather than a default.
//!
//! The layout engine does not use slots itself. They exist so surrounding
//! code can hold rect attributes and react when they change.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use spark_rect::Slot;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut width: Slot<i32> = Slot::new();
//!
//! let s = seen.clone();
//! width.bind("resize", move |w| s.set(*w));
//! width.set(40);
//!
//! assert_eq!(seen.get(), 40);
//! assert_eq!(width.get(), Ok(&40));
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::error::SlotError;

type Callback<T> = Box<dyn FnMut(&T)>;

/// Single-value holder with named change callbacks.
pub struct Slot<T> {
    value: Option<T>,
    callbacks: IndexMap<String, Callback<T>>,
}

impl<T> Slot<T> {
    /// Create an unset slot with no subscribers.
    pub fn new() -> Self {
        Self {
            value: None,
            callbacks: IndexMap::new(),
        }
    }

    /// Subscribe `callback` under `name`.
    ///
    /// Binding an existing name replaces its callback and keeps its position
    /// in the call order.
    pub fn bind(&mut self, name: impl Into<String>, callback: impl FnMut(&T) + 'static) {
        let name = name.into();
        log::trace!("slot bind {name:?}");
        self.callbacks.insert(name, Box::new(callback));
    }

    /// Remove the callback bound under `name`. Unknown names are ignored.
    pub fn unbind(&mut self, name: &str) {
        if self.callbacks.shift_remove(name).is_some() {
            log::trace!("slot unbind {name:?}");
        }
    }

    /// Store `value`, then call every subscriber with it.
    pub fn set(&mut self, value: T) {
        let value = &*self.value.insert(value);
        for callback in self.callbacks.values_mut() {
            callback(value);
        }
    }

    /// Current value.
    pub fn get(&self) -> Result<&T, SlotError> {
        self.value.as_ref().ok_or(SlotError::Unset)
    }

    /// Whether [`set`](Self::set) has been called at least once.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Names of bound callbacks, in call order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }

    /// Number of bound callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => v.fmt(f),
            None => f.write_str("<unset>"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("value", &self.value)
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}
