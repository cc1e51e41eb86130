//! Ordered snapshot listener registry.

use std::fmt::{Debug, Formatter};

/// Callback receiving an owned snapshot of every item.
pub type Listener<T> = Box<dyn FnMut(Vec<T>) + Send>;

/// Listeners in registration order.
///
/// Each listener receives its own copy of the published items, so no
/// listener can observe changes made by another one.
pub struct ListenerRegistry<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T: Clone> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one listener. It is first invoked on the next `publish`.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<T>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener once, in registration order.
    ///
    /// Returns the number of listeners invoked.
    pub fn publish(&mut self, items: &[T]) -> usize {
        for listener in &mut self.listeners {
            listener(items.to_vec());
        }
        self.listeners.len()
    }
}

impl<T> Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
