//! Document-level key listener registry
//!
//! A host owns one [`KeyListeners`] table and feeds every key press through
//! [`KeyListeners::dispatch`]. Components subscribe for as long as they are
//! mounted; dropping the returned [`Subscription`] removes the listener.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::shortcut::KeyInput;

/// Unique identifier for a registered listener within one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<M> = Rc<dyn Fn(&KeyInput) -> Option<M>>;

struct Table<M> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<M>)>,
}

/// Shared table of key listeners producing messages of type `M`
///
/// Clones share the same table.
pub struct KeyListeners<M> {
    table: Rc<RefCell<Table<M>>>,
}

impl<M: 'static> KeyListeners<M> {
    pub fn new() -> Self {
        Self {
            table: Rc::new(RefCell::new(Table {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener until the returned subscription is dropped
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(&KeyInput) -> Option<M> + 'static) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.listeners.push((id, Rc::new(listener)));
        log::trace!("key listener {:?} subscribed", id);

        let weak: Weak<RefCell<Table<M>>> = Rc::downgrade(&self.table);
        Subscription {
            id,
            unsubscribe: Some(Box::new(move || {
                if let Some(table) = weak.upgrade() {
                    table.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                    log::trace!("key listener {:?} unsubscribed", id);
                }
            })),
        }
    }

    /// Run every live listener in subscription order
    ///
    /// Listeners run on a snapshot of the table, so they may subscribe or
    /// drop subscriptions themselves. Such changes apply from the next
    /// dispatch on.
    pub fn dispatch(&self, input: &KeyInput) -> Vec<M> {
        let snapshot: Vec<Listener<M>> = self
            .table
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        snapshot.iter().filter_map(|listener| listener(input)).collect()
    }

    pub fn len(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: 'static> Default for KeyListeners<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for KeyListeners<M> {
    fn clone(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
        }
    }
}

impl<M> fmt::Debug for KeyListeners<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListeners")
            .field("listener_count", &self.table.borrow().listeners.len())
            .finish()
    }
}

/// Handle for a registered listener; unsubscribes on drop
pub struct Subscription {
    id: ListenerId,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Unsubscribe now instead of at drop
    pub fn cancel(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::Key;

    #[test]
    fn test_subscribe_and_dispatch() {
        let listeners: KeyListeners<&'static str> = KeyListeners::new();
        let _a = listeners.subscribe(|_| Some("a"));
        let _b = listeners.subscribe(|key| (key.key == Key::Enter).then_some("b"));

        assert_eq!(listeners.dispatch(&KeyInput::plain(Key::Enter)), vec!["a", "b"]);
        assert_eq!(listeners.dispatch(&KeyInput::plain(Key::Up)), vec!["a"]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners: KeyListeners<u8> = KeyListeners::new();
        let sub = listeners.subscribe(|_| Some(1));
        assert_eq!(listeners.len(), 1);

        drop(sub);
        assert!(listeners.is_empty());
        assert!(listeners.dispatch(&KeyInput::plain(Key::Enter)).is_empty());
    }

    #[test]
    fn test_cancel_only_removes_own_listener() {
        let listeners: KeyListeners<u8> = KeyListeners::new();
        let first = listeners.subscribe(|_| Some(1));
        let _second = listeners.subscribe(|_| Some(2));
        assert_ne!(first.id(), _second.id());

        first.cancel();
        assert_eq!(listeners.dispatch(&KeyInput::plain(Key::Enter)), vec![2]);
    }

    #[test]
    fn test_listener_may_change_table_during_dispatch() {
        let listeners: KeyListeners<u8> = KeyListeners::new();
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let table = listeners.clone();
        let inner_held = Rc::clone(&held);
        let first = listeners.subscribe(move |_| {
            // Replace whatever was registered last time with a fresh listener
            let sub = table.subscribe(|_| Some(2));
            let old = std::mem::replace(&mut *inner_held.borrow_mut(), vec![sub]);
            drop(old);
            Some(1)
        });

        assert_eq!(listeners.dispatch(&KeyInput::plain(Key::Enter)), vec![1]);
        assert_eq!(listeners.len(), 2);
        assert_eq!(listeners.dispatch(&KeyInput::plain(Key::Enter)), vec![1, 2]);
        assert_eq!(listeners.len(), 2);

        drop(first);
        held.borrow_mut().clear();
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_subscription_outliving_table() {
        let listeners: KeyListeners<u8> = KeyListeners::new();
        let sub = listeners.subscribe(|_| Some(1));
        drop(listeners);
        // Table is gone; dropping the handle must not panic
        drop(sub);
    }
}
