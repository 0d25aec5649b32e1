//! # Runtime-keyed dispatcher.
//!
//! [`Dispatcher`] is the earlier, runtime-tagged sibling of the typed
//! [`Bus`](crate::Bus): heterogeneous payload types flow through a single
//! container whose listener lists are keyed by [`TypeKey`] instead of being
//! selected in the type system. Registering or emitting a type the
//! dispatcher has never seen is fine — the key is allocated on first use and
//! emission with no listeners is a no-op.
//!
//! Type erasure is done with `dyn Any` adapters and `downcast_mut`; boxes
//! carry their own drop glue, so no destructor bookkeeping exists outside
//! the type system. There is no consumption gate here — every registered
//! listener runs on every emission, in registration order. Reach for the
//! typed [`Bus`](crate::Bus) when the event set is known at compile time;
//! reach for this when it is not.
//!
//! ## Example
//! ```rust
//! use typebus::Dispatcher;
//!
//! struct Loaded { bytes: usize }
//! struct Saved;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.on(|event: &mut Loaded| assert_eq!(event.bytes, 128));
//! dispatcher.on(|_event: &mut Saved| {});
//!
//! dispatcher.emit(Loaded { bytes: 128 });
//! dispatcher.emit(Saved);
//! ```

use std::any::Any;
use std::collections::HashMap;

use crate::registry::TypeKey;

type ErasedCallback = Box<dyn FnMut(&mut dyn Any)>;

/// Listener registry keyed by runtime type identity.
///
/// One ordered listener list per [`TypeKey`]; lists grow with
/// [`Dispatcher::on`] and run front-to-back on [`Dispatcher::emit`].
#[derive(Default)]
pub struct Dispatcher {
    listeners: HashMap<TypeKey, Vec<ErasedCallback>>,
}

impl Dispatcher {
    /// Creates a dispatcher with no listeners registered.
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Registers a listener for payload type `E`.
    ///
    /// Registration order is invocation order. The listener is wrapped in a
    /// downcasting adapter; an adapter receiving a payload of another type
    /// does nothing, though emission always routes by the exact key so that
    /// path is not taken in practice.
    pub fn on<E: 'static>(&mut self, mut listener: impl FnMut(&mut E) + 'static) {
        let key = TypeKey::of::<E>();
        log::trace!("register listener for {} ({:?})", std::any::type_name::<E>(), key);
        self.listeners
            .entry(key)
            .or_default()
            .push(Box::new(move |erased: &mut dyn Any| {
                if let Some(event) = erased.downcast_mut::<E>() {
                    listener(event);
                }
            }));
    }

    /// Emits an event constructed at the call site.
    ///
    /// Every listener registered for `E` runs in order; with none
    /// registered this silently does nothing.
    pub fn emit<E: 'static>(&mut self, mut event: E) {
        self.emit_ref(&mut event);
    }

    /// Emits through an existing, externally owned event value.
    pub fn emit_ref<E: 'static>(&mut self, event: &mut E) {
        let Some(list) = self.listeners.get_mut(&TypeKey::of::<E>()) else {
            return;
        };
        log::trace!(
            "emit {} to {} listener(s)",
            std::any::type_name::<E>(),
            list.len()
        );
        let erased: &mut dyn Any = event;
        for callback in list.iter_mut() {
            callback(erased);
        }
    }

    /// Number of listeners registered for payload type `E`.
    pub fn listener_count<E: 'static>(&self) -> usize {
        self.listeners
            .get(&TypeKey::of::<E>())
            .map_or(0, Vec::len)
    }

    /// Drops every registered listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct A {
        a: i32,
        b: i32,
    }
    struct B {
        s: char,
    }

    #[test]
    fn test_emit_reaches_registered_listener() {
        let hits = Rc::new(Cell::new(0));
        let mut dispatcher = Dispatcher::new();

        let seen = Rc::clone(&hits);
        dispatcher.on(move |event: &mut A| {
            assert_eq!(event.a, 1);
            assert_eq!(event.b, 2);
            seen.set(seen.get() + 1);
        });

        dispatcher.emit(A { a: 1, b: 2 });
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_heterogeneous_types_route_independently() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();

        let tag = Rc::clone(&order);
        dispatcher.on(move |_event: &mut A| tag.borrow_mut().push("a"));
        let tag = Rc::clone(&order);
        dispatcher.on(move |event: &mut B| {
            assert_eq!(event.s, 'b');
            tag.borrow_mut().push("b");
        });

        dispatcher.emit(A { a: 0, b: 0 });
        dispatcher.emit(B { s: 'b' });
        dispatcher.emit(A { a: 0, b: 0 });

        assert_eq!(*order.borrow(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            dispatcher.on(move |_event: &mut A| sink.borrow_mut().push(tag));
        }

        dispatcher.emit(A { a: 0, b: 0 });
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.emit(A { a: 1, b: 1 });
        assert_eq!(dispatcher.listener_count::<A>(), 0);
    }

    #[test]
    fn test_emit_ref_allows_payload_mutation() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.on(|event: &mut A| event.a *= 2);
        dispatcher.on(|event: &mut A| event.a += 1);

        let mut event = A { a: 10, b: 0 };
        dispatcher.emit_ref(&mut event);
        assert_eq!(event.a, 21);
    }

    #[test]
    fn test_clear_silences_the_dispatcher() {
        let hits = Rc::new(Cell::new(0));
        let mut dispatcher = Dispatcher::new();

        let seen = Rc::clone(&hits);
        dispatcher.on(move |_event: &mut A| seen.set(seen.get() + 1));
        dispatcher.emit(A { a: 0, b: 0 });

        dispatcher.clear();
        dispatcher.emit(A { a: 0, b: 0 });
        assert_eq!(hits.get(), 1);
        assert_eq!(dispatcher.listener_count::<A>(), 0);
    }
}
