//! # The dispatch engine.
//!
//! [`Bus`] holds one ordered listener list per declared payload type and
//! offers three dispatch forms:
//!
//! - [`Bus::dispatch`] — wrap a payload in a fresh envelope, deliver now;
//! - [`Bus::dispatch_event`] — deliver an existing, externally owned
//!   envelope;
//! - [`Bus::dispatch_queue`] / [`Bus::drain_queue`] — batch pass over a
//!   compatible [`EventQueue`], redelivering or removing.
//!
//! Every form is synchronous: listeners run on the caller's thread, to
//! completion, before the call returns. Within one type, invocation order is
//! front-attached listeners first, then back-attached in attach order. A
//! listener that consumes the envelope short-circuits everyone after it.
//!
//! ## Example
//! ```rust
//! use typebus::{Bus, Event};
//!
//! struct Damage { amount: u32 }
//! struct Heal { amount: u32 }
//!
//! let mut bus: Bus<(Damage, Heal)> = Bus::new();
//!
//! bus.attach_back(|event: &mut Event<Damage>| {
//!     if event.amount == 0 {
//!         event.consume(); // nothing to apply, stop the pass
//!     }
//! });
//! let applied = bus.attach_back(|event: &mut Event<Damage>| {
//!     assert!(event.amount > 0);
//! });
//!
//! bus.dispatch(Damage { amount: 0 });  // second listener skipped
//! bus.dispatch(Damage { amount: 12 }); // both listeners run
//!
//! assert!(bus.detach::<Damage, _>(applied));
//! ```

use crate::events::{Event, EventQueue};
use crate::set::{BusSlot, DeliverFrom, EventSet, ListenerOps};

use super::listeners::ListenerId;

/// Dispatcher with ordered listener lists for a fixed set of payload types.
///
/// Created with empty lists. Attaching, detaching or dispatching a type the
/// set does not declare is rejected at compile time. The bus carries no
/// synchronization; it assumes single-threaded use or externally serialized
/// access, and the borrow checker already rules out attach/detach or nested
/// dispatch from inside a running listener.
pub struct Bus<L: EventSet> {
    listeners: L::Listeners,
}

impl<L: EventSet> Bus<L> {
    /// Creates a bus with no listeners attached.
    pub fn new() -> Self {
        Self {
            listeners: Default::default(),
        }
    }

    /// Appends a listener to the back of `P`'s list and returns its detach
    /// token.
    ///
    /// Back-attached listeners run after every front-attached one, in attach
    /// order among themselves.
    pub fn attach_back<P, Index, F>(&mut self, callback: F) -> ListenerId
    where
        P: 'static,
        F: FnMut(&mut Event<P>) + 'static,
        L::Listeners: BusSlot<P, Index>,
    {
        let id = ListenerId::next();
        log::trace!(
            "attach_back {:?} for {}",
            id,
            std::any::type_name::<P>()
        );
        self.listeners.list_mut().attach_back(id, Box::new(callback));
        id
    }

    /// Prepends a listener to the front of `P`'s list and returns its detach
    /// token.
    ///
    /// The provided callback itself is inserted and will run before every
    /// listener already attached.
    pub fn attach_front<P, Index, F>(&mut self, callback: F) -> ListenerId
    where
        P: 'static,
        F: FnMut(&mut Event<P>) + 'static,
        L::Listeners: BusSlot<P, Index>,
    {
        let id = ListenerId::next();
        log::trace!(
            "attach_front {:?} for {}",
            id,
            std::any::type_name::<P>()
        );
        self.listeners.list_mut().attach_front(id, Box::new(callback));
        id
    }

    /// Removes the first listener in `P`'s list matching the token.
    ///
    /// Returns `false` (a silent no-op, not an error) when the token is not
    /// attached — already detached, or issued by another bus.
    pub fn detach<P, Index>(&mut self, id: ListenerId) -> bool
    where
        P: 'static,
        L::Listeners: BusSlot<P, Index>,
    {
        let removed = self.listeners.list_mut().detach(id);
        log::trace!(
            "detach {:?} for {}: {}",
            id,
            std::any::type_name::<P>(),
            if removed { "removed" } else { "not attached" }
        );
        removed
    }

    /// Number of listeners currently attached for `P`.
    pub fn listener_count<P, Index>(&self) -> usize
    where
        P: 'static,
        L::Listeners: BusSlot<P, Index>,
    {
        self.listeners.list().len()
    }

    /// Total listener count across all declared types.
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Detaches every listener of every declared type.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Wraps `payload` in a fresh envelope and delivers it immediately.
    ///
    /// The envelope lives for this pass only and is dropped when the call
    /// returns.
    pub fn dispatch<P, Index>(&mut self, payload: P)
    where
        P: 'static,
        L::Listeners: BusSlot<P, Index>,
    {
        let mut event = Event::new(payload);
        self.dispatch_event(&mut event);
    }

    /// Delivers an existing envelope without taking ownership.
    ///
    /// Each listener in `P`'s list is invoked in order while the envelope is
    /// still alive; the first consumed observation ends the pass. The
    /// envelope's state (consumption flag, payload mutations) remains with
    /// the caller afterwards.
    pub fn dispatch_event<P, Index>(&mut self, event: &mut Event<P>)
    where
        P: 'static,
        L::Listeners: BusSlot<P, Index>,
    {
        let list = self.listeners.list_mut();
        log::trace!(
            "dispatch {} to {} listener(s)",
            std::any::type_name::<P>(),
            list.len()
        );
        list.deliver(event);
    }

    /// Batch pass over every envelope currently in the queue, without
    /// removing anything.
    ///
    /// For every type the bus declares — each of which the queue must
    /// declare too, or the call fails to compile — envelopes are delivered
    /// in insertion order; types are processed in the bus's declaration
    /// order. Queue types outside the bus's set are never dispatched. The
    /// queue's contents and length are unchanged, so a second call
    /// redelivers the same envelopes — minus any whose consumption flag,
    /// which persists on the stored envelope, already ended their delivery.
    pub fn dispatch_queue<M, Indices>(&mut self, queue: &mut EventQueue<M>)
    where
        M: EventSet,
        L::Listeners: DeliverFrom<M::Queues, Indices>,
    {
        log::debug!("dispatching queue of {} event(s)", queue.len());
        self.listeners.deliver_from(&mut queue.slots);
    }

    /// Batch pass that removes the queue's contents: the explicit draining
    /// counterpart of [`Bus::dispatch_queue`].
    ///
    /// Delivery is identical; afterwards every envelope that was present —
    /// delivered, consumed, or of a type the bus does not declare — is
    /// discarded and the queue is empty.
    pub fn drain_queue<M, Indices>(&mut self, queue: &mut EventQueue<M>)
    where
        M: EventSet,
        L::Listeners: DeliverFrom<M::Queues, Indices>,
    {
        log::debug!("draining queue of {} event(s)", queue.len());
        self.listeners.deliver_from(&mut queue.slots);
        queue.clear();
    }
}

impl<L: EventSet> Default for Bus<L> {
    fn default() -> Self {
        Self::new()
    }
}
