//! # Multi-type event queue.
//!
//! [`EventQueue`] buffers envelopes of several unrelated payload types until
//! a [`Bus`](crate::Bus) dispatches them in a batch pass. The set of types
//! is fixed at the declaration site; per-type sequences keep insertion
//! order, which is also dispatch order.
//!
//! The queue is a pure buffer: it never invokes listeners and never decides
//! whether dispatched envelopes are removed. That policy belongs to the bus
//! ([`dispatch_queue`](crate::Bus::dispatch_queue) redelivers,
//! [`drain_queue`](crate::Bus::drain_queue) removes).
//!
//! ## Example
//! ```rust
//! use typebus::EventQueue;
//!
//! struct Moved { dx: i32 }
//! struct Clicked;
//!
//! let mut queue: EventQueue<(Moved, Clicked)> = EventQueue::new();
//! queue.push_back(Moved { dx: 4 });
//! queue.push_back(Moved { dx: -1 });
//! queue.push_back(Clicked);
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.iter::<Moved, _>().count(), 2);
//!
//! queue.clear();
//! assert!(queue.is_empty());
//! ```

use crate::set::{EventSet, QueueOps, QueueSlot};

use super::event::Event;

/// Ordered, growable buffer of event envelopes for a fixed set of payload
/// types.
///
/// Per-type sequences are independent: pushing one type never affects
/// another. The whole queue is a single owned block and is move-only — there
/// is no `Clone`, so a queue always has exactly one owner.
pub struct EventQueue<L: EventSet> {
    pub(crate) slots: L::Queues,
}

impl<L: EventSet> EventQueue<L> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
        }
    }

    /// Appends a new envelope wrapping `payload` to that type's sequence.
    ///
    /// The payload type must be one of the queue's declared types; anything
    /// else fails to compile.
    pub fn push_back<P, Index>(&mut self, payload: P)
    where
        P: 'static,
        L::Queues: QueueSlot<P, Index>,
    {
        log::trace!("queued event {}", std::any::type_name::<P>());
        self.slots.events_mut().push(Event::new(payload));
    }

    /// Appends a pre-built envelope, preserving its consumption state.
    pub fn push_event<P, Index>(&mut self, event: Event<P>)
    where
        P: 'static,
        L::Queues: QueueSlot<P, Index>,
    {
        self.slots.events_mut().push(event);
    }

    /// Iterates the envelopes of one payload type in insertion order.
    pub fn iter<P, Index>(&self) -> std::slice::Iter<'_, Event<P>>
    where
        P: 'static,
        L::Queues: QueueSlot<P, Index>,
    {
        self.slots.events().iter()
    }

    /// Mutable per-type iteration in insertion order.
    pub fn iter_mut<P, Index>(&mut self) -> std::slice::IterMut<'_, Event<P>>
    where
        P: 'static,
        L::Queues: QueueSlot<P, Index>,
    {
        self.slots.events_mut().iter_mut()
    }

    /// Total number of buffered envelopes across all declared types.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` iff every per-type sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every buffered envelope of every type.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<L: EventSet> Default for EventQueue<L> {
    fn default() -> Self {
        Self::new()
    }
}
