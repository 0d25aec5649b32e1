//! # Per-type storage chains.
//!
//! An [`EventQueue`](crate::EventQueue) needs one `Vec<Event<P>>` per
//! declared payload type; a [`Bus`](crate::Bus) needs one
//! [`ListenerList<P>`] per declared type. Both are laid out as a typed
//! chain — `QCons<A, QCons<B, QNil>>` and `LCons<A, LCons<B, LNil>>` — so
//! the whole multi-type store is a single owned block, with no boxing and
//! no runtime tag.
//!
//! Slot selection is resolved entirely at compile time: [`QueueSlot`] and
//! [`BusSlot`] walk the chain guided by an inferred [`Here`]/[`There`]
//! index. Referencing a type that is not in the chain has no valid index
//! and fails to compile; a duplicated type has two, which is ambiguous and
//! also fails to compile. That is how "declared, distinct types only"
//! is enforced without any runtime check.

use crate::events::listeners::ListenerList;
use crate::events::Event;

use super::index::{Here, There};

// ---- Queue-side chain ----

/// Terminator of a queue storage chain.
#[derive(Default)]
pub struct QNil;

/// One per-type event sequence plus the rest of the chain.
pub struct QCons<P: 'static, Tail> {
    pub(crate) events: Vec<Event<P>>,
    pub(crate) tail: Tail,
}

impl<P: 'static, Tail: Default> Default for QCons<P, Tail> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            tail: Tail::default(),
        }
    }
}

/// Compile-time selection of the event sequence for payload type `P`.
pub trait QueueSlot<P: 'static, Index> {
    fn events(&self) -> &Vec<Event<P>>;
    fn events_mut(&mut self) -> &mut Vec<Event<P>>;
}

impl<P: 'static, Tail> QueueSlot<P, Here> for QCons<P, Tail> {
    #[inline]
    fn events(&self) -> &Vec<Event<P>> {
        &self.events
    }

    #[inline]
    fn events_mut(&mut self) -> &mut Vec<Event<P>> {
        &mut self.events
    }
}

impl<P: 'static, Head: 'static, Tail, Index> QueueSlot<P, There<Index>> for QCons<Head, Tail>
where
    Tail: QueueSlot<P, Index>,
{
    #[inline]
    fn events(&self) -> &Vec<Event<P>> {
        self.tail.events()
    }

    #[inline]
    fn events_mut(&mut self) -> &mut Vec<Event<P>> {
        self.tail.events_mut()
    }
}

/// Whole-chain aggregates over every per-type sequence.
pub trait QueueOps {
    /// Sum of all per-type sequence lengths.
    fn len(&self) -> usize;
    /// Empties every per-type sequence.
    fn clear(&mut self);
}

impl QueueOps for QNil {
    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}

impl<P: 'static, Tail: QueueOps> QueueOps for QCons<P, Tail> {
    fn len(&self) -> usize {
        self.events.len() + self.tail.len()
    }

    fn clear(&mut self) {
        self.events.clear();
        self.tail.clear();
    }
}

// ---- Bus-side chain ----

/// Terminator of a listener storage chain.
#[derive(Default)]
pub struct LNil;

/// One per-type listener list plus the rest of the chain.
pub struct LCons<P: 'static, Tail> {
    pub(crate) list: ListenerList<P>,
    pub(crate) tail: Tail,
}

impl<P: 'static, Tail: Default> Default for LCons<P, Tail> {
    fn default() -> Self {
        Self {
            list: ListenerList::new(),
            tail: Tail::default(),
        }
    }
}

/// Compile-time selection of the listener list for payload type `P`.
pub trait BusSlot<P: 'static, Index> {
    fn list(&self) -> &ListenerList<P>;
    fn list_mut(&mut self) -> &mut ListenerList<P>;
}

impl<P: 'static, Tail> BusSlot<P, Here> for LCons<P, Tail> {
    #[inline]
    fn list(&self) -> &ListenerList<P> {
        &self.list
    }

    #[inline]
    fn list_mut(&mut self) -> &mut ListenerList<P> {
        &mut self.list
    }
}

impl<P: 'static, Head: 'static, Tail, Index> BusSlot<P, There<Index>> for LCons<Head, Tail>
where
    Tail: BusSlot<P, Index>,
{
    #[inline]
    fn list(&self) -> &ListenerList<P> {
        self.tail.list()
    }

    #[inline]
    fn list_mut(&mut self) -> &mut ListenerList<P> {
        self.tail.list_mut()
    }
}

/// Whole-chain operations over every listener list.
pub trait ListenerOps {
    /// Detaches every listener of every type.
    fn clear(&mut self);
    /// Total listener count across all types.
    fn len(&self) -> usize;
}

impl ListenerOps for LNil {
    fn clear(&mut self) {}

    fn len(&self) -> usize {
        0
    }
}

impl<P: 'static, Tail: ListenerOps> ListenerOps for LCons<P, Tail> {
    fn clear(&mut self) {
        self.list.clear();
        self.tail.clear();
    }

    fn len(&self) -> usize {
        self.list.len() + self.tail.len()
    }
}

// ---- Queue-into-bus delivery ----

/// Walks a bus's listener chain and, for every type the bus declares, runs
/// each buffered envelope of that type through its listener list.
///
/// `Indices` carries one [`QueueSlot`] index per bus slot, so every type
/// the bus declares must also be declared by the queue; a bus type the
/// queue does not know has no index and the bound fails to compile. Queue
/// types outside the bus's set are simply never visited. Processing order
/// across types is the bus's declaration order.
pub trait DeliverFrom<Queues, Indices> {
    fn deliver_from(&mut self, queues: &mut Queues);
}

impl<Queues> DeliverFrom<Queues, ()> for LNil {
    fn deliver_from(&mut self, _queues: &mut Queues) {}
}

impl<P, LTail, Queues, IndexHead, IndexTail> DeliverFrom<Queues, (IndexHead, IndexTail)>
    for LCons<P, LTail>
where
    P: 'static,
    Queues: QueueSlot<P, IndexHead>,
    LTail: DeliverFrom<Queues, IndexTail>,
{
    fn deliver_from(&mut self, queues: &mut Queues) {
        for event in queues.events_mut().iter_mut() {
            self.list.deliver(event);
        }
        self.tail.deliver_from(queues);
    }
}
