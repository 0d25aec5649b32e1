//! # Event type lists.
//!
//! A type list is an ordinary tuple of distinct payload types — `(Connect,)`,
//! `(Connect, Disconnect)`, and so on up to twelve entries. The tuple is a
//! compile-time-only declaration: it names a type set once, and
//! [`make_bus`] / [`make_event_queue`] derive a matching [`Bus`] and
//! [`EventQueue`] pair from it, so the set is never spelled twice.
//!
//! ## Example
//! ```rust
//! use typebus::{make_bus, make_event_queue, Event};
//!
//! struct Opened { fd: i32 }
//! struct Closed;
//!
//! type IoEvents = (Opened, Closed);
//!
//! let mut bus = make_bus::<IoEvents>();
//! let mut queue = make_event_queue::<IoEvents>();
//!
//! bus.attach_back(|event: &mut Event<Opened>| assert_eq!(event.fd, 3));
//! queue.push_back(Opened { fd: 3 });
//! bus.dispatch_queue(&mut queue);
//! ```

use crate::events::{Bus, EventQueue};

use super::storage::{LCons, LNil, ListenerOps, QCons, QNil, QueueOps};

mod sealed {
    pub trait Sealed {}
}

/// A declared set of event payload types.
///
/// Implemented for tuples of 1 to 12 distinct `'static` types. The two
/// associated types are the per-type storage chains a queue and a bus derive
/// from the same declaration; both are a single owned block.
///
/// Sealed: the tuple impls below are the only ones, so a set is always a
/// plain tuple of payload types.
pub trait EventSet: sealed::Sealed {
    /// Queue-side storage: one `Vec<Event<P>>` per declared type.
    type Queues: Default + QueueOps;
    /// Bus-side storage: one `ListenerList<P>` per declared type.
    type Listeners: Default + ListenerOps;
}

macro_rules! storage_chain {
    ($nil:ty, $cons:ident;) => { $nil };
    ($nil:ty, $cons:ident; $head:ident $(, $rest:ident)*) => {
        $cons<$head, storage_chain!($nil, $cons; $($rest),*)>
    };
}

macro_rules! impl_event_set {
    ($($payload:ident),+) => {
        impl<$($payload: 'static),+> sealed::Sealed for ($($payload,)+) {}

        impl<$($payload: 'static),+> EventSet for ($($payload,)+) {
            type Queues = storage_chain!(QNil, QCons; $($payload),+);
            type Listeners = storage_chain!(LNil, LCons; $($payload),+);
        }
    };
}

impl_event_set!(T1);
impl_event_set!(T1, T2);
impl_event_set!(T1, T2, T3);
impl_event_set!(T1, T2, T3, T4);
impl_event_set!(T1, T2, T3, T4, T5);
impl_event_set!(T1, T2, T3, T4, T5, T6);
impl_event_set!(T1, T2, T3, T4, T5, T6, T7);
impl_event_set!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_event_set!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_event_set!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_event_set!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_event_set!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

/// Returns a fresh, empty [`Bus`] whose declared type set matches the list.
pub fn make_bus<L: EventSet>() -> Bus<L> {
    Bus::new()
}

/// Returns a fresh, empty [`EventQueue`] whose declared type set matches the
/// list.
pub fn make_event_queue<L: EventSet>() -> EventQueue<L> {
    EventQueue::new()
}
