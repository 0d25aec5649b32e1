//! # Ordered listener lists.
//!
//! One [`ListenerList`] exists per declared payload type inside a
//! [`Bus`](crate::Bus). It keeps callbacks in invocation order —
//! front-attached entries before back-attached ones — and runs the
//! consumption-gated delivery loop.
//!
//! Closures are not comparable in Rust, so listeners are identified by the
//! opaque [`ListenerId`] token handed out at attach time; detaching removes
//! the first entry with a matching token.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::events::Event;

/// Global listener id source.
///
/// Process-wide so a token can never collide across buses; a token from one
/// bus simply misses (no-op) on another.
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

/// Boxed listener callback for payload type `P`.
pub type Callback<P> = Box<dyn FnMut(&mut Event<P>)>;

/// Opaque identity of an attached listener.
///
/// Returned by [`Bus::attach_back`](crate::Bus::attach_back) and
/// [`Bus::attach_front`](crate::Bus::attach_front); pass it to
/// [`Bus::detach`](crate::Bus::detach) to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct Entry<P: 'static> {
    id: ListenerId,
    callback: Callback<P>,
}

/// Ordered list of listeners for one payload type.
///
/// Invocation order is front-to-back: `attach_front` prepends, `attach_back`
/// appends, ties among same-kind attaches break by attach order.
pub struct ListenerList<P: 'static> {
    entries: VecDeque<Entry<P>>,
}

impl<P: 'static> ListenerList<P> {
    pub(crate) fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Number of listeners currently attached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no listener is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn attach_back(&mut self, id: ListenerId, callback: Callback<P>) {
        self.entries.push_back(Entry { id, callback });
    }

    /// Prepends the given callback itself, so it runs before every listener
    /// already in the list.
    pub(crate) fn attach_front(&mut self, id: ListenerId, callback: Callback<P>) {
        self.entries.push_front(Entry { id, callback });
    }

    /// Removes the first entry with a matching id. Returns whether one was
    /// found; a miss is not an error.
    pub(crate) fn detach(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Runs the delivery loop over one envelope.
    ///
    /// Each listener is invoked only while the envelope is still alive; the
    /// first consumed observation stops the pass, skipping every later
    /// listener. An envelope arriving already consumed is delivered to no
    /// one.
    pub(crate) fn deliver(&mut self, event: &mut Event<P>) {
        for entry in self.entries.iter_mut() {
            if !event.is_alive() {
                log::trace!(
                    "event {} consumed, skipping remaining listeners",
                    std::any::type_name::<P>()
                );
                break;
            }
            (entry.callback)(event);
        }
    }
}
