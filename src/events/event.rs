//! # Typed event envelope.
//!
//! [`Event`] wraps one payload value together with a `consumed` flag. It is
//! the unit stored in an [`EventQueue`](crate::EventQueue) and the value
//! handed to every listener during a dispatch pass.
//!
//! ## Consumption
//! A listener that has fully handled an event calls [`Event::consume`]. The
//! flag is monotonic: once set it is never reset, and the dispatch loop stops
//! delivering the envelope to later listeners — in the current pass and in
//! any later pass over the same envelope (queued events keep their flag).
//!
//! ## Example
//! ```rust
//! use typebus::Event;
//!
//! struct KeyPress { code: u8 }
//!
//! let mut event = Event::new(KeyPress { code: 42 });
//! assert!(event.is_alive());
//! assert_eq!(event.code, 42);
//!
//! event.consume();
//! event.consume(); // idempotent
//! assert!(event.is_consumed());
//! ```

use std::ops::{Deref, DerefMut};

/// Envelope owning one payload value plus its consumption state.
///
/// Payload access goes through `Deref`/`DerefMut`, unguarded — producer and
/// listener code may read and write it freely; whether mutations made by an
/// earlier listener should be visible to a later one is the producer's
/// contract, not the envelope's.
#[derive(Clone, Debug)]
pub struct Event<P> {
    payload: P,
    consumed: bool,
}

impl<P> Event<P> {
    /// Wraps a payload in a fresh, unconsumed envelope.
    pub fn new(payload: P) -> Self {
        Self {
            payload,
            consumed: false,
        }
    }

    /// Marks the event as consumed.
    ///
    /// Monotonic and idempotent: the flag goes `false → true` once and is
    /// never reset. Listeners ordered after the consuming one are skipped
    /// for every remaining delivery of this envelope.
    #[inline]
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    /// Returns `true` once [`Event::consume`] has been called.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Returns `true` while the event has not been consumed.
    ///
    /// This is the "keep delivering" gate the dispatch loop checks before
    /// each listener invocation.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.consumed
    }

    /// Consumes the envelope and returns the payload.
    #[inline]
    pub fn into_inner(self) -> P {
        self.payload
    }
}

impl<P> From<P> for Event<P> {
    fn from(payload: P) -> Self {
        Self::new(payload)
    }
}

impl<P> Deref for Event<P> {
    type Target = P;

    #[inline]
    fn deref(&self) -> &P {
        &self.payload
    }
}

impl<P> DerefMut for Event<P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut P {
        &mut self.payload
    }
}
