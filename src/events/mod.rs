//! Event envelopes, the multi-type queue and the dispatch engine.
//!
//! ## Architecture
//! ```text
//! Producers:                      Bus<(A, B)>:
//!   dispatch(payload) ──────────►  ListenerList<A>: [front… back…]
//!   dispatch_event(&mut ev) ────►  ListenerList<B>: [front… back…]
//!                                        ▲
//!   EventQueue<(A, B)>                   │ dispatch_queue / drain_queue
//!   push_back(..) ──► [ev, ev] ──────────┘   (per type, insertion order)
//! ```
//!
//! ## Contents
//! - [`Event`] — a payload wrapped with its consumption flag
//! - [`EventQueue`] — per-type ordered buffers for a declared type set
//! - [`Bus`] — ordered listener lists plus the three dispatch forms
//! - [`ListenerId`] — the detach token attach hands out
//!
//! Delivery is consumption-gated: every listener sees the envelope only
//! while [`Event::is_alive`] holds, so one `consume()` call short-circuits
//! the rest of the pass.

mod bus;
mod event;
pub(crate) mod listeners;
mod queue;

pub use bus::Bus;
pub use event::Event;
pub use listeners::{Callback, ListenerId, ListenerList};
pub use queue::EventQueue;
