//! # typebus
//!
//! **typebus** is an in-process, compile-time-typed publish/subscribe
//! library for Rust.
//!
//! Producers create plain typed event values; ordered listener lists react
//! to events of their type; events may be buffered in a typed multi-type
//! queue before a batch dispatch pass. It is a library primitive, not a
//! transport — there is no serialization, no I/O and no cross-thread
//! delivery.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────┐     ┌──────────────┐    ┌──────────────────┐
//!  │   producer   │     │   producer   │    │     producer     │
//!  └──────┬───────┘     └──────┬───────┘    └────────┬─────────┘
//!         │ dispatch(payload)  │ push_back(payload)  │ emit(payload)
//!         ▼                    ▼                     ▼
//!  ┌─────────────────────────────────────┐   ┌───────────────────┐
//!  │            Bus<(A, B, …)>           │   │    Dispatcher     │
//!  │  per type: [front…, back…] listeners│   │ TypeKey → [cb…]   │
//!  │                  ▲                  │   │ (runtime-keyed)   │
//!  │   dispatch_queue │ drain_queue      │   └───────────────────┘
//!  └──────────────────┼──────────────────┘             ▲
//!                     │                                │
//!         ┌───────────┴───────────┐          ┌─────────┴─────────┐
//!         │  EventQueue<(A, B,…)> │          │  TypeKey registry │
//!         │  per type: [ev, ev…]  │          │  (process-global) │
//!         └───────────────────────┘          └───────────────────┘
//! ```
//!
//! ### Delivery
//! ```text
//! dispatch(payload):
//!   wrap payload in Event<P>            (consumed = false)
//!   for listener in front…back order:
//!     if event consumed ─► stop, skip the rest of the pass
//!     listener(&mut event)
//! ```
//!
//! Every dispatch form is synchronous and runs on the caller's thread. A
//! queue pass redelivers on the next call ([`Bus::dispatch_queue`]) unless
//! the draining form is chosen explicitly ([`Bus::drain_queue`]).
//!
//! ## Features
//! | Area           | Description                                               | Key types / operations                  |
//! |----------------|-----------------------------------------------------------|-----------------------------------------|
//! | **Envelopes**  | Typed payload wrapper with a monotonic consumption flag.  | [`Event`]                               |
//! | **Type sets**  | Tuples of distinct payload types; membership checked at compile time. | [`EventSet`], [`make_bus`], [`make_event_queue`] |
//! | **Buffering**  | Per-type ordered sequences behind one move-only queue.    | [`EventQueue`]                          |
//! | **Dispatch**   | Ordered listeners, front/back attach, consumption short-circuit. | [`Bus`], [`ListenerId`]          |
//! | **Runtime keys** | Heterogeneous dispatch without compile-time sets.       | [`Dispatcher`], [`TypeKey`]             |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use typebus::{make_bus, make_event_queue, Event};
//!
//! #[derive(Debug)]
//! struct Ping { seq: u32 }
//! #[derive(Debug)]
//! struct Pong;
//!
//! // Declare the type set once; derive a matching bus/queue pair from it.
//! type NetEvents = (Ping, Pong);
//!
//! let mut bus = make_bus::<NetEvents>();
//! bus.attach_back(|event: &mut Event<Ping>| {
//!     if event.seq == 0 {
//!         event.consume(); // short-circuit the rest of this pass
//!     }
//! });
//!
//! // Immediate, synchronous dispatch.
//! bus.dispatch(Ping { seq: 0 });
//!
//! // Buffered dispatch through a queue.
//! let mut queue = make_event_queue::<NetEvents>();
//! queue.push_back(Ping { seq: 1 });
//! queue.push_back(Pong);
//! assert_eq!(queue.len(), 2);
//!
//! bus.dispatch_queue(&mut queue); // redelivers on the next call
//! assert_eq!(queue.len(), 2);
//!
//! bus.drain_queue(&mut queue); // the explicit draining form
//! assert!(queue.is_empty());
//! ```

mod dispatcher;
mod events;
mod registry;
mod set;

// ---- Public re-exports ----

pub use dispatcher::Dispatcher;
pub use events::{Bus, Callback, Event, EventQueue, ListenerId, ListenerList};
pub use registry::TypeKey;
pub use set::{make_bus, make_event_queue, EventSet};

// Lower-level type-set machinery (storage chains, slot selection, indices).
// Needed only when writing code generic over event sets.
pub use set::{BusSlot, DeliverFrom, Here, LCons, LNil, ListenerOps, QCons, QNil, QueueOps, QueueSlot, There};

// Optional: expose a simple built-in stdout logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod logging;
#[cfg(feature = "logging")]
pub use logging::LogWriter;
