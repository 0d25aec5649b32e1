//! Type sets: declarations, per-type storage and compile-time membership.
//!
//! A [`Bus`](crate::Bus) and an [`EventQueue`](crate::EventQueue) are both
//! parameterized by an [`EventSet`] — a tuple of distinct payload types fixed
//! at the declaration site. This module holds the machinery that makes the
//! set a purely compile-time construct:
//!
//! - [`list`]: the [`EventSet`] trait, its tuple impls, and the
//!   [`make_bus`] / [`make_event_queue`] factories
//! - [`storage`]: the per-type storage chains and slot-selection traits
//! - [`index`]: the type-level indices the compiler infers to locate a slot
//!
//! Membership violations — dispatching, attaching or pushing a type a set
//! does not declare — are compile errors, never runtime conditions.

pub mod index;
pub mod list;
pub mod storage;

pub use index::{Here, There};
pub use list::{make_bus, make_event_queue, EventSet};
pub use storage::{BusSlot, DeliverFrom, LCons, LNil, ListenerOps, QCons, QNil, QueueOps, QueueSlot};
