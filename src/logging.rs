//! # Simple logging listeners for debugging and demos.
//!
//! [`LogWriter`] builds listeners that print each delivered event to stdout
//! in a human-readable format. Primarily useful for development, debugging
//! and example programs.
//!
//! ## Output format
//! ```text
//! [input] KeyPress { code: 42 }
//! [input] MouseMove { dx: 3, dy: -1 } (consumed)
//! ```
//!
//! ## Example
//! ```rust
//! use typebus::{Bus, LogWriter};
//!
//! #[derive(Debug)]
//! struct KeyPress { code: u8 }
//!
//! let mut bus: Bus<(KeyPress,)> = Bus::new();
//! bus.attach_front(LogWriter::listener("input"));
//! bus.dispatch(KeyPress { code: 42 });
//! ```

use std::fmt::Debug;

use crate::events::Event;

/// Factory for stdout logging listeners.
///
/// Attach one per event type, usually with
/// [`attach_front`](crate::Bus::attach_front) so the line prints before any
/// listener can consume the event. Not intended for production use — attach
/// a custom listener for structured logging or metrics.
pub struct LogWriter;

impl LogWriter {
    /// Returns a listener printing `[label] {payload:?}` for every envelope
    /// it observes, with a `(consumed)` suffix when the event arrives
    /// already consumed-marked by an earlier listener in the pass.
    pub fn listener<P: Debug + 'static>(label: &'static str) -> impl FnMut(&mut Event<P>) + 'static {
        move |event: &mut Event<P>| {
            if event.is_alive() {
                println!("[{label}] {:?}", **event);
            } else {
                println!("[{label}] {:?} (consumed)", **event);
            }
        }
    }
}
