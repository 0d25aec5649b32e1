//! # Example: queue_dispatch
//!
//! Demonstrates buffering events in an [`EventQueue`] and running batch
//! passes over it with a matching [`Bus`].
//!
//! Shows how to:
//! - Derive a bus/queue pair from one type-list declaration.
//! - Buffer several payload types in one queue.
//! - Redeliver with [`Bus::dispatch_queue`] vs. remove with
//!   [`Bus::drain_queue`].
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example queue_dispatch
//! ```

use typebus::{make_bus, make_event_queue, Event};

#[derive(Debug)]
struct LineRead {
    text: String,
}

#[derive(Debug)]
struct Eof;

type ReaderEvents = (LineRead, Eof);

fn main() {
    env_logger::init();

    let mut bus = make_bus::<ReaderEvents>();
    let mut queue = make_event_queue::<ReaderEvents>();

    bus.attach_back(|event: &mut Event<LineRead>| {
        println!("line: {}", event.text);
    });
    bus.attach_back(|_event: &mut Event<Eof>| {
        println!("reached end of input");
    });

    for text in ["alpha", "beta", "gamma"] {
        queue.push_back(LineRead {
            text: text.to_string(),
        });
    }
    queue.push_back(Eof);
    println!("buffered {} event(s)", queue.len());

    // Non-draining: the queue still holds everything afterwards.
    bus.dispatch_queue(&mut queue);
    println!("after dispatch_queue: {} event(s) left", queue.len());

    // Draining: delivers once more, then empties the queue.
    bus.drain_queue(&mut queue);
    println!("after drain_queue: {} event(s) left", queue.len());
}
