//! # Example: consume
//!
//! Demonstrates listener ordering and consumption short-circuiting.
//!
//! Shows how to:
//! - Attach listeners at the back and at the front of a type's list.
//! - Call [`Event::consume`] to stop the rest of the pass.
//! - Use [`LogWriter`] to watch envelopes fly by.
//!
//! ## Flow
//! ```text
//! dispatch(Damage { amount }) ──► [log] front listener prints the event
//!                              ├─► shield listener (consumes when amount == 0)
//!                              └─► apply listener  (skipped if consumed)
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example consume --features logging
//! ```

use typebus::{make_bus, Event, LogWriter};

#[derive(Debug)]
struct Damage {
    amount: u32,
}

#[derive(Debug)]
struct Heal {
    amount: u32,
}

type CombatEvents = (Damage, Heal);

fn main() {
    let mut bus = make_bus::<CombatEvents>();

    // Front-attached: prints every Damage event before anyone can consume it.
    bus.attach_front(LogWriter::listener::<Damage>("combat"));

    // Shield: zero damage is fully absorbed, nothing left to apply.
    bus.attach_back(|event: &mut Event<Damage>| {
        if event.amount == 0 {
            println!("shield absorbed the hit");
            event.consume();
        }
    });

    bus.attach_back(|event: &mut Event<Damage>| {
        println!("applying {} damage", event.amount);
    });

    bus.attach_back(|event: &mut Event<Heal>| {
        println!("healing {} points", event.amount);
    });

    bus.dispatch(Damage { amount: 0 }); // apply listener never runs
    bus.dispatch(Damage { amount: 12 }); // full pass
    bus.dispatch(Heal { amount: 5 });
}
