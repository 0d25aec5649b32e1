//! End-to-end tests for the bus/queue pair and the runtime-keyed
//! dispatcher: attach ordering, consumption short-circuiting, queue
//! redelivery and draining.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use typebus::{make_bus, make_event_queue, Bus, Dispatcher, Event, EventQueue, TypeKey};

struct A {
    a: i32,
    b: i32,
}

struct B {
    s: char,
}

#[test]
fn consuming_listener_short_circuits_direct_dispatch() {
    let mut bus: Bus<(A,)> = Bus::new();
    let captured = Rc::new(Cell::new(0));

    let seen = Rc::clone(&captured);
    bus.attach_back(move |event: &mut Event<A>| {
        seen.set(event.a);
        event.consume();
        assert_eq!(event.a, 1);
    });

    // Runs after the consuming listener, so it must never run at all.
    bus.attach_back(|_event: &mut Event<A>| {
        panic!("event consumption failed to stop the pass");
    });

    // Front-attached: runs first, before the capture above is written.
    let early = Rc::clone(&captured);
    bus.attach_front(move |_event: &mut Event<A>| assert_eq!(early.get(), 0));

    bus.dispatch(A { a: 1, b: 2 });
    assert_eq!(captured.get(), 1);
}

#[test]
fn queue_dispatch_redelivers_without_draining() {
    let mut bus: Bus<(A,)> = Bus::new();
    let mut queue: EventQueue<(A, B)> = EventQueue::new();
    let captured = Rc::new(Cell::new(0));

    let seen = Rc::clone(&captured);
    bus.attach_back(move |event: &mut Event<A>| {
        seen.set(event.a);
        event.consume();
        assert_eq!(event.a, 1);
    });
    bus.attach_back(|_event: &mut Event<A>| {
        panic!("event consumption failed to stop the pass");
    });
    let early = Rc::clone(&captured);
    bus.attach_front(move |_event: &mut Event<A>| assert_eq!(early.get(), 0));

    queue.push_back(A { a: 1, b: 2 });
    assert_eq!(queue.len(), 1);
    assert!(!queue.is_empty());

    bus.dispatch_queue(&mut queue);
    assert_eq!(queue.len(), 1);

    // Second pass: the stored envelope is already consumed, so no listener
    // (front included) runs again, and the queue still holds it.
    bus.dispatch_queue(&mut queue);
    assert_eq!(queue.len(), 1);

    queue.clear();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
}

#[test]
fn type_list_factories_derive_a_matching_pair() {
    type SomeEvents = (A, B);

    let mut bus = make_bus::<SomeEvents>();
    let mut queue = make_event_queue::<SomeEvents>();

    let delivered = Rc::new(Cell::new(0));
    let seen = Rc::clone(&delivered);
    bus.attach_back(move |event: &mut Event<B>| {
        assert_eq!(event.s, 'z');
        seen.set(seen.get() + 1);
    });

    queue.push_back(B { s: 'z' });
    bus.dispatch_queue(&mut queue);
    assert_eq!(delivered.get(), 1);
}

#[test]
fn listeners_run_front_then_back_in_attach_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut bus: Bus<(A,)> = Bus::new();

    let tag = Rc::clone(&order);
    bus.attach_front(move |_event: &mut Event<A>| tag.borrow_mut().push("l1"));
    let tag = Rc::clone(&order);
    bus.attach_back(move |_event: &mut Event<A>| tag.borrow_mut().push("l2"));
    let tag = Rc::clone(&order);
    bus.attach_back(move |_event: &mut Event<A>| tag.borrow_mut().push("l3"));

    bus.dispatch(A { a: 0, b: 0 });
    assert_eq!(*order.borrow(), vec!["l1", "l2", "l3"]);
}

#[test]
fn queue_aggregates_across_types() {
    let mut queue: EventQueue<(A, B)> = EventQueue::new();

    for i in 0..3 {
        queue.push_back(A { a: i, b: i });
    }
    for s in ['x', 'y'] {
        queue.push_back(B { s });
    }

    assert_eq!(queue.len(), 5);
    assert_eq!(queue.iter::<A, _>().count(), 3);
    assert_eq!(queue.iter::<B, _>().count(), 2);

    queue.clear();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
}

#[test]
fn unconsumed_events_are_redelivered_on_every_pass() {
    let mut bus: Bus<(A,)> = Bus::new();
    let mut queue: EventQueue<(A,)> = EventQueue::new();
    let hits = Rc::new(Cell::new(0));

    let seen = Rc::clone(&hits);
    bus.attach_back(move |_event: &mut Event<A>| seen.set(seen.get() + 1));

    queue.push_back(A { a: 1, b: 1 });
    queue.push_back(A { a: 2, b: 2 });

    bus.dispatch_queue(&mut queue);
    bus.dispatch_queue(&mut queue);

    assert_eq!(hits.get(), 4);
    assert_eq!(queue.len(), 2);
}

#[test]
fn detached_listener_never_runs_again() {
    let mut bus: Bus<(A,)> = Bus::new();
    let kept_hits = Rc::new(Cell::new(0));
    let detached_hits = Rc::new(Cell::new(0));

    let hits = Rc::clone(&kept_hits);
    bus.attach_back(move |_event: &mut Event<A>| hits.set(hits.get() + 1));
    let hits = Rc::clone(&detached_hits);
    let id = bus.attach_back(move |_event: &mut Event<A>| hits.set(hits.get() + 1));

    bus.dispatch(A { a: 0, b: 0 });
    assert!(bus.detach::<A, _>(id));
    assert!(!bus.detach::<A, _>(id)); // second detach is a silent no-op

    bus.dispatch(A { a: 0, b: 0 });
    bus.dispatch(A { a: 0, b: 0 });

    assert_eq!(kept_hits.get(), 3);
    assert_eq!(detached_hits.get(), 1);
}

#[test]
fn drain_queue_delivers_once_and_empties() {
    let mut bus: Bus<(A, B)> = Bus::new();
    let mut queue: EventQueue<(A, B)> = EventQueue::new();
    let hits = Rc::new(Cell::new(0));

    let seen = Rc::clone(&hits);
    bus.attach_back(move |_event: &mut Event<A>| seen.set(seen.get() + 1));

    queue.push_back(A { a: 1, b: 2 });
    queue.push_back(B { s: 'd' });

    bus.drain_queue(&mut queue);
    assert_eq!(hits.get(), 1);
    assert!(queue.is_empty());

    // Nothing left: a second drain delivers nothing.
    bus.drain_queue(&mut queue);
    assert_eq!(hits.get(), 1);
}

#[test]
fn runtime_dispatcher_routes_heterogeneous_payloads() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();

    let tag = Rc::clone(&order);
    dispatcher.on(move |event: &mut A| {
        assert_eq!(event.a, 1);
        tag.borrow_mut().push("a");
    });
    let tag = Rc::clone(&order);
    dispatcher.on(move |event: &mut B| {
        assert_eq!(event.s, 'r');
        tag.borrow_mut().push("b");
    });

    dispatcher.emit(A { a: 1, b: 2 });
    dispatcher.emit(B { s: 'r' });
    assert_eq!(*order.borrow(), vec!["a", "b"]);

    dispatcher.clear();
    dispatcher.emit(A { a: 1, b: 2 });
    assert_eq!(order.borrow().len(), 2);
}

#[test]
fn type_keys_are_stable_and_distinct() {
    assert_eq!(TypeKey::of::<A>(), TypeKey::of::<A>());
    assert_eq!(TypeKey::of::<B>(), TypeKey::of::<B>());
    assert_ne!(TypeKey::of::<A>(), TypeKey::of::<B>());
}

#[test]
fn external_envelope_keeps_state_after_dispatch() {
    let mut bus: Bus<(A,)> = Bus::new();
    bus.attach_back(|event: &mut Event<A>| {
        event.b = event.a + 1;
        event.consume();
    });

    let mut event = Event::new(A { a: 41, b: 0 });
    bus.dispatch_event(&mut event);

    assert!(event.is_consumed());
    let payload = event.into_inner();
    assert_eq!(payload.b, 42);
}
