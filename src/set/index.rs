//! Type-level indices for slot selection.
//!
//! [`Here`] and [`There`] encode *where* a payload type sits in a storage
//! chain, so that `QCons<A, QCons<B, QNil>>` can implement
//! `QueueSlot<A, Here>` and `QueueSlot<B, There<Here>>` without the two
//! impls overlapping. Callers never name these; the compiler infers the
//! index from the payload type, which is exactly how membership in a
//! declared type set is checked at compile time.

use std::marker::PhantomData;

/// The payload lives in the head slot of the chain.
pub struct Here {
    _priv: (),
}

/// The payload lives somewhere in the tail of the chain.
pub struct There<Index> {
    _marker: PhantomData<Index>,
}
