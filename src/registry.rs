//! # Process-wide type identity registry.
//!
//! Assigns a [`TypeKey`] — a small opaque integer — to each distinct event
//! payload type, lazily, the first time that type is referenced anywhere in
//! the process. The mapping lives for the process lifetime; keys are never
//! reused or invalidated.
//!
//! The compile-time-typed [`Bus`](crate::Bus) and [`EventQueue`](crate::EventQueue)
//! select their per-type storage in the type system and never consult this
//! registry. It exists for the runtime-keyed [`Dispatcher`](crate::Dispatcher),
//! which stores heterogeneous listener lists in one map and needs a stable
//! tag per payload type without a common base type.
//!
//! ## Guarantees
//! - Same type ⇒ same key, on every call, for the process lifetime.
//! - Distinct types ⇒ distinct keys.
//! - Allocation order is monotonic: a type first referenced later compares
//!   greater. Callers must rely on identity/equality only, never on concrete
//!   values.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// Lazily initialized map from `TypeId` to allocated key.
///
/// The next key is the map length at insert time, so allocation is
/// at-most-once per type and strictly monotonic under the lock.
static REGISTRY: OnceLock<Mutex<HashMap<TypeId, TypeKey>>> = OnceLock::new();

/// Opaque, process-wide-unique identity of an event payload type.
///
/// Obtained only through [`TypeKey::of`]; the underlying counter is never
/// exposed. Keys order by allocation time, but only identity and equality
/// are part of the contract.
///
/// ## Example
/// ```rust
/// use typebus::TypeKey;
///
/// struct Connected;
/// struct Disconnected;
///
/// assert_eq!(TypeKey::of::<Connected>(), TypeKey::of::<Connected>());
/// assert_ne!(TypeKey::of::<Connected>(), TypeKey::of::<Disconnected>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey(u32);

impl TypeKey {
    /// Returns the key bound to `T`, allocating it on the first call.
    ///
    /// Later calls for the same `T` are cache hits returning the identical
    /// key. Keys are per exact `'static` type: `of::<A>()` and `of::<&A>()`
    /// differ, so pass owned payload types.
    pub fn of<T: ?Sized + 'static>() -> TypeKey {
        let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
        let mut map = registry.lock();
        let next = TypeKey(map.len() as u32);
        *map.entry(TypeId::of::<T>()).or_insert_with(|| {
            log::debug!(
                "allocated type key {:?} for {}",
                next,
                std::any::type_name::<T>()
            );
            next
        })
    }
}
