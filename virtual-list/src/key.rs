#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = BTreeMap<K, usize>;

/// Bound for item keys.
///
/// With `feature = "std"` keys are hashed; without it they are ordered.
#[cfg(feature = "std")]
pub trait ItemKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ItemKey for K {}

/// Bound for item keys.
///
/// With `feature = "std"` keys are hashed; without it they are ordered.
#[cfg(not(feature = "std"))]
pub trait ItemKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ItemKey for K {}
