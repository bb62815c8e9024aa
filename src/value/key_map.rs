//! Map aliases used throughout the crate.
//!
//! Variable contexts and map values keep insertion order; this module provides
//! the aliases (currently backed by [`indexmap::IndexMap`]) so the rest of the
//! crate does not depend on the map implementation directly.

use indexmap::IndexMap;

use super::{Key, Value};

/// Alias to reduce coupling with map implementation
pub type KeyMap<V> = IndexMap<String, V>;

/// Contents of a map [`Value`].
pub type ValueMap = IndexMap<Key, Value>;

/// Named variables an evaluator resolves expressions against.
pub type Bindings = KeyMap<Value>;
