//! Containers used throughout the solver.
mod keyed_vec;

pub use keyed_vec::*;

pub type HashMap<K, V> = std::collections::HashMap<K, V, fnv::FnvBuildHasher>;
pub type HashSet<K> = std::collections::HashSet<K, fnv::FnvBuildHasher>;
