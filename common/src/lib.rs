#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod turn_index;

pub use turn_index::{DenseTable, SparseTable, TurnIndex};

use fnv::FnvBuildHasher;

pub type HashMap<K, V> = std::collections::HashMap<K, V, FnvBuildHasher>;
