//! Strategy database and play-phase game-tree solver for two-player Cribbage
//! CFR training: suit-symmetry canonicalization, hand/discard enumeration,
//! exhaustive pegging-phase minimax, and the tree-flattening/matrix-assembly
//! pipeline that compacts it into a cache-friendly lookup structure.

pub mod canon;
pub mod cards;
pub mod enumerate;
pub mod error;
pub mod matrix;
pub mod play;
pub mod snapshot;
pub mod strategy;
pub mod tree;

pub use error::Error;
