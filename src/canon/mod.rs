pub mod discard;
pub mod hand;
pub mod permutation;

pub use discard::{enumerate_discards, playhand_ranks, CanonicalDiscard};
pub use hand::{canonicalize, CanonicalHand};
pub use permutation::SuitPermutation;
