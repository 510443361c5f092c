use crate::canon::{canonicalize, CanonicalHand};
use crate::cards::{Card, Deck};
use rayon::iter::ParallelBridge;
use rayon::prelude::*;
use std::collections::HashMap;

/// Counts occurrences of each canonical hand across a stream of raw six-card hands
/// (SPEC_FULL.md §4.2). Parallelized per hand with `rayon`'s `par_bridge`, since the
/// canonical key is a rank-tuple structure rather than a packed integer the teacher's
/// bitmask iterator could fold over directly.
pub fn count_hands<I>(hands: I) -> HashMap<CanonicalHand, u64>
where
    I: Iterator<Item = [Card; 6]> + Send,
{
    hands
        .par_bridge()
        .fold(HashMap::new, |mut acc, raw| {
            let (h, _) = canonicalize(&raw);
            *acc.entry(h).or_insert(0u64) += 1;
            acc
        })
        .reduce(HashMap::new, |mut a, b| {
            for (h, count) in b {
                *a.entry(h).or_insert(0) += count;
            }
            a
        })
}

/// All C(52,6) canonical hand counts over the standard deck.
pub fn count_all(deck: &Deck) -> HashMap<CanonicalHand, u64> {
    count_hands(deck.deal_six())
}
