use crate::canon::CanonicalDiscard;

/// The four-rank multiset left after a discard (SPEC_FULL.md §3's play hand `H`),
/// stored as a sorted array — equivalent to the rank→count map the spec describes,
/// since a sorted 4-tuple already uniquely identifies the multiset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayHand([u8; 4]);

impl PlayHand {
    pub fn new(mut ranks: [u8; 4]) -> Self {
        ranks.sort_unstable();
        Self(ranks)
    }

    pub fn ranks(&self) -> [u8; 4] {
        self.0
    }

    /// rank -> count, for invariant checks (sum to 4, no count above 4).
    pub fn counts(&self) -> std::collections::HashMap<u8, u8> {
        let mut counts = std::collections::HashMap::new();
        for &rank in &self.0 {
            *counts.entry(rank).or_insert(0u8) += 1;
        }
        counts
    }
}

/// One row of the strategy table: a single (parent hand, discard) pair.
#[derive(Clone, Debug)]
pub struct StrategyRow {
    pub discard: CanonicalDiscard,
    pub playhand: PlayHand,
    pub p_deal: f64,
    pub dealt_dealer: u64,
    pub dealt_pone: u64,
    pub regret_dealer: f64,
    pub regret_pone: f64,
    pub profile_dealer: f64,
    pub profile_pone: f64,
    pub p_play_dealer: f64,
    pub p_play_pone: f64,
}
