use super::hand::CanonicalHand;
use std::collections::BTreeSet;

/// A canonical two-card discard: a 4-tuple of rank-buckets (aligned to the
/// parent `CanonicalHand`'s suit positions) with exactly two ranks total.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDiscard([Vec<u8>; 4]);

impl CanonicalDiscard {
    pub fn buckets(&self) -> &[Vec<u8>; 4] {
        &self.0
    }

    pub fn total_ranks(&self) -> usize {
        self.0.iter().map(|b| b.len()).sum()
    }

    fn two_suit(p1: usize, c1: u8, p2: usize, c2: u8) -> Self {
        let mut buckets: [Vec<u8>; 4] = Default::default();
        buckets[p1].push(c1);
        buckets[p2].push(c2);
        Self(buckets)
    }

    fn one_suit(p: usize, a: u8, b: u8) -> Self {
        let mut buckets: [Vec<u8>; 4] = Default::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        buckets[p] = vec![lo, hi];
        Self(buckets)
    }
}

/// Enumerate the distinct canonical discards of a canonical hand (SPEC_FULL.md
/// §4.3), modulo the hand's residual suit symmetry.
///
/// Two suits with identical rank content are fully interchangeable: picking
/// card `c1` from one and `c2` from the other is the same canonical discard
/// regardless of which of the (possibly more than two) equal-content suits
/// physically supplies which card, and regardless of which of the two is
/// labeled "first". We collapse both symmetries by (a) always writing into the
/// first two suit positions that share that content, and (b) ordering the pair
/// `c1 <= c2` so swapping which position holds which card never produces a
/// second, spuriously-distinct discard. This generalizes the spec's pairwise
/// "remap to the first matching suit" rule to equivalence classes of any size
/// (see DESIGN.md).
pub fn enumerate_discards(h: &CanonicalHand) -> Vec<CanonicalDiscard> {
    let buckets = h.buckets();
    let nonempty: Vec<usize> = (0..4).filter(|&i| !buckets[i].is_empty()).collect();
    let mut found = BTreeSet::new();

    for (a, &i1) in nonempty.iter().enumerate() {
        for &i2 in &nonempty[a + 1..] {
            let s1 = &buckets[i1];
            let s2 = &buckets[i2];
            if s1 == s2 {
                let class: Vec<usize> = (0..4).filter(|&j| &buckets[j] == s1).collect();
                let (p1, p2) = (class[0], class[1]);
                for &c1 in s1 {
                    for &c2 in s1 {
                        if c1 <= c2 {
                            found.insert(CanonicalDiscard::two_suit(p1, c1, p2, c2));
                        }
                    }
                }
            } else {
                let p1 = (0..4).find(|&j| &buckets[j] == s1).unwrap();
                let p2 = (0..4).find(|&j| &buckets[j] == s2).unwrap();
                for &c1 in s1 {
                    for &c2 in s2 {
                        found.insert(CanonicalDiscard::two_suit(p1, c1, p2, c2));
                    }
                }
            }
        }
    }

    let mut seen_contents: Vec<&Vec<u8>> = Vec::new();
    for (i, bucket) in buckets.iter().enumerate() {
        if bucket.len() >= 2 && !seen_contents.iter().any(|&c| c == bucket) {
            seen_contents.push(bucket);
            for x in 0..bucket.len() {
                for y in (x + 1)..bucket.len() {
                    found.insert(CanonicalDiscard::one_suit(i, bucket[x], bucket[y]));
                }
            }
        }
    }

    found.into_iter().collect()
}

/// The sorted 4-rank multiset left in hand after removing `d` from `h`
/// (SPEC_FULL.md §4.4's `playhand` computation).
pub fn playhand_ranks(h: &CanonicalHand, d: &CanonicalDiscard) -> [u8; 4] {
    let mut remaining = Vec::with_capacity(4);
    for i in 0..4 {
        let mut bucket = h.bucket(i).to_vec();
        for &taken in &d.buckets()[i] {
            let pos = bucket
                .iter()
                .position(|&r| r == taken)
                .expect("discard must be a sub-multiset of its parent hand");
            bucket.remove(pos);
        }
        remaining.extend(bucket);
    }
    remaining.sort_unstable();
    remaining
        .try_into()
        .expect("4-card hand after discarding 2 from a 6-card hand")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::canon::hand::canonicalize;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank), suit)
    }

    #[test]
    fn every_discard_has_two_ranks_and_is_subset() {
        let raw = [
            card(2, Suit::Club),
            card(3, Suit::Club),
            card(4, Suit::Diamond),
            card(5, Suit::Diamond),
            card(6, Suit::Heart),
            card(7, Suit::Spade),
        ];
        let (h, _) = canonicalize(&raw);
        for d in enumerate_discards(&h) {
            assert_eq!(d.total_ranks(), 2);
            for i in 0..4 {
                for &rank in &d.buckets()[i] {
                    assert!(h.bucket(i).contains(&rank));
                }
            }
        }
    }

    #[test]
    fn identical_content_suits_collapse_swap_duplicates() {
        // Clubs and Diamonds both hold {3, 5}: two raw hands differing only by
        // which physical suit holds the 3 vs the 5 must yield the same discards.
        let raw = [
            card(3, Suit::Club),
            card(5, Suit::Club),
            card(3, Suit::Diamond),
            card(5, Suit::Diamond),
            card(9, Suit::Heart),
            card(11, Suit::Spade),
        ];
        let (h, _) = canonicalize(&raw);
        let discards = enumerate_discards(&h);
        // {3,5} cross-suit picks: (3,3) (3,5) (5,5) -> 3 distinct canonical
        // discards from this symmetric pair, not 4 (no separately counted swap).
        let cross_pair_count = discards
            .iter()
            .filter(|d| d.total_ranks() == 2 && d.buckets().iter().filter(|b| !b.is_empty()).count() == 2)
            .count();
        assert_eq!(cross_pair_count, 3);
    }

    #[test]
    fn playhand_is_four_ranks_ascending() {
        let raw = [
            card(2, Suit::Club),
            card(3, Suit::Club),
            card(4, Suit::Diamond),
            card(5, Suit::Diamond),
            card(6, Suit::Heart),
            card(7, Suit::Spade),
        ];
        let (h, _) = canonicalize(&raw);
        for d in enumerate_discards(&h) {
            let play = playhand_ranks(&h, &d);
            assert_eq!(play.len(), 4);
            assert!(play.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
