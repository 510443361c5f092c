use super::permutation::SuitPermutation;
use crate::cards::{Card, Suit};

/// A suit-symmetry-reduced six-card hand: a 4-tuple of rank-tuples, one per suit
/// bucket, ordered by bucket length descending (ties broken lexicographically by
/// rank content). Two raw hands related by any permutation of suit labels produce
/// the same `CanonicalHand`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalHand([Vec<u8>; 4]);

impl CanonicalHand {
    /// The nine valid shapes for a 6-card canonical hand's bucket-length multiset.
    pub const SHAPES: [[u8; 4]; 9] = [
        [6, 0, 0, 0],
        [5, 1, 0, 0],
        [4, 2, 0, 0],
        [4, 1, 1, 0],
        [3, 3, 0, 0],
        [3, 2, 1, 0],
        [3, 1, 1, 1],
        [2, 2, 2, 0],
        [2, 2, 1, 1],
    ];

    pub fn buckets(&self) -> &[Vec<u8>; 4] {
        &self.0
    }

    pub fn bucket(&self, i: usize) -> &[u8] {
        &self.0[i]
    }

    pub fn shape(&self) -> [u8; 4] {
        std::array::from_fn(|i| self.0[i].len() as u8)
    }

    pub fn is_valid_shape(&self) -> bool {
        let mut shape = self.shape();
        shape.sort_by_key(|&n| std::cmp::Reverse(n));
        Self::SHAPES.contains(&shape) && shape.iter().map(|&n| n as usize).sum::<usize>() == 6
    }
}

/// Canonicalize a raw six-card hand into its suit-symmetry class, returning the
/// class and the suit permutation needed to reconstruct the original hand.
///
/// Procedure (SPEC_FULL.md §4.1): bucket ranks by suit, sort each bucket
/// ascending, sort buckets lexicographically by content (breaking length ties),
/// then *stably* re-sort buckets by length descending so same-length buckets
/// keep their lexicographic order.
pub fn canonicalize(raw: &[Card; 6]) -> (CanonicalHand, SuitPermutation) {
    let mut buckets: [Vec<u8>; 4] = Default::default();
    for card in raw {
        buckets[u8::from(card.suit()) as usize].push(card.rank().n());
    }
    for bucket in &mut buckets {
        bucket.sort_unstable();
    }

    let mut order: [usize; 4] = [0, 1, 2, 3];
    order.sort_by(|&a, &b| buckets[a].cmp(&buckets[b]));
    order.sort_by_key(|&i| std::cmp::Reverse(buckets[i].len()));

    let canonical = CanonicalHand(std::array::from_fn(|i| buckets[order[i]].clone()));
    let permutation = SuitPermutation::from_order(order);
    (canonical, permutation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use itertools::Itertools;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank), suit)
    }

    #[test]
    fn canonical_shape_is_always_valid() {
        let raw = [
            card(2, Suit::Club),
            card(2, Suit::Diamond),
            card(5, Suit::Club),
            card(9, Suit::Heart),
            card(11, Suit::Heart),
            card(13, Suit::Spade),
        ];
        let (h, _) = canonicalize(&raw);
        assert!(h.is_valid_shape());
    }

    #[test]
    fn invariant_under_suit_relabeling() {
        let raw = [
            card(2, Suit::Club),
            card(3, Suit::Club),
            card(4, Suit::Diamond),
            card(5, Suit::Diamond),
            card(6, Suit::Heart),
            card(7, Suit::Spade),
        ];
        let (base, _) = canonicalize(&raw);

        for perm in Suit::all().into_iter().permutations(4) {
            let relabel = |s: Suit| perm[u8::from(s) as usize];
            let relabeled: [Card; 6] =
                std::array::from_fn(|i| Card::new(raw[i].rank(), relabel(raw[i].suit())));
            let (canon, _) = canonicalize(&relabeled);
            assert_eq!(base, canon, "suit relabeling must not change canonical form");
        }
    }

    #[test]
    fn random_hands_always_canonicalize_to_valid_shape() {
        use crate::cards::Deck;
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let deck = Deck::new();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut cards = deck.cards().to_vec();
            cards.shuffle(&mut rng);
            let raw: [Card; 6] = cards[..6].try_into().unwrap();
            let (h, _) = canonicalize(&raw);
            assert!(h.is_valid_shape());
        }
    }

    #[test]
    fn shape_lengths_sum_to_six() {
        let raw = [
            card(1, Suit::Club),
            card(1, Suit::Diamond),
            card(1, Suit::Heart),
            card(1, Suit::Spade),
            card(2, Suit::Club),
            card(3, Suit::Club),
        ];
        let (h, _) = canonicalize(&raw);
        let total: usize = h.buckets().iter().map(|b| b.len()).sum();
        assert_eq!(total, 6);
    }
}
