use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use itertools::Itertools;

/// The standard 52-card deck, provided as a fixed external collaborator:
/// every consumer of `Deck::cards` sees the same 52 cards in the same order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Deck {
        Deck {
            cards: Rank::all()
                .into_iter()
                .flat_map(|rank| Suit::all().into_iter().map(move |suit| Card::new(rank, suit)))
                .collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All C(52,6) = 20,358,520 six-card combinations, as raw hands.
    pub fn deal_six(&self) -> impl Iterator<Item = [Card; 6]> + '_ {
        self.cards.iter().copied().combinations(6).map(|v| {
            v.try_into()
                .expect("combinations(6) always yields 6 elements")
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_fifty_two_unique_cards() {
        let deck = Deck::new();
        assert_eq!(deck.cards().len(), 52);
        let unique: std::collections::HashSet<u8> =
            deck.cards().iter().map(|&c| u8::from(c)).collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    #[ignore = "exhaustive C(52,6) sweep, run explicitly with --ignored"]
    fn deal_six_count_is_c_52_6() {
        let deck = Deck::new();
        assert_eq!(deck.deal_six().count(), 20_358_520);
    }
}
