use super::row::{PlayHand, StrategyRow};
use crate::canon::{enumerate_discards, playhand_ranks, CanonicalHand};
use crate::error::Error;
use std::collections::HashMap;
use std::ops::Range;

/// The full strategy table and its auxiliary indices (SPEC_FULL.md §3/§4.4).
///
/// Row order is deterministic: canonical hands are visited in ascending `Ord`
/// order rather than the raw `hCounts` map's insertion order, since counting
/// runs in parallel (see [`crate::enumerate::count_hands`]) and has no
/// meaningful single insertion order to preserve. This is just as stable a
/// basis for `hRows`'s contiguous ranges, and is recorded in DESIGN.md.
#[derive(Debug)]
pub struct StrategyTable {
    rows: Vec<StrategyRow>,
    h_rows: HashMap<CanonicalHand, Range<usize>>,
    big_h_rows: HashMap<PlayHand, Vec<usize>>,
    all_h: Vec<CanonicalHand>,
    all_big_h: Vec<PlayHand>,
    h_id: HashMap<CanonicalHand, usize>,
    big_h_id: HashMap<PlayHand, usize>,
    h_probs_dealer: HashMap<PlayHand, f64>,
    h_probs_pone: HashMap<PlayHand, f64>,
}

impl StrategyTable {
    pub fn build(counts: &HashMap<CanonicalHand, u64>) -> Result<Self, Error> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(Error::InvariantViolation(
                "hand counts must not be empty".into(),
            ));
        }

        let mut ordered: Vec<(&CanonicalHand, &u64)> = counts.iter().collect();
        ordered.sort_by_key(|(h, _)| (*h).clone());

        let mut rows = Vec::new();
        let mut h_rows = HashMap::new();
        let mut big_h_rows: HashMap<PlayHand, Vec<usize>> = HashMap::new();
        let mut all_h = Vec::new();
        let mut all_big_h = Vec::new();
        let mut h_id = HashMap::new();
        let mut big_h_id = HashMap::new();

        for (h, &count) in ordered {
            let p_deal = count as f64 / total as f64;
            let discards = enumerate_discards(h);
            if discards.is_empty() {
                return Err(Error::InvariantViolation(format!(
                    "canonical hand {h:?} has no discards"
                )));
            }
            let profile = 1.0 / discards.len() as f64;
            let start = rows.len();

            for d in discards {
                let ranks = playhand_ranks(h, &d);
                let play_hand = PlayHand::new(ranks);
                let row_index = rows.len();

                big_h_id.entry(play_hand).or_insert_with(|| {
                    all_big_h.push(play_hand);
                    all_big_h.len() - 1
                });
                big_h_rows.entry(play_hand).or_default().push(row_index);

                rows.push(StrategyRow {
                    discard: d,
                    playhand: play_hand,
                    p_deal,
                    dealt_dealer: 0,
                    dealt_pone: 0,
                    regret_dealer: 0.0,
                    regret_pone: 0.0,
                    profile_dealer: profile,
                    profile_pone: profile,
                    p_play_dealer: p_deal * profile,
                    p_play_pone: p_deal * profile,
                });
            }

            h_rows.insert(h.clone(), start..rows.len());
            h_id.insert(h.clone(), all_h.len());
            all_h.push(h.clone());
        }

        let mut table = Self {
            rows,
            h_rows,
            big_h_rows,
            all_h,
            all_big_h,
            h_id,
            big_h_id,
            h_probs_dealer: HashMap::new(),
            h_probs_pone: HashMap::new(),
        };
        table.recompute_h_probs();
        Ok(table)
    }

    /// Recomputes `Hprobs_dealer`/`Hprobs_pone` from the current `p_play_*`
    /// columns. Exposed so the (external) training collaborator can refresh
    /// these after mutating regret/profile columns.
    pub fn recompute_h_probs(&mut self) {
        self.h_probs_dealer.clear();
        self.h_probs_pone.clear();
        for big_h in &self.all_big_h {
            let rows = &self.big_h_rows[big_h];
            let dealer: f64 = rows.iter().map(|&i| self.rows[i].p_play_dealer).sum();
            let pone: f64 = rows.iter().map(|&i| self.rows[i].p_play_pone).sum();
            self.h_probs_dealer.insert(*big_h, dealer);
            self.h_probs_pone.insert(*big_h, pone);
        }
    }

    pub fn rows(&self) -> &[StrategyRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [StrategyRow] {
        &mut self.rows
    }

    pub fn row_range(&self, h: &CanonicalHand) -> Option<Range<usize>> {
        self.h_rows.get(h).cloned()
    }

    pub fn rows_for_play_hand(&self, big_h: &PlayHand) -> &[usize] {
        self.big_h_rows
            .get(big_h)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_h(&self) -> &[CanonicalHand] {
        &self.all_h
    }

    pub fn all_big_h(&self) -> &[PlayHand] {
        &self.all_big_h
    }

    pub fn h_id(&self, h: &CanonicalHand) -> Option<usize> {
        self.h_id.get(h).copied()
    }

    pub fn big_h_id(&self, big_h: &PlayHand) -> Option<usize> {
        self.big_h_id.get(big_h).copied()
    }

    pub fn h_prob_dealer(&self, big_h: &PlayHand) -> f64 {
        self.h_probs_dealer.get(big_h).copied().unwrap_or(0.0)
    }

    pub fn h_prob_pone(&self, big_h: &PlayHand) -> f64 {
        self.h_probs_pone.get(big_h).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::canonicalize;
    use crate::cards::{Card, Rank, Suit};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank), suit)
    }

    fn sample_counts() -> HashMap<CanonicalHand, u64> {
        let mut counts = HashMap::new();
        let raw_a = [
            card(2, Suit::Club),
            card(3, Suit::Club),
            card(4, Suit::Diamond),
            card(5, Suit::Diamond),
            card(6, Suit::Heart),
            card(7, Suit::Spade),
        ];
        let raw_b = [
            card(1, Suit::Club),
            card(1, Suit::Diamond),
            card(1, Suit::Heart),
            card(1, Suit::Spade),
            card(9, Suit::Club),
            card(10, Suit::Club),
        ];
        let (ha, _) = canonicalize(&raw_a);
        let (hb, _) = canonicalize(&raw_b);
        counts.insert(ha, 12);
        counts.insert(hb, 4);
        counts
    }

    #[test]
    fn deal_probabilities_sum_to_one() {
        let counts = sample_counts();
        let table = StrategyTable::build(&counts).unwrap();
        let total: f64 = table
            .all_h()
            .iter()
            .map(|h| {
                let range = table.row_range(h).unwrap();
                table.rows()[range].iter().map(|r| r.p_deal).next().unwrap()
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn profile_sums_to_one_per_block() {
        let counts = sample_counts();
        let table = StrategyTable::build(&counts).unwrap();
        for h in table.all_h() {
            let range = table.row_range(h).unwrap();
            let sum: f64 = table.rows()[range].iter().map(|r| r.profile_dealer).sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn row_ranges_are_contiguous_and_partition_rows() {
        let counts = sample_counts();
        let table = StrategyTable::build(&counts).unwrap();
        let mut covered = 0;
        for h in table.all_h() {
            let range = table.row_range(h).unwrap();
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, table.rows().len());
    }
}
