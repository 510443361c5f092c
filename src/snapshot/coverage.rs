use crate::strategy::StrategyTable;

/// Deal-coverage statistics aggregated over every canonical-hand block
/// (SPEC_FULL.md §4.8/§6): `(ddeals, dmin, dmax, dcoverage, pdeals, pmin,
/// pmax, pcoverage)`. `coverage` is the fraction of blocks with a non-zero
/// tally; `min`/`max` are taken over each block's own maximum tally (which,
/// since the tally is written only on a block's first row, is just that
/// row's value).
pub fn coverage(table: &StrategyTable) -> (u64, u64, u64, f64, u64, u64, u64, f64) {
    let blocks = table.all_h().len();
    if blocks == 0 {
        return (0, 0, 0, 0.0, 0, 0, 0, 0.0);
    }

    let mut d_total = 0u64;
    let mut d_min = u64::MAX;
    let mut d_max = 0u64;
    let mut d_covered = 0usize;
    let mut p_total = 0u64;
    let mut p_min = u64::MAX;
    let mut p_max = 0u64;
    let mut p_covered = 0usize;

    for h in table.all_h() {
        let range = table.row_range(h).expect("every allh entry has a row range");
        let rows = &table.rows()[range];
        let d_tally = rows.iter().map(|r| r.dealt_dealer).max().unwrap_or(0);
        let p_tally = rows.iter().map(|r| r.dealt_pone).max().unwrap_or(0);

        d_total += d_tally;
        d_min = d_min.min(d_tally);
        d_max = d_max.max(d_tally);
        d_covered += usize::from(d_tally > 0);

        p_total += p_tally;
        p_min = p_min.min(p_tally);
        p_max = p_max.max(p_tally);
        p_covered += usize::from(p_tally > 0);
    }

    (
        d_total,
        d_min,
        d_max,
        d_covered as f64 / blocks as f64,
        p_total,
        p_min,
        p_max,
        p_covered as f64 / blocks as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::canonicalize;
    use crate::cards::{Card, Rank, Suit};
    use std::collections::HashMap;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank), suit)
    }

    #[test]
    fn fresh_table_has_zero_coverage() {
        let raw = [
            card(2, Suit::Club),
            card(3, Suit::Club),
            card(4, Suit::Diamond),
            card(5, Suit::Diamond),
            card(6, Suit::Heart),
            card(7, Suit::Spade),
        ];
        let (h, _) = canonicalize(&raw);
        let mut counts = HashMap::new();
        counts.insert(h, 1u64);
        let table = StrategyTable::build(&counts).unwrap();

        let (ddeals, dmin, dmax, dcoverage, pdeals, pmin, pmax, pcoverage) = coverage(&table);
        assert_eq!(ddeals, 0);
        assert_eq!(dmin, 0);
        assert_eq!(dmax, 0);
        assert_eq!(dcoverage, 0.0);
        assert_eq!(pdeals, 0);
        assert_eq!(pmin, 0);
        assert_eq!(pmax, 0);
        assert_eq!(pcoverage, 0.0);
    }

    #[test]
    fn one_dealt_block_out_of_two_gives_half_coverage() {
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
        let mut counts = HashMap::new();
        counts.insert(ha.clone(), 1u64);
        counts.insert(hb, 1u64);
        let mut table = StrategyTable::build(&counts).unwrap();

        let range = table.row_range(&ha).unwrap();
        table.rows_mut()[range.start].dealt_dealer = 5;

        let (ddeals, _dmin, dmax, dcoverage, ..) = coverage(&table);
        assert_eq!(ddeals, 5);
        assert_eq!(dmax, 5);
        assert_eq!(dcoverage, 0.5);
    }
}
