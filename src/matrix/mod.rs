//! |allH| x |allH| cross-product of solved, flattened pegging trees
//! (SPEC_FULL.md §4.7). The H2 inner loop is pure and independent per cell,
//! so it is parallelized with `rayon`, matching the teacher's
//! data-parallel-lookup idiom (see DESIGN.md).

use crate::play;
use crate::strategy::{PlayHand, StrategyTable};
use crate::tree::{self, FlatTree};
use rayon::prelude::*;
use std::collections::HashMap;

/// Square matrix of solved trees, indexed by (dealer hand id, pone hand id).
/// A `None` cell means the pair is unreachable (the union of the two hands
/// would require more than four of some rank).
#[derive(Debug)]
pub struct Matrix {
    size: usize,
    cells: Vec<Option<FlatTree>>,
}

impl Matrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, dealer_id: usize, pone_id: usize) -> Option<&FlatTree> {
        self.cells[dealer_id * self.size + pone_id].as_ref()
    }
}

fn rank_counts(hand: &PlayHand) -> HashMap<u8, u8> {
    hand.counts()
}

/// True if laying both hands on the table would need more than four of some
/// rank — impossible given a 52-card deck, so the cell is left empty.
fn exceeds_deck(h1: &PlayHand, h2: &PlayHand) -> bool {
    let mut counts = rank_counts(h1);
    for (rank, count) in rank_counts(h2) {
        *counts.entry(rank).or_insert(0) += count;
    }
    counts.values().any(|&c| c > 4)
}

pub fn build(table: &StrategyTable) -> Matrix {
    let all_big_h = table.all_big_h();
    let n = all_big_h.len();
    let mut cells: Vec<Option<FlatTree>> = (0..n * n).map(|_| None).collect();

    for (i, h1) in all_big_h.iter().enumerate() {
        let row: Vec<Option<FlatTree>> = (0..n)
            .into_par_iter()
            .map(|j| {
                let h2 = &all_big_h[j];
                if exceeds_deck(h1, h2) {
                    log::debug!("skipping impossible pair ({i}, {j})");
                    None
                } else {
                    let dealer_ranks = h1.ranks();
                    let pone_ranks = h2.ranks();
                    let root = play::solve(&dealer_ranks, &pone_ranks);
                    Some(tree::flatten(&root))
                }
            })
            .collect();

        for (j, cell) in row.into_iter().enumerate() {
            cells[i * n + j] = cell;
        }
        log::info!("matrix row {}/{} built", i + 1, n);
    }

    Matrix { size: n, cells }
}
