//! The pegging sub-game: exhaustive recursive minimax solver (SPEC_FULL.md §4.5).

const PAIR_POINTS: [u8; 4] = [0, 2, 6, 12];

/// The two roles in a hand. Pone always leads the pegging phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Dealer,
    Pone,
}

impl Player {
    fn index(self) -> usize {
        match self {
            Player::Dealer => 0,
            Player::Pone => 1,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Dealer => Player::Pone,
            Player::Pone => Player::Dealer,
        }
    }
}

fn cardvalue(rank: u8) -> u8 {
    rank.min(10)
}

fn unique_ranks_in_order(hand: &[u8]) -> Vec<u8> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for &r in hand {
        if seen.insert(r) {
            out.push(r);
        }
    }
    out
}

/// Longest suffix of `segment` (length >= 3) that sorts into consecutive ranks.
/// Returns 0 if no such suffix exists.
fn longest_run(segment: &[u8]) -> u8 {
    let n = segment.len();
    for k in (3..=n).rev() {
        let mut window = segment[n - k..].to_vec();
        window.sort_unstable();
        if window.windows(2).all(|w| w[1] - w[0] == 1) {
            return k as u8;
        }
    }
    0
}

/// State carried through recursion. Not part of the public tree: only the
/// eventual value/bestplay/children of each node survive into [`Node`].
///
/// `segment` holds only actual laid ranks since the last reset (no Go
/// sentinels) and `pending_go` tracks whether the previous action was an
/// unanswered Go, so a double-Go can be detected without the ambiguity of a
/// literal 0-rank sentinel sitting adjacent to rank 1 in a run-detection
/// window (see DESIGN.md).
struct State {
    owner: Player,
    hands: [Vec<u8>; 2],
    segment: Vec<u8>,
    pending_go: bool,
    total: u8,
    pairlength: u8,
    scores: [i32; 2],
}

/// Points scored by laying `rank`, plus the pairlength/runlength it leaves behind.
fn score_lay(rank: u8, state: &State, total_after: u8) -> (u8, u8, u8) {
    let pairlength = if state.segment.last() == Some(&rank) {
        state.pairlength + 1
    } else {
        0
    };
    let pair_points = PAIR_POINTS[pairlength.min(3) as usize];

    let mut extended = state.segment.clone();
    extended.push(rank);
    let runlength = longest_run(&extended);
    let run_points = runlength;

    let mut points = pair_points + run_points;
    if total_after == 15 {
        points += 2;
    }
    if total_after == 31 {
        points += 1;
    }
    (points, pairlength, runlength)
}

/// One node of the solved pegging tree: its minimax value, the play that
/// achieves it, and the children reached by each candidate play (rank 0
/// marks a Go).
#[derive(Clone, Debug)]
pub struct Node {
    pub owner: Player,
    pub value: i8,
    pub bestplay: u8,
    pub children: Vec<(u8, Node)>,
}

fn expand(state: State) -> Node {
    if state.hands[0].is_empty() && state.hands[1].is_empty() {
        let mut scores = state.scores;
        scores[state.owner.opponent().index()] += 1;
        let value = scores[0] - scores[1];
        debug_assert!((i8::MIN as i32..=i8::MAX as i32).contains(&value));
        return Node {
            owner: state.owner,
            value: value as i8,
            bestplay: 0,
            children: Vec::new(),
        };
    }

    let owner_idx = state.owner.index();
    let candidates: Vec<u8> = unique_ranks_in_order(&state.hands[owner_idx])
        .into_iter()
        .filter(|&r| state.total + cardvalue(r) <= 31)
        .collect();

    if candidates.is_empty() {
        let child = if state.pending_go {
            expand(State {
                owner: state.owner.opponent(),
                hands: state.hands.clone(),
                segment: Vec::new(),
                pending_go: false,
                total: 0,
                pairlength: 0,
                scores: state.scores,
            })
        } else {
            let mut scores = state.scores;
            scores[state.owner.opponent().index()] += 1;
            expand(State {
                owner: state.owner.opponent(),
                hands: state.hands.clone(),
                segment: state.segment.clone(),
                pending_go: true,
                total: state.total,
                pairlength: state.pairlength,
                scores,
            })
        };
        return Node {
            owner: state.owner,
            value: child.value,
            bestplay: 0,
            children: vec![(0, child)],
        };
    }

    let mut children = Vec::with_capacity(candidates.len());
    for rank in candidates {
        let total_after = state.total + cardvalue(rank);
        let (points, pairlength, _runlength) = score_lay(rank, &state, total_after);

        let mut hands = state.hands.clone();
        let pos = hands[owner_idx].iter().position(|&c| c == rank).unwrap();
        hands[owner_idx].remove(pos);

        let mut segment = state.segment.clone();
        segment.push(rank);

        let mut scores = state.scores;
        scores[owner_idx] += points as i32;

        let child = expand(State {
            owner: state.owner.opponent(),
            hands,
            segment,
            pending_go: false,
            total: total_after,
            pairlength,
            scores,
        });
        children.push((rank, child));
    }

    let maximize = state.owner == Player::Dealer;
    let mut best = 0usize;
    for i in 1..children.len() {
        let better = if maximize {
            children[i].1.value > children[best].1.value
        } else {
            children[i].1.value < children[best].1.value
        };
        if better {
            best = i;
        }
    }

    Node {
        owner: state.owner,
        value: children[best].1.value,
        bestplay: children[best].0,
        children,
    }
}

/// Solves the pegging sub-game for a dealer hand and a pone hand (ranks,
/// duplicates allowed). Pone always leads.
pub fn solve(dealer_hand: &[u8], pone_hand: &[u8]) -> Node {
    expand(State {
        owner: Player::Pone,
        hands: [dealer_hand.to_vec(), pone_hand.to_vec()],
        segment: Vec::new(),
        pending_go: false,
        total: 0,
        pairlength: 0,
        scores: [0, 0],
    })
}
