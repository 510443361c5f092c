use std::fmt::{Display, Formatter, Result};

/// A Cribbage rank, 1 (ace, low) through 13 (king).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    pub fn new(n: u8) -> Self {
        assert!((Self::MIN..=Self::MAX).contains(&n), "rank out of range: {n}");
        Self(n)
    }

    pub fn n(&self) -> u8 {
        self.0
    }

    /// Pegging value: face rank for ace..ten, 10 for jack/queen/king.
    pub fn value(&self) -> u8 {
        self.0.min(10)
    }

    pub fn all() -> [Rank; 13] {
        std::array::from_fn(|i| Rank::new(i as u8 + 1))
    }
}

impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Rank::new(n)
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> Self {
        r.0
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match self.0 {
                1 => "A",
                2 => "2",
                3 => "3",
                4 => "4",
                5 => "5",
                6 => "6",
                7 => "7",
                8 => "8",
                9 => "9",
                10 => "T",
                11 => "J",
                12 => "Q",
                13 => "K",
                _ => unreachable!(),
            }
        )
    }
}
