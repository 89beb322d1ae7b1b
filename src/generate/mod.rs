//! Candidate generation - the strings fed into availability checks.

mod random;
mod range;

pub use random::RandomGenerator;
pub use range::RangeGenerator;

/// Character set for candidate generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Only lowercase letters (a-z)
    #[default]
    Letters,
    /// Letters and digits (a-z, 0-9)
    Alphanumeric,
}

impl Charset {
    pub fn chars(&self) -> &'static [char] {
        match self {
            Charset::Letters => &[
                'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
                'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
            ],
            Charset::Alphanumeric => &[
                'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
                'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
                '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
            ],
        }
    }

    pub fn total_combinations(&self, length: usize) -> u64 {
        (self.chars().len() as u64).pow(length as u32)
    }
}
