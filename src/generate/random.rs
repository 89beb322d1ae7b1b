//! Random 3-character candidate generation.

use std::collections::HashSet;

use rand::Rng;

use super::Charset;
use crate::error::{DomainSweepError, Result};

const LEN: usize = 3;

/// Draws distinct random 3-character alphanumeric strings. Bases already
/// drawn in this run are skipped, so a batch never rechecks a candidate.
#[derive(Debug, Default)]
pub struct RandomGenerator {
    seen: HashSet<String>,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce exactly `count` distinct candidates.
    ///
    /// `count` may not exceed the 36^3 space; rejecting larger requests is
    /// what guarantees termination.
    pub fn generate(&mut self, count: usize) -> Result<Vec<String>> {
        let charset = Charset::Alphanumeric;
        let space = charset.total_combinations(LEN);
        let remaining = space - self.seen.len() as u64;
        if count as u64 > remaining {
            return Err(DomainSweepError::validation(format!(
                "Cannot draw {} distinct 3-character candidates ({} remain out of {})",
                count, remaining, space
            )));
        }

        let chars = charset.chars();
        let mut rng = rand::thread_rng();
        let mut batch = Vec::with_capacity(count);

        while batch.len() < count {
            let candidate: String = (0..LEN)
                .map(|_| chars[rng.gen_range(0..chars.len())])
                .collect();
            if self.seen.insert(candidate.clone()) {
                batch.push(candidate);
            }
        }

        Ok(batch)
    }

    /// Number of distinct candidates drawn so far.
    pub fn drawn(&self) -> usize {
        self.seen.len()
    }
}
