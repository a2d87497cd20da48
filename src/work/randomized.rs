use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::plan::{RangeBounds, plan_range};

use super::{Job, WorkSource};

/// Draws a fresh range plan for each of a fixed number of passes.
///
/// Owns its generator; sources are never shared between workers.
pub struct RandomizedSource {
    bounds: RangeBounds,
    passes: u64,
    next_pass: u64,
    rng: StdRng,
}

impl RandomizedSource {
    #[must_use]
    pub const fn new(bounds: RangeBounds, passes: u64, rng: StdRng) -> Self {
        Self {
            bounds,
            passes,
            next_pass: 0,
            rng,
        }
    }

    /// Seeds the generator from OS entropy.
    #[must_use]
    pub fn from_entropy(bounds: RangeBounds, passes: u64) -> Self {
        Self::new(bounds, passes, StdRng::from_entropy())
    }
}

#[async_trait]
impl WorkSource for RandomizedSource {
    async fn next_job(&mut self) -> Option<Job> {
        if self.next_pass >= self.passes {
            return None;
        }
        let pass = self.next_pass;
        self.next_pass = self.next_pass.saturating_add(1);
        Some(Job {
            pass,
            plan: plan_range(&self.bounds, &mut self.rng),
        })
    }
}
