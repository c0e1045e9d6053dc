//! Reuse-weighted asset access (AAA-games workload).
//!
//! Most accesses revisit an address that was already emitted; the rest mint
//! a new asset address from a randomly chosen segment tier. The stream is
//! path-dependent but fully determined by the seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::address::Address;
use crate::error::{check_probability, WorkloadError, WorkloadResult};
use crate::generator::{AddressGenerator, WorkloadKind};

/// Locality-of-reference generator over variable-size segment tiers.
#[derive(Clone, Debug)]
pub struct ReuseWeightedAssetGenerator {
    reuse_probability: f64,
    segment_sizes: Vec<u64>,
    /// Assets minted at construction. Emission never reads this.
    assets: Vec<Address>,
    /// Every newly minted address, in emission order.
    history: Vec<Address>,
    rng: StdRng,
}

impl ReuseWeightedAssetGenerator {
    /// Create a generator and mint its `asset_count` catalog assets.
    pub fn new(
        asset_count: usize,
        reuse_probability: f64,
        segment_sizes: Vec<u64>,
        seed: u64,
    ) -> WorkloadResult<Self> {
        let reuse_probability = check_probability("reuse_probability", reuse_probability)?;
        if segment_sizes.is_empty() {
            return Err(WorkloadError::EmptySegmentSizes);
        }
        if segment_sizes.contains(&0) {
            return Err(WorkloadError::ZeroSegmentSize {
                workload: WorkloadKind::AaaGames.as_str(),
            });
        }
        // Highest reachable address is index * size + (size - 1).
        let fits = segment_sizes.iter().enumerate().all(|(index, &size)| {
            (index as u64)
                .checked_mul(size)
                .and_then(|base| base.checked_add(size - 1))
                .is_some()
        });
        if !fits {
            return Err(WorkloadError::AddressOverflow {
                workload: WorkloadKind::AaaGames.as_str(),
            });
        }

        let mut generator = Self {
            reuse_probability,
            segment_sizes,
            assets: Vec::with_capacity(asset_count),
            history: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..asset_count {
            let asset = generator.mint();
            generator.assets.push(asset);
        }

        tracing::debug!(
            asset_count,
            reuse_probability,
            tiers = generator.segment_sizes.len(),
            seed,
            "reuse-weighted asset generator ready"
        );

        Ok(generator)
    }

    pub fn reuse_probability(&self) -> f64 {
        self.reuse_probability
    }

    pub fn segment_sizes(&self) -> &[u64] {
        &self.segment_sizes
    }

    /// The asset catalog minted at construction.
    pub fn assets(&self) -> &[Address] {
        &self.assets
    }

    /// Newly minted addresses emitted so far; the reuse pool.
    pub fn history(&self) -> &[Address] {
        &self.history
    }

    /// Draw a segment tier and an offset inside it.
    ///
    /// The base is the tier index times that tier's size, so tiers of
    /// different sizes may overlap.
    fn mint(&mut self) -> Address {
        let index = self.rng.gen_range(0..self.segment_sizes.len());
        let size = self.segment_sizes[index];
        let offset = self.rng.gen_range(0..size);
        Address(index as u64 * size + offset)
    }
}

impl AddressGenerator for ReuseWeightedAssetGenerator {
    fn next_address(&mut self) -> Address {
        let roll: f64 = self.rng.gen();
        if roll < self.reuse_probability && !self.history.is_empty() {
            let pick = self.rng.gen_range(0..self.history.len());
            return self.history[pick];
        }
        let address = self.mint();
        self.history.push(address);
        address
    }

    fn kind(&self) -> WorkloadKind {
        WorkloadKind::AaaGames
    }
}
