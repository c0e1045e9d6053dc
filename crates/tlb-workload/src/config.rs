//! Workload configuration.
//!
//! Defaults: a 4 GiB space walked in 4 KiB steps, 20 game assets over
//! three segment tiers, and ten microservices in 2 KiB segments. Values
//! can be overridden from a file and from `TLB_WORKLOAD_*` environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cyclic::CyclicSegmentGenerator;
use crate::error::WorkloadResult;
use crate::reuse::ReuseWeightedAssetGenerator;
use crate::sequential::SequentialSegmentGenerator;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "TLB_WORKLOAD";

/// Top-level workload configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Seed for randomized workloads; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Addresses generated per workload
    #[serde(default = "default_count")]
    pub count: usize,

    /// Machine-learning workload
    #[serde(default)]
    pub machine_learning: MachineLearningConfig,

    /// AAA-games workload
    #[serde(default)]
    pub games: GamesConfig,

    /// Stateless-microservice workload
    #[serde(default)]
    pub microservice: MicroserviceConfig,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: default_count(),
            machine_learning: MachineLearningConfig::default(),
            games: GamesConfig::default(),
            microservice: MicroserviceConfig::default(),
        }
    }
}

/// Sequential segment walk parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineLearningConfig {
    /// Size of the virtual address space in bytes
    #[serde(default = "default_space_size")]
    pub space_size: u64,

    /// Step between consecutive addresses
    #[serde(default = "default_ml_segment_size")]
    pub segment_size: u64,
}

impl Default for MachineLearningConfig {
    fn default() -> Self {
        Self {
            space_size: default_space_size(),
            segment_size: default_ml_segment_size(),
        }
    }
}

impl MachineLearningConfig {
    pub fn build(&self) -> WorkloadResult<SequentialSegmentGenerator> {
        SequentialSegmentGenerator::new(self.space_size, self.segment_size)
    }
}

/// Reuse-weighted asset parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Assets minted up front
    #[serde(default = "default_asset_count")]
    pub asset_count: usize,

    /// Chance of revisiting an already emitted address
    #[serde(default = "default_reuse_probability")]
    pub reuse_probability: f64,

    /// Segment tiers to mint from
    #[serde(default = "default_segment_sizes")]
    pub segment_sizes: Vec<u64>,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            asset_count: default_asset_count(),
            reuse_probability: default_reuse_probability(),
            segment_sizes: default_segment_sizes(),
        }
    }
}

impl GamesConfig {
    pub fn build(&self, seed: u64) -> WorkloadResult<ReuseWeightedAssetGenerator> {
        ReuseWeightedAssetGenerator::new(
            self.asset_count,
            self.reuse_probability,
            self.segment_sizes.clone(),
            seed,
        )
    }
}

/// Round-robin service parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroserviceConfig {
    /// Number of services (and segments cycled through)
    #[serde(default = "default_service_count")]
    pub service_count: usize,

    /// Accepted for compatibility; does not affect generated addresses
    #[serde(default = "default_dependency_probability")]
    pub dependency_probability: f64,

    /// Size of each service segment
    #[serde(default = "default_microservice_segment_size")]
    pub segment_size: u64,
}

impl Default for MicroserviceConfig {
    fn default() -> Self {
        Self {
            service_count: default_service_count(),
            dependency_probability: default_dependency_probability(),
            segment_size: default_microservice_segment_size(),
        }
    }
}

impl MicroserviceConfig {
    pub fn build(&self) -> WorkloadResult<CyclicSegmentGenerator> {
        CyclicSegmentGenerator::new(
            self.service_count,
            self.dependency_probability,
            self.segment_size,
        )
    }
}

// Default value helpers
fn default_count() -> usize {
    5
}

fn default_space_size() -> u64 {
    1 << 32
}

fn default_ml_segment_size() -> u64 {
    0x1000
}

fn default_asset_count() -> usize {
    20
}

fn default_reuse_probability() -> f64 {
    0.2
}

fn default_segment_sizes() -> Vec<u64> {
    vec![0x800, 0x1000, 0x2000]
}

fn default_service_count() -> usize {
    10
}

fn default_dependency_probability() -> f64 {
    0.3
}

fn default_microservice_segment_size() -> u64 {
    0x800
}

impl WorkloadConfig {
    /// Load configuration: defaults, then `path` if given, then environment.
    ///
    /// Nested keys use `__`, e.g. `TLB_WORKLOAD_GAMES__REUSE_PROBABILITY`.
    pub fn load(path: Option<&Path>) -> WorkloadResult<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("games.segment_sizes")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "workload configuration loaded");
        Ok(config)
    }
}
