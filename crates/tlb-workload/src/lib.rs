#![deny(unsafe_code)]
//! Synthetic memory-address workloads for cache and TLB simulation.
//!
//! Three independent generators emulate common access patterns:
//!
//! - [`SequentialSegmentGenerator`]: a machine-learning style linear sweep
//!   over the address space in fixed segment steps, wrapping past a
//!   reserved region.
//! - [`ReuseWeightedAssetGenerator`]: a game-engine style mix of revisits
//!   to already loaded assets and occasional new loads.
//! - [`CyclicSegmentGenerator`]: a microservice style round-robin over
//!   service segments.
//!
//! Every generator implements [`AddressGenerator`]. Randomized generators
//! own a seeded PRNG, so a seed and a parameter set fully determine the
//! stream.
//!
//! ```
//! use tlb_workload::{AddressGenerator, SequentialSegmentGenerator};
//!
//! let mut ml = SequentialSegmentGenerator::new(1 << 32, 0x1000).unwrap();
//! assert_eq!(ml.generate_hex(2), ["0x00004000", "0x00005000"]);
//! ```

pub mod address;
pub mod config;
pub mod cyclic;
pub mod error;
pub mod generator;
pub mod reuse;
pub mod sequential;
pub mod suite;

pub use address::Address;
pub use crate::config::{GamesConfig, MachineLearningConfig, MicroserviceConfig, WorkloadConfig};
pub use cyclic::{cyclic_address, CyclicSegmentGenerator};
pub use error::{WorkloadError, WorkloadResult};
pub use generator::{AddressGenerator, WorkloadKind};
pub use reuse::ReuseWeightedAssetGenerator;
pub use sequential::SequentialSegmentGenerator;
pub use suite::{WorkloadSuite, WorkloadTrace};
