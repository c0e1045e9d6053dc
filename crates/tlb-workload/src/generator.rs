//! The address generator seam shared by every workload.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::Address;

// ── Workload Kind ───────────────────────────────────────────────────

/// The workload archetype a generator emulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkloadKind {
    /// Streaming, sequential access (machine-learning training loops).
    MachineLearning,
    /// Asset reuse with occasional new loads (AAA games).
    AaaGames,
    /// Round-robin service segments (stateless microservices).
    StatelessMicroservice,
}

impl WorkloadKind {
    /// All kinds, in output order.
    pub const ALL: [WorkloadKind; 3] = [
        WorkloadKind::MachineLearning,
        WorkloadKind::AaaGames,
        WorkloadKind::StatelessMicroservice,
    ];

    /// Human-readable label used in text output.
    pub fn label(self) -> &'static str {
        match self {
            Self::MachineLearning => "Machine Learning Workload",
            Self::AaaGames => "AAA Games Workload",
            Self::StatelessMicroservice => "Stateless Microservice Workload",
        }
    }

    /// Stable machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MachineLearning => "machine-learning",
            Self::AaaGames => "aaa-games",
            Self::StatelessMicroservice => "stateless-microservice",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Address Generator Trait ─────────────────────────────────────────

/// A stateful source of synthetic addresses.
///
/// Implementors only provide the advance step; batch generation is built
/// on top of it and always calls `next_address` exactly `n` times, in order.
pub trait AddressGenerator: Send {
    /// Advance the generator and return the next address.
    fn next_address(&mut self) -> Address;

    /// The archetype this generator emulates.
    fn kind(&self) -> WorkloadKind;

    /// Produce the next `n` addresses.
    fn generate(&mut self, n: usize) -> Vec<Address> {
        (0..n).map(|_| self.next_address()).collect()
    }

    /// Produce the next `n` addresses in their `0x`-prefixed form.
    fn generate_hex(&mut self, n: usize) -> Vec<String> {
        self.generate(n).into_iter().map(Address::to_hex).collect()
    }
}
