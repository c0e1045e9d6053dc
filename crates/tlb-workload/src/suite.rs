//! Workload suite: builds the selected generators from a configuration and
//! collects one trace per workload.

use rand::Rng;
use serde::Serialize;

use crate::address::Address;
use crate::config::WorkloadConfig;
use crate::error::WorkloadResult;
use crate::generator::{AddressGenerator, WorkloadKind};

// ── Trace ───────────────────────────────────────────────────────────

/// Addresses produced by one workload in a single run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkloadTrace {
    pub workload: WorkloadKind,
    pub label: &'static str,
    pub addresses: Vec<Address>,
}

impl WorkloadTrace {
    pub fn new(workload: WorkloadKind, addresses: Vec<Address>) -> Self {
        Self {
            workload,
            label: workload.label(),
            addresses,
        }
    }

    /// `"<label>:"` followed by each address, space separated.
    pub fn render_line(&self) -> String {
        let mut line = format!("{}:", self.label);
        for address in &self.addresses {
            line.push(' ');
            line.push_str(&address.to_hex());
        }
        line
    }
}

// ── Suite ───────────────────────────────────────────────────────────

/// A set of independent generators run side by side.
pub struct WorkloadSuite {
    seed: u64,
    generators: Vec<Box<dyn AddressGenerator>>,
}

impl WorkloadSuite {
    /// Build generators for `kinds` (all kinds when empty), in canonical order.
    ///
    /// The configured seed is used when present; otherwise one is drawn from
    /// entropy and logged so the run can be replayed.
    pub fn from_config(config: &WorkloadConfig, kinds: &[WorkloadKind]) -> WorkloadResult<Self> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed: u64 = rand::thread_rng().gen();
                tracing::info!(seed, "no seed configured, drew one from entropy");
                seed
            }
        };

        let mut generators: Vec<Box<dyn AddressGenerator>> = Vec::new();
        for kind in WorkloadKind::ALL {
            if !kinds.is_empty() && !kinds.contains(&kind) {
                continue;
            }
            let generator: Box<dyn AddressGenerator> = match kind {
                WorkloadKind::MachineLearning => Box::new(config.machine_learning.build()?),
                WorkloadKind::AaaGames => Box::new(config.games.build(seed)?),
                WorkloadKind::StatelessMicroservice => Box::new(config.microservice.build()?),
            };
            generators.push(generator);
        }

        Ok(Self { seed, generators })
    }

    /// Seed handed to randomized generators.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn kinds(&self) -> Vec<WorkloadKind> {
        self.generators.iter().map(|g| g.kind()).collect()
    }

    /// Draw `count` addresses from every generator.
    ///
    /// Generators keep their state, so a second run continues each stream.
    pub fn run(&mut self, count: usize) -> Vec<WorkloadTrace> {
        tracing::info!(
            count,
            workloads = self.generators.len(),
            seed = self.seed,
            "generating workload traces"
        );
        self.generators
            .iter_mut()
            .map(|generator| WorkloadTrace::new(generator.kind(), generator.generate(count)))
            .collect()
    }
}
