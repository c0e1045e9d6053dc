//! Round-robin service segments (stateless-microservice workload).
//!
//! Each call moves to the next service segment. The offset inside the
//! segment depends on how many addresses the generator has produced so
//! far, so the stream is a function of emission history rather than of the
//! call index alone. That history is tracked as an explicit running count
//! and fed to [`cyclic_address`].

use crate::address::Address;
use crate::error::{check_probability, WorkloadError, WorkloadResult};
use crate::generator::{AddressGenerator, WorkloadKind};

/// Address of the next service access.
///
/// `running_count` is the number of addresses generated before this one,
/// pre-generated services included, and is never below `service_count`.
/// The result saturates at `u64::MAX` rather than wrapping into a lower
/// segment; only extremely long runs can reach that.
pub fn cyclic_address(
    segment: u64,
    segment_size: u64,
    running_count: u64,
    service_count: u64,
) -> Address {
    let offset = running_count
        .saturating_sub(service_count)
        .saturating_add(segment);
    Address(segment.saturating_mul(segment_size).saturating_add(offset))
}

/// Round-robin generator over `service_count` segments.
#[derive(Clone, Debug)]
pub struct CyclicSegmentGenerator {
    service_count: u64,
    dependency_probability: f64,
    segment_size: u64,
    current_segment: u64,
    running_count: u64,
    services: Vec<Address>,
}

impl CyclicSegmentGenerator {
    /// Create a generator and pre-generate one address per service.
    ///
    /// `dependency_probability` is validated and kept for callers but does
    /// not influence emission.
    pub fn new(
        service_count: usize,
        dependency_probability: f64,
        segment_size: u64,
    ) -> WorkloadResult<Self> {
        let dependency_probability =
            check_probability("dependency_probability", dependency_probability)?;
        if service_count == 0 {
            return Err(WorkloadError::ZeroServiceCount);
        }
        if segment_size == 0 {
            return Err(WorkloadError::ZeroSegmentSize {
                workload: WorkloadKind::StatelessMicroservice.as_str(),
            });
        }
        let service_count = service_count as u64;
        // Highest first-cycle address: segment C-1 at offset (C-2) + (C-1).
        let last = service_count - 1;
        let fits = last
            .checked_mul(segment_size)
            .and_then(|base| base.checked_add(last.saturating_mul(2)))
            .is_some();
        if !fits {
            return Err(WorkloadError::AddressOverflow {
                workload: WorkloadKind::StatelessMicroservice.as_str(),
            });
        }

        // All services live in segment 0, one byte apart.
        let services = (0..service_count).map(Address).collect();

        tracing::debug!(
            service_count,
            dependency_probability,
            segment_size,
            "cyclic segment generator ready"
        );

        Ok(Self {
            service_count,
            dependency_probability,
            segment_size,
            current_segment: 0,
            running_count: service_count,
            services,
        })
    }

    pub fn service_count(&self) -> u64 {
        self.service_count
    }

    pub fn dependency_probability(&self) -> f64 {
        self.dependency_probability
    }

    pub fn segment_size(&self) -> u64 {
        self.segment_size
    }

    /// Segment of the most recent emission (0 before the first call).
    pub fn current_segment(&self) -> u64 {
        self.current_segment
    }

    /// Addresses generated so far, pre-generated services included.
    pub fn running_count(&self) -> u64 {
        self.running_count
    }

    /// The service addresses generated at construction.
    pub fn services(&self) -> &[Address] {
        &self.services
    }
}

impl AddressGenerator for CyclicSegmentGenerator {
    fn next_address(&mut self) -> Address {
        self.current_segment = (self.current_segment + 1) % self.service_count;
        let address = cyclic_address(
            self.current_segment,
            self.segment_size,
            self.running_count,
            self.service_count,
        );
        // Wrapping only matters after ~2^64 emissions.
        self.running_count = self.running_count.wrapping_add(1);
        address
    }

    fn kind(&self) -> WorkloadKind {
        WorkloadKind::StatelessMicroservice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_lands_in_segment_one() {
        let mut gen = CyclicSegmentGenerator::new(10, 0.3, 0x800).unwrap();
        assert_eq!(gen.generate_hex(1), vec!["0x00000801"]);
        assert_eq!(gen.current_segment(), 1);
        assert_eq!(gen.running_count(), 11);
    }

    #[test]
    fn offset_tracks_emission_history() {
        let mut gen = CyclicSegmentGenerator::new(10, 0.3, 0x800).unwrap();
        assert_eq!(
            gen.generate(3),
            vec![Address(0x801), Address(0x1003), Address(0x1805)]
        );
    }

    #[test]
    fn segment_returns_to_zero_every_service_count_calls() {
        let mut gen = CyclicSegmentGenerator::new(4, 0.0, 0x100).unwrap();
        let mut segments = Vec::new();
        for _ in 0..12 {
            gen.next_address();
            segments.push(gen.current_segment());
        }
        assert_eq!(segments, vec![1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn single_service_stays_in_segment_zero() {
        let mut gen = CyclicSegmentGenerator::new(1, 0.5, 0x800).unwrap();
        assert_eq!(
            gen.generate(3),
            vec![Address(0), Address(1), Address(2)]
        );
        assert_eq!(gen.current_segment(), 0);
    }

    #[test]
    fn services_are_pregenerated_in_segment_zero() {
        let gen = CyclicSegmentGenerator::new(10, 0.3, 0x800).unwrap();
        let expected: Vec<Address> = (0..10).map(Address).collect();
        assert_eq!(gen.services(), expected.as_slice());
        assert_eq!(gen.running_count(), 10);
    }

    #[test]
    fn dependency_probability_does_not_change_output() {
        let mut low = CyclicSegmentGenerator::new(6, 0.0, 0x400).unwrap();
        let mut high = CyclicSegmentGenerator::new(6, 1.0, 0x400).unwrap();
        assert_eq!(low.generate(40), high.generate(40));
        assert_eq!(high.dependency_probability(), 1.0);
    }

    #[test]
    fn formula_is_pure() {
        assert_eq!(cyclic_address(1, 0x800, 10, 10), Address(0x801));
        assert_eq!(cyclic_address(0, 0x800, 19, 10), Address(9));
        assert_eq!(cyclic_address(3, 0x10, 4, 4), Address(0x33));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            CyclicSegmentGenerator::new(0, 0.3, 0x800),
            Err(WorkloadError::ZeroServiceCount)
        ));
        assert!(matches!(
            CyclicSegmentGenerator::new(10, 0.3, 0),
            Err(WorkloadError::ZeroSegmentSize { .. })
        ));
        assert!(matches!(
            CyclicSegmentGenerator::new(10, -0.1, 0x800),
            Err(WorkloadError::ProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            CyclicSegmentGenerator::new(3, 0.3, u64::MAX),
            Err(WorkloadError::AddressOverflow { .. })
        ));
    }

    #[test]
    fn rejects_segments_whose_offsets_overflow() {
        // The base of the last segment fits, but adding the offset does not.
        assert!(matches!(
            CyclicSegmentGenerator::new(2, 0.0, u64::MAX),
            Err(WorkloadError::AddressOverflow { .. })
        ));
        assert!(matches!(
            CyclicSegmentGenerator::new(3, 0.0, u64::MAX / 2),
            Err(WorkloadError::AddressOverflow { .. })
        ));
    }

    #[test]
    fn largest_accepted_segment_never_wraps_into_segment_zero() {
        // 1 * S + 2 * 1 == u64::MAX
        let segment_size = u64::MAX - 2;
        let mut gen = CyclicSegmentGenerator::new(2, 0.0, segment_size).unwrap();
        let first = gen.next_address();
        assert_eq!(gen.current_segment(), 1);
        assert_eq!(first, Address(segment_size + 1));
        assert!(first.value() >= segment_size);
    }

    #[test]
    fn formula_saturates_instead_of_wrapping() {
        assert_eq!(cyclic_address(1, u64::MAX, 5, 2), Address(u64::MAX));
        assert_eq!(cyclic_address(2, u64::MAX, 2, 3), Address(u64::MAX));
    }
}
