//! Sequential segment walk (machine-learning workload).
//!
//! Streams linearly through the address space one segment at a time,
//! skipping the first four segments and wrapping back to the first
//! unreserved segment once the space is exhausted.

use crate::address::Address;
use crate::error::{WorkloadError, WorkloadResult};
use crate::generator::{AddressGenerator, WorkloadKind};

/// Number of leading segments that are never emitted.
pub const RESERVED_SEGMENTS: u64 = 4;

/// Linear segment walker over `[4 * segment_size, space_size)`.
#[derive(Clone, Debug)]
pub struct SequentialSegmentGenerator {
    space_size: u64,
    segment_size: u64,
    start: u64,
    current: u64,
}

impl SequentialSegmentGenerator {
    /// Create a walker over a `space_size`-byte space with `segment_size` steps.
    ///
    /// Fails if the segment size is zero or the space does not extend past
    /// the reserved segments.
    pub fn new(space_size: u64, segment_size: u64) -> WorkloadResult<Self> {
        if segment_size == 0 {
            return Err(WorkloadError::ZeroSegmentSize {
                workload: WorkloadKind::MachineLearning.as_str(),
            });
        }
        let start = segment_size.checked_mul(RESERVED_SEGMENTS).ok_or(
            WorkloadError::AddressOverflow {
                workload: WorkloadKind::MachineLearning.as_str(),
            },
        )?;
        if start >= space_size {
            return Err(WorkloadError::AddressSpaceTooSmall {
                space_size,
                reserved: format!("{} x {:#x}", RESERVED_SEGMENTS, segment_size),
            });
        }

        tracing::debug!(
            space_size,
            segment_size,
            steps_per_cycle = (space_size - start).div_ceil(segment_size),
            "sequential segment generator ready"
        );

        Ok(Self {
            space_size,
            segment_size,
            start,
            current: start,
        })
    }

    pub fn space_size(&self) -> u64 {
        self.space_size
    }

    pub fn segment_size(&self) -> u64 {
        self.segment_size
    }

    /// First address after the reserved region; also the wrap target.
    pub fn start_address(&self) -> Address {
        Address(self.start)
    }

    /// Number of addresses emitted before the walk wraps.
    pub fn steps_per_cycle(&self) -> u64 {
        (self.space_size - self.start).div_ceil(self.segment_size)
    }

    /// Every step point of one cycle, computed lazily.
    pub fn step_points(&self) -> impl Iterator<Item = Address> {
        let (space_size, segment_size) = (self.space_size, self.segment_size);
        std::iter::successors(Some(self.start), move |addr| addr.checked_add(segment_size))
            .take_while(move |addr| *addr < space_size)
            .map(Address)
    }
}

impl AddressGenerator for SequentialSegmentGenerator {
    fn next_address(&mut self) -> Address {
        // The reset happens before emitting, so the first address after an
        // overflow is already the start address.
        if self.current >= self.space_size {
            tracing::trace!(start = self.start, "sequential walk wrapped");
            self.current = self.start;
        }
        let address = Address(self.current);
        self.current = self.current.saturating_add(self.segment_size);
        address
    }

    fn kind(&self) -> WorkloadKind {
        WorkloadKind::MachineLearning
    }
}
