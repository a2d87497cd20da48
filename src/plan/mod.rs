//! Range selection: which file to hit and which bytes of it to ask for.
use rand::Rng;
use serde::Deserialize;

use crate::args::PositiveU64;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Size of one file-size unit. Target files are published in 10 MiB steps.
pub const FILE_UNIT_BYTES: u64 = 10 * MIB;
/// Target paths name files by their size in MiB.
const FILE_UNIT_MIB: u64 = 10;

/// Granularity of the configured block-size bounds.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub enum BlockUnit {
    /// Same unit as the file size, so block and file bounds compare directly.
    #[default]
    #[serde(rename = "10mib", alias = "10MiB")]
    TenMib,
    #[serde(rename = "mib", alias = "MiB")]
    Mib,
    #[serde(rename = "kib", alias = "KiB")]
    Kib,
}

impl BlockUnit {
    #[must_use]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::TenMib => FILE_UNIT_BYTES,
            Self::Mib => MIB,
            Self::Kib => KIB,
        }
    }
}

/// Inclusive `min..=max` range of size units with `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRange {
    min: u64,
    max: u64,
}

impl UnitRange {
    /// Returns `None` when `min > max`.
    #[must_use]
    pub fn new(min: PositiveU64, max: PositiveU64) -> Option<Self> {
        let (min, max) = (min.get(), max.get());
        (min <= max).then_some(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> u64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u64 {
        self.max
    }

    /// Single-value range holding only `max`.
    #[must_use]
    pub const fn upper(self) -> Self {
        Self {
            min: self.max,
            max: self.max,
        }
    }

    /// Number of distinct unit values in the range.
    #[must_use]
    pub const fn count(self) -> u64 {
        self.max.saturating_sub(self.min).saturating_add(1)
    }

    pub fn iter(self) -> impl Iterator<Item = u64> {
        self.min..=self.max
    }

    /// Uniform draw over `min..=max`; a single-value range always yields it.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u64 {
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
    pub file_units: UnitRange,
    pub block_units: UnitRange,
    pub block_unit: BlockUnit,
}

/// Byte window of one request.
///
/// Always satisfies `block_size_bytes <= file_size_bytes` and
/// `end_offset == start_offset + block_size_bytes - 1 < file_size_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePlan {
    pub file_size_units: u64,
    pub file_size_bytes: u64,
    pub block_size_bytes: u64,
    pub start_offset: u64,
    pub end_offset: u64,
}

impl RangePlan {
    /// Plan covering the entire file, sent without a `Range` header.
    #[must_use]
    pub const fn whole_file(file_size_units: u64) -> Self {
        let file_size_bytes = file_size_units.saturating_mul(FILE_UNIT_BYTES);
        Self {
            file_size_units,
            file_size_bytes,
            block_size_bytes: file_size_bytes,
            start_offset: 0,
            end_offset: file_size_bytes.saturating_sub(1),
        }
    }

    #[must_use]
    pub const fn file_size_mib(&self) -> u64 {
        self.file_size_units.saturating_mul(FILE_UNIT_MIB)
    }

    #[must_use]
    pub const fn is_whole_file(&self) -> bool {
        self.block_size_bytes == self.file_size_bytes
    }

    /// `Range` header value, or `None` for whole-file requests.
    #[must_use]
    pub fn range_header(&self) -> Option<String> {
        if self.is_whole_file() {
            return None;
        }
        Some(format!("bytes={}-{}", self.start_offset, self.end_offset))
    }
}

/// Draws a file size within `bounds` and plans a range inside it.
pub fn plan_range<R: Rng + ?Sized>(bounds: &RangeBounds, rng: &mut R) -> RangePlan {
    let file_size_units = bounds.file_units.sample(rng);
    plan_for_file(file_size_units, bounds, rng)
}

/// Plans a random block inside a file of `file_size_units`.
///
/// Blocks larger than the file are clamped to the file, which turns the
/// request into a whole-file GET.
pub fn plan_for_file<R: Rng + ?Sized>(
    file_size_units: u64,
    bounds: &RangeBounds,
    rng: &mut R,
) -> RangePlan {
    let file_size_bytes = file_size_units.saturating_mul(FILE_UNIT_BYTES);
    let block_units = bounds.block_units.sample(rng);
    let block_size_bytes = block_units
        .saturating_mul(bounds.block_unit.bytes())
        .min(file_size_bytes);
    let max_start = file_size_bytes.saturating_sub(block_size_bytes);
    let start_offset = rng.gen_range(0..=max_start);
    let end_offset = start_offset
        .saturating_add(block_size_bytes)
        .saturating_sub(1);

    RangePlan {
        file_size_units,
        file_size_bytes,
        block_size_bytes,
        start_offset,
        end_offset,
    }
}
