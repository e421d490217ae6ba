//! Dense occupancy volume produced by carving.

use crate::error::CarveError;

/// Bit-packed R×R×R occupancy grid.
///
/// Storage axis order is (x, y, z) with z fastest; voxel (ix, iy, iz)
/// lives at linear index `(ix * R + iy) * R + iz`, identical to the
/// sample grid's enumeration order. Written once by [`Self::from_flags`]
/// and read-only afterward.
#[derive(Clone, Debug)]
pub struct OccupancyVolume {
    resolution: usize,
    words: Vec<u64>,
}

impl OccupancyVolume {
    /// Pack a flat occupancy sequence (grid enumeration order) into a
    /// volume. Fails when the sequence length is not R³.
    pub fn from_flags(flags: &[bool], resolution: usize) -> Result<Self, CarveError> {
        let expected = resolution * resolution * resolution;
        if flags.len() != expected {
            return Err(CarveError::ShapeMismatch {
                expected,
                actual: flags.len(),
            });
        }
        let mut words = vec![0u64; (expected + 63) / 64];
        for (i, &occupied) in flags.iter().enumerate() {
            if occupied {
                words[i >> 6] |= 1u64 << (i & 63);
            }
        }
        Ok(Self { resolution, words })
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total voxel count (R³).
    pub fn voxel_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }

    /// Linear index of voxel (ix, iy, iz).
    #[inline]
    pub fn linearize(&self, ix: usize, iy: usize, iz: usize) -> usize {
        debug_assert!(
            ix < self.resolution && iy < self.resolution && iz < self.resolution,
            "voxel index out of bounds"
        );
        (ix * self.resolution + iy) * self.resolution + iz
    }

    /// Occupancy of voxel (ix, iy, iz).
    #[inline]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> bool {
        let i = self.linearize(ix, iy, iz);
        (self.words[i >> 6] >> (i & 63)) & 1 != 0
    }

    /// Number of occupied voxels.
    pub fn occupied_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True when no voxel is occupied.
    pub fn is_unoccupied(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// True when every voxel is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.voxel_count()
    }
}
