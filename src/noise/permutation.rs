//! Permutation table for gradient hashing
//!
//! The table holds a permutation of 0..=255 stored twice in a row, so the
//! evaluator can add up to two lattice offsets to a looked-up value and
//! index again without wrapping.

use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, Result};

/// Number of distinct entries in a permutation
pub const PERIOD: usize = 256;

/// Length of the doubled table
pub const TABLE_LEN: usize = PERIOD * 2;

// Ken Perlin's reference permutation. Changing any entry changes every
// value produced with the classic table.
const PERLIN_BASE: [u8; PERIOD] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

const fn doubled(base: [u8; PERIOD]) -> [u8; TABLE_LEN] {
    let mut table = [0u8; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = base[i % PERIOD];
        i += 1;
    }
    table
}

/// A doubled permutation of 0..=255
///
/// Invariants, upheld by every constructor:
/// - entries `0..256` contain each byte value exactly once
/// - `table[i + 256] == table[i]` for `i` in `0..256`
///
/// The table is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    perm: [u8; TABLE_LEN],
}

impl PermutationTable {
    /// Ken Perlin's reference table
    ///
    /// Noise evaluated with this table is bit-exact with the historical
    /// reference output.
    pub const CLASSIC: Self = Self {
        perm: doubled(PERLIN_BASE),
    };

    /// Returns a copy of the classic table
    pub fn classic() -> Self {
        Self::CLASSIC
    }

    /// Generate a table by shuffling 0..=255 with a seeded ChaCha8 stream
    ///
    /// The same seed always produces the same table.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut base = [0u8; PERIOD];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }
        base.shuffle(&mut rng);

        debug!("generated permutation table from seed {}", seed);
        Self {
            perm: doubled(base),
        }
    }

    /// Build a table from a caller-supplied permutation of 0..=255
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if `values` does not hold exactly 256
    /// entries or if any byte value is repeated (and therefore another is
    /// missing).
    pub fn from_permutation(values: &[u8]) -> Result<Self> {
        if values.len() != PERIOD {
            return Err(NoiseError::InvalidPermutation(format!(
                "expected {} entries (got {})",
                PERIOD,
                values.len()
            )));
        }

        let mut seen = [false; PERIOD];
        for (index, &value) in values.iter().enumerate() {
            if seen[value as usize] {
                return Err(NoiseError::InvalidPermutation(format!(
                    "value {} repeated at index {}",
                    value, index
                )));
            }
            seen[value as usize] = true;
        }

        let mut base = [0u8; PERIOD];
        base.copy_from_slice(values);

        debug!("accepted caller-supplied permutation table");
        Ok(Self {
            perm: doubled(base),
        })
    }

    /// Look up entry `index` of the doubled table
    ///
    /// # Panics
    ///
    /// Panics if `index >= 512`.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.perm[index]
    }

    /// The full doubled table
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }

    /// The underlying permutation (first 256 entries)
    #[inline]
    pub fn base(&self) -> &[u8] {
        &self.perm[..PERIOD]
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::CLASSIC
    }
}
