//! 3D gradient noise kernel
//!
//! Improved Perlin noise: the query point is located in a unit lattice
//! cube, each of the 8 corners is assigned a pseudo-random gradient through
//! a double permutation lookup, and the corner contributions are blended
//! with quintic fade weights.
//!
//! Evaluation is a pure function of the coordinates and an immutable
//! [`PermutationTable`]. Non-finite coordinates are the caller's
//! responsibility: NaN propagates through the arithmetic, and a floor that
//! does not fit in an `i64` (including ±infinity) is treated as lattice
//! cell 0.

use super::permutation::PermutationTable;
use super::Real;

static CLASSIC_TABLE: PermutationTable = PermutationTable::CLASSIC;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Quintic fade curve: 6t⁵ - 15t⁴ + 10t³
///
/// Both the first and second derivatives vanish at t=0 and t=1, which keeps
/// the interpolated field C2-continuous across cell boundaries. Callers pass
/// fractional offsets in [0, 1); the domain is not enforced.
#[inline]
pub fn fade<T: Real>(t: T) -> T {
    let six = T::constant(6.0);
    let fifteen = T::constant(15.0);
    let ten = T::constant(10.0);
    t * t * t * (t * (t * six - fifteen) + ten)
}

/// Linear interpolation from `a` (t=0) to `b` (t=1)
#[inline]
pub fn lerp<T: Real>(t: T, a: T, b: T) -> T {
    a + t * (b - a)
}

/// Dot product of the offset (x, y, z) with the gradient selected by `hash`
///
/// Only the low 4 bits are used. The 16 cases cover the 12 cube-edge
/// directions; cases 12..=15 repeat 0, 9, 1 and 11.
#[inline]
pub fn grad<T: Real>(hash: u8, x: T, y: T, z: T) -> T {
    let h = hash & 15;

    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };

    let signed_u = if h & 1 == 0 { u } else { -u };
    let signed_v = if h & 2 == 0 { v } else { -v };

    signed_u + signed_v
}

/// Split a coordinate into its wrapped lattice index and fractional offset
#[inline]
fn lattice<T: Real>(coord: T) -> (usize, T) {
    let floor = coord.floor();
    let cell = floor.to_i64().unwrap_or(0) & 255;
    (cell as usize, coord - floor)
}

// ============================================================================
// EVALUATOR
// ============================================================================

/// Sample 3D noise at (x, y, z) using `table`
///
/// # Algorithm
/// 1. Find the unit cube containing the point (wrapped to 0..=255)
/// 2. Compute the relative position within the cube
/// 3. Apply fade curves to get interpolation weights
/// 4. Hash the 8 cube corners through two permutation lookups each
/// 5. Compute gradient dot products for each corner
/// 6. Interpolate along x, then y, then z
///
/// # Returns
/// Roughly [-1, 1]; zero at every integer lattice point. Periodic with
/// period 256 on each axis.
pub fn noise_with<T: Real>(table: &PermutationTable, x: T, y: T, z: T) -> T {
    let (unit_x, sub_x) = lattice(x);
    let (unit_y, sub_y) = lattice(y);
    let (unit_z, sub_z) = lattice(z);

    let u = fade(sub_x);
    let v = fade(sub_y);
    let w = fade(sub_z);

    // Indices stay below 512: a base entry is at most 255 and each lattice
    // index adds at most 255 + 1.
    let p = |index: usize| table.get(index) as usize;
    let a = p(unit_x) + unit_y;
    let aa = p(a) + unit_z;
    let ab = p(a + 1) + unit_z;
    let b = p(unit_x + 1) + unit_y;
    let ba = p(b) + unit_z;
    let bb = p(b + 1) + unit_z;

    let one = T::one();
    let far_x = sub_x - one;
    let far_y = sub_y - one;
    let far_z = sub_z - one;

    // Corner contributions, near z face
    let g_aa0 = grad(table.get(aa), sub_x, sub_y, sub_z);
    let g_ba0 = grad(table.get(ba), far_x, sub_y, sub_z);
    let g_ab0 = grad(table.get(ab), sub_x, far_y, sub_z);
    let g_bb0 = grad(table.get(bb), far_x, far_y, sub_z);

    // Far z face
    let g_aa1 = grad(table.get(aa + 1), sub_x, sub_y, far_z);
    let g_ba1 = grad(table.get(ba + 1), far_x, sub_y, far_z);
    let g_ab1 = grad(table.get(ab + 1), sub_x, far_y, far_z);
    let g_bb1 = grad(table.get(bb + 1), far_x, far_y, far_z);

    let x00 = lerp(u, g_aa0, g_ba0);
    let x10 = lerp(u, g_ab0, g_bb0);
    let x01 = lerp(u, g_aa1, g_ba1);
    let x11 = lerp(u, g_ab1, g_bb1);

    let y0 = lerp(v, x00, x10);
    let y1 = lerp(v, x01, x11);

    lerp(w, y0, y1)
}

/// Sample 3D noise with the classic permutation table
#[inline]
pub fn noise<T: Real>(x: T, y: T, z: T) -> T {
    noise_with(&CLASSIC_TABLE, x, y, z)
}

/// Sample noise along a line (y and z fixed at 0)
#[inline]
pub fn noise1<T: Real>(x: T) -> T {
    noise(x, T::zero(), T::zero())
}

/// Sample noise on a plane (z fixed at 0)
#[inline]
pub fn noise2<T: Real>(x: T, y: T) -> T {
    noise(x, y, T::zero())
}
