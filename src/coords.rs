//! Projection of permutations of `{1, 2, 3, 4}` into 3D space.

use std::collections::HashMap;

use three_d::{vec3, Vec3};

use crate::{utils::OrderedVec3, Error, Permutation, Symbol, VertIdx, VertVec};

/// Sum of every symbol in [`SYMBOLS`](crate::SYMBOLS).  Since every permutation contains each
/// symbol once, the last value of `(a, b, c, d)` is always `SYMBOL_SUM - a - b - c`, so the
/// projection can ignore it without losing information.
pub const SYMBOL_SUM: Symbol = 10;

/// Subtracted from each pairwise sum so that the centroid of all vertices lands on the origin
/// (every pairwise sum averages `SYMBOL_SUM / 2` across the vertices).
const OFFSET: Symbol = SYMBOL_SUM / 2;

/// Map the permutation `(a, b, c, d)` to `(a + b - 5, a + c - 5, b + c - 5)`.
///
/// # Panics
///
/// If `perm` doesn't have exactly 4 values.
pub fn coordinate(perm: &Permutation) -> Vec3 {
    let (a, b, c) = match perm.values() {
        &[a, b, c, _] => (a, b, c),
        values => panic!("Expected a permutation of 4 symbols, found {values:?}"),
    };
    vec3(
        (a + b - OFFSET) as f32,
        (a + c - OFFSET) as f32,
        (b + c - OFFSET) as f32,
    )
}

pub fn coordinates(verts: &VertVec<Permutation>) -> VertVec<Vec3> {
    verts.iter().map(coordinate).collect()
}

/// Check that no two vertices share a coordinate.
pub fn check_injective(coords: &VertVec<Vec3>) -> Result<(), Error> {
    let mut seen = HashMap::<OrderedVec3, VertIdx>::new();
    for (idx, &pos) in coords.iter_enumerated() {
        if let Some(&existing) = seen.get(&OrderedVec3::from(pos)) {
            return Err(Error::CoordinateCollision {
                a: existing,
                b: idx,
            });
        }
        seen.insert(OrderedVec3::from(pos), idx);
    }
    Ok(())
}
