//! The edge structure of the permutohedron.  Two permutations are adjacent iff one can be turned
//! into the other by swapping the values at two neighbouring positions.

use std::collections::VecDeque;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{EdgeId, Permutation, Symbol, VertIdx, VertVec};

/// Lookup from the values of a [`Permutation`] to its index in the vertex list.  Built once
/// after generation.
#[derive(Debug, Clone, Default)]
pub struct PermutationIndex {
    map: IndexMap<Vec<Symbol>, VertIdx>,
}

impl PermutationIndex {
    pub fn new(verts: &VertVec<Permutation>) -> Self {
        let map = verts
            .iter_enumerated()
            .map(|(idx, perm)| (perm.values().to_vec(), idx))
            .collect();
        Self { map }
    }

    pub fn get(&self, values: &[Symbol]) -> Option<VertIdx> {
        self.map.get(values).copied()
    }

    /// Index of the neighbour of `perm` reached by swapping positions `pos` and `pos + 1`.
    ///
    /// # Panics
    ///
    /// If that neighbour isn't in the index.  Swapping two positions of a permutation always gives
    /// another permutation of the same set, so this only happens if the index was built from a
    /// different vertex list.
    fn neighbour(&self, perm: &Permutation, pos: usize) -> VertIdx {
        let swapped = perm.swapped(pos);
        self.get(swapped.values())
            .expect("Every adjacent transposition should lead to a generated permutation")
    }
}

/// Every `pos` such that swapping `pos` and `pos + 1` is an adjacent transposition
fn swap_positions(verts: &VertVec<Permutation>) -> std::ops::Range<usize> {
    let n = verts.iter().next().map_or(0, Permutation::len);
    0..n.saturating_sub(1)
}

/// Every edge of the permutohedron, each listed once as `(i, j)` with `i < j`.  Edges are found
/// from their lower-indexed end, in order of `i` then of the swapped position.
pub fn edges(verts: &VertVec<Permutation>, index: &PermutationIndex) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    for (i, perm) in verts.iter_enumerated() {
        for pos in swap_positions(verts) {
            let j = index.neighbour(perm, pos);
            if j > i {
                edges.push(EdgeId::new(i, j));
            }
        }
    }
    edges
}

/// For each vertex, its neighbours ordered by which position pair was swapped to reach them.
pub fn neighbours(verts: &VertVec<Permutation>, index: &PermutationIndex) -> VertVec<Vec<VertIdx>> {
    verts
        .iter()
        .map(|perm| {
            swap_positions(verts)
                .map(|pos| index.neighbour(perm, pos))
                .collect_vec()
        })
        .collect()
}

/// Breadth-first search from `start`, grouping every vertex by its graph distance from `start`.
/// `layers[d]` lists the vertices `d` adjacent swaps away, in the order they were reached.
pub fn bfs_layers(neighbours: &VertVec<Vec<VertIdx>>, start: VertIdx) -> Vec<Vec<VertIdx>> {
    let mut visited = neighbours.iter().map(|_| false).collect::<VertVec<bool>>();
    visited[start] = true;

    let mut layers = Vec::new();
    let mut frontier = vec![start];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &v in &frontier {
            for &n in &neighbours[v] {
                if !visited[n] {
                    visited[n] = true;
                    next.push(n);
                }
            }
        }
        layers.push(frontier);
        frontier = next;
    }
    layers
}

/// Minimum number of adjacent swaps needed to turn vertex `a` into vertex `b`.
pub fn distance(neighbours: &VertVec<Vec<VertIdx>>, a: VertIdx, b: VertIdx) -> usize {
    bfs_layers(neighbours, a)
        .iter()
        .position(|layer| layer.contains(&b))
        .expect("The permutohedron's graph should be connected")
}

/// One shortest sequence of vertices leading from `a` to `b`, including both ends.  Each step is
/// a single adjacent swap, so the path has `distance(a, b) + 1` vertices.
pub fn shortest_path(
    neighbours: &VertVec<Vec<VertIdx>>,
    a: VertIdx,
    b: VertIdx,
) -> Vec<VertIdx> {
    let mut parents = neighbours
        .iter()
        .map(|_| None)
        .collect::<VertVec<Option<VertIdx>>>();
    let mut queue = VecDeque::from([a]);
    while let Some(v) = queue.pop_front() {
        if v == b {
            break;
        }
        for &n in &neighbours[v] {
            if n != a && parents[n].is_none() {
                parents[n] = Some(v);
                queue.push_back(n);
            }
        }
    }

    let mut path = vec![b];
    let mut current = b;
    while current != a {
        current = parents[current].expect("The permutohedron's graph should be connected");
        path.push(current);
    }
    path.reverse();
    path
}
