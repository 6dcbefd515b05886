//! The 2-dimensional faces of the permutohedron.
//!
//! Fixing two of the adjacent transpositions `s_p` and `s_q`, the vertices reachable from `v` by
//! applying only those two swaps form one face.  Alternating `s_p` and `s_q` walks around that
//! face's boundary in order.  If the two swaps commute (`|p - q| > 1`) the face is a square,
//! otherwise it's a hexagon.

use itertools::Itertools;
use three_d::{InnerSpace, Vec3, Zero};

use crate::{Permutohedron, VertIdx, VertVec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Vertices in boundary order, starting from the lowest index
    verts: Vec<VertIdx>,
}

impl Face {
    fn new(verts: Vec<VertIdx>) -> Self {
        Self {
            verts: normalize_face(&verts),
        }
    }

    pub fn verts(&self) -> &[VertIdx] {
        &self.verts
    }

    pub fn order(&self) -> usize {
        self.verts.len()
    }

    pub fn contains_edge(&self, v1: VertIdx, v2: VertIdx) -> bool {
        self.verts
            .iter()
            .circular_tuple_windows()
            .any(|(&a, &b)| (a, b) == (v1, v2) || (a, b) == (v2, v1))
    }

    pub fn centroid(&self, polytope: &Permutohedron) -> Vec3 {
        let mut total = Vec3::zero();
        for v in &self.verts {
            total += polytope.coordinate_at(*v);
        }
        total / self.verts.len() as f32
    }

    pub fn normal(&self, polytope: &Permutohedron) -> Vec3 {
        let positions = self.vert_positions(polytope);
        let centroid = self.centroid(polytope);
        (positions[0] - centroid)
            .cross(positions[1] - centroid)
            .normalize()
    }

    pub fn vert_positions(&self, polytope: &Permutohedron) -> Vec<Vec3> {
        self.verts
            .iter()
            .map(|idx| polytope.coordinate_at(*idx))
            .collect_vec()
    }
}

/// Every face of the permutohedron whose vertex adjacency is given by `neighbours`, where
/// `neighbours[v][pos]` is the vertex reached from `v` by swapping positions `pos` and `pos + 1`.
pub fn faces(neighbours: &VertVec<Vec<VertIdx>>) -> Vec<Face> {
    let num_swaps = neighbours.iter().next().map_or(0, Vec::len);

    let mut faces = Vec::new();
    for (p, q) in (0..num_swaps).tuple_combinations() {
        let mut covered = neighbours.iter().map(|_| false).collect::<VertVec<bool>>();
        for start in neighbours.indices() {
            if covered[start] {
                continue;
            }
            // Walk round the face, alternating between the two swaps
            let mut verts = Vec::new();
            let mut current = start;
            loop {
                verts.push(current);
                covered[current] = true;
                let pos = if verts.len() % 2 == 1 { p } else { q };
                current = neighbours[current][pos];
                if current == start {
                    break;
                }
            }
            faces.push(Face::new(verts));
        }
    }
    faces
}

fn normalize_face(verts: &[VertIdx]) -> Vec<VertIdx> {
    let min_vert = verts.iter().position_min().unwrap_or(0);
    let mut verts = verts.to_vec();
    verts.rotate_left(min_vert);
    verts
}
