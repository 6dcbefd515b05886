use itertools::Itertools;
use ordered_float::OrderedFloat;
use three_d::{InnerSpace, Vec3, Zero};

use crate::{
    adjacency::{self, PermutationIndex},
    coords,
    faces::{self, Face},
    permutation, Error, Permutation, Symbol, SYMBOLS,
};

/// The permutohedron of order 4, with every piece of derived data co-indexed by [`VertIdx`].
///
/// A `Permutohedron` is built once and never modified afterwards, so collaborators (renderers,
/// tooltips etc.) can hold shared references to it for as long as they like.
#[derive(Debug, Clone)]
pub struct Permutohedron {
    verts: VertVec<Permutation>,
    coords: VertVec<Vec3>,
    /// `neighbours[v][pos]` is reached from `v` by swapping positions `pos` and `pos + 1`
    neighbours: VertVec<Vec<VertIdx>>,
    edges: Vec<EdgeId>,
    faces: Vec<Face>,
    index: PermutationIndex,
}

impl Permutohedron {
    /// Build the permutohedron of [`SYMBOLS`].
    pub fn new() -> Result<Self, Error> {
        let verts = permutation::permutations(&SYMBOLS)?;
        let index = PermutationIndex::new(&verts);
        let edges = adjacency::edges(&verts, &index);
        let neighbours = adjacency::neighbours(&verts, &index);
        let coords = coords::coordinates(&verts);
        coords::check_injective(&coords)?;
        let faces = faces::faces(&neighbours);

        tracing::debug!(
            verts = verts.len(),
            edges = edges.len(),
            faces = faces.len(),
            "Built permutohedron"
        );
        Ok(Self {
            verts,
            coords,
            neighbours,
            edges,
            faces,
            index,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn permutation_at(&self, idx: VertIdx) -> &Permutation {
        &self.verts[idx]
    }

    pub fn coordinate_at(&self, idx: VertIdx) -> Vec3 {
        self.coords[idx]
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn permutations(&self) -> &[Permutation] {
        self.verts.as_raw_slice()
    }

    pub fn coordinates(&self) -> &[Vec3] {
        self.coords.as_raw_slice()
    }

    pub fn verts_enumerated(&self) -> impl Iterator<Item = (VertIdx, &Permutation)> + '_ {
        self.verts.iter_enumerated()
    }

    /// The vertex whose permutation has exactly the given `values`
    pub fn index_of(&self, values: &[Symbol]) -> Option<VertIdx> {
        self.index.get(values)
    }

    /// The vertex of the identity permutation, which is always generated first
    pub fn identity(&self) -> VertIdx {
        VertIdx::new(0)
    }

    pub fn neighbours(&self, idx: VertIdx) -> &[VertIdx] {
        &self.neighbours[idx]
    }

    /// Minimum number of adjacent swaps to get from `a` to `b`
    pub fn distance(&self, a: VertIdx, b: VertIdx) -> usize {
        adjacency::distance(&self.neighbours, a, b)
    }

    /// The vertices visited by one shortest walk of adjacent swaps from `a` to `b`, both included
    pub fn shortest_path(&self, a: VertIdx, b: VertIdx) -> Vec<VertIdx> {
        adjacency::shortest_path(&self.neighbours, a, b)
    }

    /// All vertices, grouped by their distance from `start`
    pub fn layers_from(&self, start: VertIdx) -> Vec<Vec<VertIdx>> {
        adjacency::bfs_layers(&self.neighbours, start)
    }

    pub fn centroid(&self) -> Vec3 {
        let total = self.coords.iter().fold(Vec3::zero(), |acc, &p| acc + p);
        total / self.coords.len() as f32
    }

    /// The vertex nearest to the ray's origin out of those lying within `threshold` of the ray.
    /// Vertices behind the origin are ignored.  If two hits are equally far along the ray, the
    /// one with the lower index is returned.
    pub fn nearest_vertex_along_ray(&self, ray: &Ray, threshold: f32) -> Option<VertIdx> {
        if ray.direction.magnitude2() == 0.0 {
            return None;
        }
        let direction = ray.direction.normalize();
        let threshold_squared = threshold * threshold;
        self.coords
            .iter_enumerated()
            .filter_map(|(idx, &pos)| {
                let offset = pos - ray.origin;
                let dist_along_ray = offset.dot(direction);
                if dist_along_ray < 0.0 {
                    return None;
                }
                let perp_dist_squared = offset.magnitude2() - dist_along_ray * dist_along_ray;
                (perp_dist_squared <= threshold_squared).then_some((idx, dist_along_ray))
            })
            .min_by_key(|&(_idx, dist)| OrderedFloat(dist))
            .map(|(idx, _dist)| idx)
    }

    /// Positions of both ends of every edge, in the same order as [`Self::edges`]
    pub fn edge_segments(&self) -> Vec<(Vec3, Vec3)> {
        self.edges
            .iter()
            .map(|e| (self.coords[e.v1()], self.coords[e.v2()]))
            .collect_vec()
    }
}

/// A half-line starting at `origin` and heading along `direction` (which needn't be normalized)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }
}

/// A pair of vertices which make up an edge, guaranteeing that `v1 < v2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    v1: VertIdx,
    v2: VertIdx,
}

impl EdgeId {
    pub fn new(v1: VertIdx, v2: VertIdx) -> Self {
        Self {
            v1: VertIdx::min(v1, v2),
            v2: VertIdx::max(v1, v2),
        }
    }

    pub fn v1(self) -> VertIdx {
        self.v1
    }

    pub fn v2(self) -> VertIdx {
        self.v2
    }

    pub fn verts(self) -> (VertIdx, VertIdx) {
        (self.v1, self.v2)
    }

    pub fn has_vert(self, v: VertIdx) -> bool {
        self.v1 == v || self.v2 == v
    }
}

index_vec::define_index_type! { pub struct VertIdx = usize; }
pub type VertVec<T> = index_vec::IndexVec<VertIdx, T>;

#[cfg(test)]
mod tests {
    use three_d::vec3;

    use super::*;

    #[test]
    fn query_surface() {
        let polytope = Permutohedron::new().unwrap();
        assert_eq!(polytope.vertex_count(), 24);
        assert_eq!(polytope.edges().len(), 36);

        let identity = polytope.identity();
        assert_eq!(polytope.permutation_at(identity).values(), &[1, 2, 3, 4]);
        assert_eq!(polytope.coordinate_at(identity), vec3(-2.0, -1.0, 0.0));
        assert_eq!(polytope.index_of(&[1, 2, 3, 4]), Some(identity));
        assert_eq!(polytope.index_of(&[1, 1, 3, 4]), None);
        assert_eq!(polytope.neighbours(identity).len(), 3);
    }

    #[test]
    fn rebuilding_is_identical() {
        let a = Permutohedron::new().unwrap();
        let b = Permutohedron::new().unwrap();
        assert_eq!(a.permutations(), b.permutations());
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.faces(), b.faces());
        let bits = |p: &Permutohedron| {
            p.coordinates()
                .iter()
                .map(|c| [c.x.to_bits(), c.y.to_bits(), c.z.to_bits()])
                .collect_vec()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn centroid_is_origin() {
        let polytope = Permutohedron::new().unwrap();
        assert_eq!(polytope.centroid(), Vec3::zero());
    }

    #[test]
    fn edge_ids_are_ordered() {
        let e = EdgeId::new(VertIdx::new(5), VertIdx::new(2));
        assert_eq!(e.verts(), (VertIdx::new(2), VertIdx::new(5)));
        assert!(e.has_vert(VertIdx::new(5)));
        assert!(!e.has_vert(VertIdx::new(3)));
    }

    #[test]
    fn ray_picks_targeted_vertex() {
        let polytope = Permutohedron::new().unwrap();
        let camera = vec3(0.0, 0.0, 10.0);
        for (idx, _perm) in polytope.verts_enumerated() {
            let target = polytope.coordinate_at(idx);
            let ray = Ray::towards(camera, target);
            let hit = polytope.nearest_vertex_along_ray(&ray, 0.1).unwrap();
            // Another vertex may sit in front of the target along the same line of sight
            let direction = ray.direction.normalize();
            let hit_dist = (polytope.coordinate_at(hit) - camera).dot(direction);
            assert!(hit_dist <= (target - camera).dot(direction));
        }

        let identity = polytope.identity();
        let ray = Ray::towards(vec3(-2.0, -1.0, 10.0), polytope.coordinate_at(identity));
        assert_eq!(polytope.nearest_vertex_along_ray(&ray, 0.1), Some(identity));
    }

    #[test]
    fn ray_misses() {
        let polytope = Permutohedron::new().unwrap();
        let camera = vec3(0.0, 0.0, 10.0);
        let away = Ray::new(camera, vec3(0.0, 0.0, 1.0));
        assert_eq!(polytope.nearest_vertex_along_ray(&away, 1.0), None);
        let far_off = Ray::new(vec3(100.0, 100.0, 10.0), vec3(0.0, 0.0, -1.0));
        assert_eq!(polytope.nearest_vertex_along_ray(&far_off, 1.0), None);
        let degenerate = Ray::new(camera, Vec3::zero());
        assert_eq!(polytope.nearest_vertex_along_ray(&degenerate, 1.0), None);
    }

    #[test]
    fn ray_prefers_nearest_hit() {
        let polytope = Permutohedron::new().unwrap();
        // The line x = 0, y = -1 passes through (1 4 3 2) at z = 2 and (3 2 1 4) at z = -2
        let front = polytope.index_of(&[1, 4, 3, 2]).unwrap();
        let back = polytope.index_of(&[3, 2, 1, 4]).unwrap();
        assert_eq!(polytope.coordinate_at(front), vec3(0.0, -1.0, 2.0));
        assert_eq!(polytope.coordinate_at(back), vec3(0.0, -1.0, -2.0));

        let down = Ray::new(vec3(0.0, -1.0, 10.0), vec3(0.0, 0.0, -1.0));
        assert_eq!(polytope.nearest_vertex_along_ray(&down, 0.01), Some(front));
        let up = Ray::new(vec3(0.0, -1.0, -10.0), vec3(0.0, 0.0, 1.0));
        assert_eq!(polytope.nearest_vertex_along_ray(&up, 0.01), Some(back));
        // Starting between the two vertices, the one behind the origin is ignored
        let between = Ray::new(vec3(0.0, -1.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert_eq!(polytope.nearest_vertex_along_ray(&between, 0.01), Some(back));
    }

    #[test]
    fn ray_ties_go_to_lower_index() {
        let polytope = Permutohedron::new().unwrap();
        let (v0, v1) = (VertIdx::new(0), VertIdx::new(1));
        assert_eq!(polytope.permutation_at(v1).values(), &[1, 2, 4, 3]);
        // Pass through the midpoint of `v0` and `v1`, perpendicular to the line joining them, so
        // that both are hit equally far along the ray
        let midpoint = (polytope.coordinate_at(v0) + polytope.coordinate_at(v1)) / 2.0;
        let direction = vec3(1.0, 0.0, 0.0);
        assert_eq!(
            direction.dot(polytope.coordinate_at(v1) - polytope.coordinate_at(v0)),
            0.0
        );
        let ray = Ray::new(midpoint - direction * 10.0, direction);
        assert_eq!(polytope.nearest_vertex_along_ray(&ray, 0.8), Some(v0));
    }

    #[test]
    fn edge_segments_match_coordinates() {
        let polytope = Permutohedron::new().unwrap();
        let segments = polytope.edge_segments();
        assert_eq!(segments.len(), polytope.edges().len());
        for (edge, (a, b)) in polytope.edges().iter().zip_eq(&segments) {
            assert_eq!(*a, polytope.coordinate_at(edge.v1()));
            assert_eq!(*b, polytope.coordinate_at(edge.v2()));
        }
    }
}
