use std::collections::HashSet;

use itertools::Itertools;
use permutohedron::{
    adjacency::{self, PermutationIndex},
    coords,
    permutation::permutations,
    EdgeId, Error, Permutohedron, Ray, SYMBOLS,
};
use three_d::vec3;

fn polytope() -> Permutohedron {
    Permutohedron::new().expect("the fixed symbol set should always build")
}

#[test]
fn generation_order() {
    let p = polytope();
    let perms = p.permutations();
    assert_eq!(perms.len(), 24);
    assert_eq!(perms[0].to_string(), "(1 2 3 4)");
    assert_eq!(perms[23].to_string(), "(4 3 2 1)");
    // Lexicographic by construction
    assert!(perms.iter().tuple_windows().all(|(a, b)| a < b));
}

#[test]
fn edges_are_unique_and_regular() {
    let p = polytope();
    let edges = p.edges();
    assert_eq!(edges.len(), 36);
    assert_eq!(edges.iter().collect::<HashSet<_>>().len(), 36);
    for (idx, _perm) in p.verts_enumerated() {
        assert_eq!(edges.iter().filter(|e| e.has_vert(idx)).count(), 3);
    }
}

#[test]
fn concrete_adjacencies() {
    let p = polytope();
    let idx = |values: &[i32]| p.index_of(values).unwrap();
    let edges = p.edges().iter().copied().collect::<HashSet<_>>();
    let identity = idx(&[1, 2, 3, 4]);

    assert!(edges.contains(&EdgeId::new(identity, idx(&[2, 1, 3, 4]))));
    assert!(edges.contains(&EdgeId::new(identity, idx(&[1, 3, 2, 4]))));
    assert!(edges.contains(&EdgeId::new(identity, idx(&[1, 2, 4, 3]))));
    assert!(!edges.contains(&EdgeId::new(identity, idx(&[4, 3, 2, 1]))));
    assert!(!edges.contains(&EdgeId::new(identity, idx(&[3, 2, 1, 4]))));
}

#[test]
fn coordinates_are_distinct() {
    let p = polytope();
    assert_eq!(p.coordinate_at(p.identity()), vec3(-2.0, -1.0, 0.0));
    let points = p
        .coordinates()
        .iter()
        .map(|c| [c.x, c.y, c.z].map(f32::to_bits))
        .collect::<HashSet<_>>();
    assert_eq!(points.len(), 24);
}

#[test]
fn rebuild_is_bit_identical() {
    let a = polytope();
    let b = polytope();
    assert_eq!(a.permutations(), b.permutations());
    assert_eq!(a.edges(), b.edges());
    assert!(a
        .coordinates()
        .iter()
        .zip_eq(b.coordinates())
        .all(|(x, y)| x.x.to_bits() == y.x.to_bits()
            && x.y.to_bits() == y.y.to_bits()
            && x.z.to_bits() == y.z.to_bits()));
}

#[test]
fn layers_from_identity() {
    let p = polytope();
    let layers = p.layers_from(p.identity());
    assert_eq!(layers.iter().map(Vec::len).collect_vec(), [1, 3, 5, 6, 5, 3, 1]);
    let reversed = p.index_of(&[4, 3, 2, 1]).unwrap();
    assert_eq!(layers[6], vec![reversed]);
    assert_eq!(p.distance(p.identity(), reversed), 6);
}

#[test]
fn shortest_path_to_reversal() {
    let p = polytope();
    let reversed = p.index_of(&[4, 3, 2, 1]).unwrap();
    let path = p.shortest_path(p.identity(), reversed);
    assert_eq!(path.len(), p.distance(p.identity(), reversed) + 1);
    assert_eq!(path[0], p.identity());
    assert_eq!(path[6], reversed);
    let edges = p.edges().iter().copied().collect::<HashSet<_>>();
    for (&a, &b) in path.iter().tuple_windows() {
        assert!(edges.contains(&EdgeId::new(a, b)));
    }
}

#[test]
fn picking_a_vertex() {
    let p = polytope();
    let target = p.index_of(&[3, 1, 4, 2]).unwrap();
    let ray = Ray::towards(vec3(0.0, 0.0, 12.0), p.coordinate_at(target));
    let hit = p.nearest_vertex_along_ray(&ray, 0.05).unwrap();
    // Anything hit first must lie on the same line of sight
    assert!(hit == target || p.coordinate_at(hit).z > p.coordinate_at(target).z);
}

#[test]
fn pipeline_can_be_driven_step_by_step() {
    let verts = permutations(&SYMBOLS).unwrap();
    let index = PermutationIndex::new(&verts);
    let edges = adjacency::edges(&verts, &index);
    let coords = coords::coordinates(&verts);
    coords::check_injective(&coords).unwrap();

    let p = polytope();
    assert_eq!(edges, p.edges());
    assert_eq!(coords.as_raw_slice(), p.coordinates());
}

#[test]
fn invalid_symbol_sets_are_rejected() {
    assert!(matches!(permutations(&[]), Err(Error::InvalidInput(_))));
    assert!(matches!(permutations(&[3, 1, 3]), Err(Error::InvalidInput(_))));
    let err = permutations(&[1, 1]).unwrap_err();
    assert!(err.to_string().starts_with("Invalid input"));
}
