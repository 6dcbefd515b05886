//! CPU-side geometry for drawing a [`Permutohedron`].  Uploading it to the GPU is left to the
//! viewer.

use itertools::Itertools;
use three_d::{
    egui::Color32, vec3, CpuMesh, Indices, InnerSpace, Instances, Mat4, Positions, Quat, Vec3,
};

use crate::{
    utils::{darken_color, egui_color_to_srgba, lerp_color},
    Permutohedron, VertIdx,
};

pub const EDGE_RADIUS: f32 = 0.03;
pub const VERTEX_RADIUS: f32 = 0.08;

const INSIDE_TINT: f32 = 0.5;
const HIGHLIGHT_BRIGHTNESS: f32 = 0.6;

/// Colors used for each part of the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub square: Color32,
    pub hexagon: Color32,
    pub edge: Color32,
    pub vertex: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            square: Color32::from_rgb(90, 200, 120),
            hexagon: Color32::from_rgb(200, 210, 230),
            edge: Color32::from_rgb(59, 130, 246),
            vertex: Color32::from_rgb(59, 130, 246),
        }
    }
}

impl Palette {
    fn face_color(&self, order: usize) -> Color32 {
        match order {
            4 => self.square,
            _ => self.hexagon,
        }
    }
}

/// Every face, split into triangles fanning out from the face's centroid and wound
/// counter-clockwise when seen from outside.  Each triangle is also added facing inwards with a
/// darker color, so the mesh looks right from either side with back-face culling.
pub fn face_mesh(polytope: &Permutohedron, palette: &Palette) -> CpuMesh {
    let model_centroid = polytope.centroid();
    let mut faces = Vec::new();
    for face in polytope.faces() {
        let centroid = face.centroid(polytope);
        let outward = centroid - model_centroid;
        let color = palette.face_color(face.order());
        for (v1, v2) in face.verts().iter().circular_tuple_windows() {
            let mut p1 = polytope.coordinate_at(*v1);
            let mut p2 = polytope.coordinate_at(*v2);
            if (p1 - centroid).cross(p2 - centroid).dot(outward) < 0.0 {
                std::mem::swap(&mut p1, &mut p2);
            }
            faces.push((color, vec![centroid, p1, p2]));
        }
    }
    let (verts, colors, tri_indices) = triangulate_mesh(faces);

    // Add verts colors for inside-facing verts
    let mut all_verts = verts.clone();
    all_verts.extend_from_within(..);
    let mut all_colors = colors.clone();
    for c in colors {
        all_colors.push(darken_color(c, INSIDE_TINT));
    }
    // Add inside-facing faces
    let vert_offset = verts.len() as u32;
    let mut all_tri_indices = tri_indices.clone();
    for vs in tri_indices.chunks_exact(3) {
        all_tri_indices.extend_from_slice(&[
            vert_offset + vs[0],
            vert_offset + vs[2],
            vert_offset + vs[1],
        ]);
    }

    let mut mesh = CpuMesh {
        positions: Positions::F32(all_verts),
        colors: Some(
            all_colors
                .into_iter()
                .map(egui_color_to_srgba)
                .collect_vec(),
        ),
        indices: Indices::U32(all_tri_indices),
        ..Default::default()
    };
    mesh.compute_normals();
    mesh
}

fn triangulate_mesh(faces: Vec<(Color32, Vec<Vec3>)>) -> (Vec<Vec3>, Vec<Color32>, Vec<u32>) {
    let mut verts = Vec::new();
    let mut colors = Vec::new();
    let mut tri_indices = Vec::new();

    for (color, face_verts) in faces {
        // Vertices are duplicated per face so that each face gets flat shading
        let first_vert_idx = verts.len() as u32;
        verts.extend_from_slice(&face_verts);
        colors.extend(std::iter::repeat(color).take(face_verts.len()));
        for i in 2..face_verts.len() as u32 {
            tri_indices.extend_from_slice(&[
                first_vert_idx,
                first_vert_idx + i - 1,
                first_vert_idx + i,
            ]);
        }
    }
    (verts, colors, tri_indices)
}

/// One transform per edge, mapping a unit cylinder along the x-axis onto that edge.
pub fn edge_instances(polytope: &Permutohedron, palette: &Palette) -> Instances {
    let transformations = polytope
        .edge_segments()
        .into_iter()
        .map(|(p1, p2)| edge_transform(p1, p2))
        .collect_vec();
    let colors = vec![egui_color_to_srgba(palette.edge); transformations.len()];
    Instances {
        transformations,
        colors: Some(colors),
        ..Default::default()
    }
}

/// One translation per vertex.  The `highlighted` vertex (if any) is drawn brighter.
pub fn vertex_instances(
    polytope: &Permutohedron,
    palette: &Palette,
    highlighted: Option<VertIdx>,
) -> Instances {
    let mut transformations = Vec::new();
    let mut colors = Vec::new();
    for (idx, _perm) in polytope.verts_enumerated() {
        let color = match Some(idx) == highlighted {
            true => lerp_color(palette.vertex, Color32::WHITE, HIGHLIGHT_BRIGHTNESS),
            false => palette.vertex,
        };
        transformations.push(Mat4::from_translation(polytope.coordinate_at(idx)));
        colors.push(egui_color_to_srgba(color));
    }
    Instances {
        transformations,
        colors: Some(colors),
        ..Default::default()
    }
}

fn edge_transform(p1: Vec3, p2: Vec3) -> Mat4 {
    Mat4::from_translation(p1)
        * Mat4::from(Quat::from_arc(
            vec3(1.0, 0.0, 0.0),
            (p2 - p1).normalize(),
            None,
        ))
        * Mat4::from_nonuniform_scale((p1 - p2).magnitude(), 1.0, 1.0)
}
