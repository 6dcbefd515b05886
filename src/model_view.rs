use anyhow::Context as _;
use permutohedron::{
    meshes::{self, Palette, EDGE_RADIUS, VERTEX_RADIUS},
    Permutohedron, Ray, VertIdx,
};
use three_d::*;

/// The 3D viewport used to display the permutohedron
pub(crate) struct ModelView {
    context: Context,
    palette: Palette,

    camera: Camera,
    control: OrbitControl,
    pick_threshold: f32,
    hovered: Option<VertIdx>,

    face_mesh: Gm<Mesh, PhysicalMaterial>,
    edge_mesh: Gm<InstancedMesh, PhysicalMaterial>,
    vertex_mesh: Gm<InstancedMesh, PhysicalMaterial>,
}

impl ModelView {
    pub fn new(
        polytope: &Permutohedron,
        pick_threshold: f32,
        context: &Context,
        viewport: Viewport,
    ) -> anyhow::Result<Self> {
        // Camera
        let target = vec3(0.0f32, 0.0, 0.0);
        let scene_radius = 12.0f32;
        let camera = Camera::new_perspective(
            viewport,
            target + scene_radius * vec3(0.0, 0.0, 1.0),
            target,
            vec3(0.0, 1.0, 0.0),
            degrees(45.0),
            0.1,
            100.0,
        );
        let control = OrbitControl::new(*camera.target(), 0.3 * scene_radius, 5.0 * scene_radius);

        // Geometry
        let palette = Palette::default();
        let mut cylinder = CpuMesh::cylinder(10);
        cylinder
            .transform(&Mat4::from_nonuniform_scale(1.0, EDGE_RADIUS, EDGE_RADIUS))
            .context("scaling edge cylinder")?;
        let mut sphere = CpuMesh::sphere(8);
        sphere
            .transform(&Mat4::from_scale(VERTEX_RADIUS))
            .context("scaling vertex sphere")?;

        let face_mesh = Gm::new(
            Mesh::new(context, &meshes::face_mesh(polytope, &palette)),
            Self::material(context, Cull::Back),
        );
        let edge_mesh = Gm::new(
            InstancedMesh::new(
                context,
                &meshes::edge_instances(polytope, &palette),
                &cylinder,
            ),
            Self::material(context, Cull::Back),
        );
        let vertex_mesh = Gm::new(
            InstancedMesh::new(
                context,
                &meshes::vertex_instances(polytope, &palette, None),
                &sphere,
            ),
            Self::material(context, Cull::Back),
        );

        Ok(Self {
            context: context.clone(),
            palette,

            camera,
            control,
            pick_threshold,
            hovered: None,

            face_mesh,
            edge_mesh,
            vertex_mesh,
        })
    }

    fn material(context: &Context, cull: Cull) -> PhysicalMaterial {
        let mut material = PhysicalMaterial::new_opaque(
            context,
            &CpuMaterial {
                albedo: Srgba::WHITE,
                roughness: 0.7,
                metallic: 0.3,
                ..Default::default()
            },
        );
        material.render_states.cull = cull;
        material
    }

    pub fn hovered(&self) -> Option<VertIdx> {
        self.hovered
    }

    /// Handle camera movement and vertex picking, returning `true` if a redraw is needed
    pub fn update(
        &mut self,
        polytope: &Permutohedron,
        frame_input: &mut FrameInput,
        viewport: Viewport,
    ) -> bool {
        let mut redraw = frame_input.first_frame;
        redraw |= self.camera.set_viewport(viewport);
        redraw |= self
            .control
            .handle_events(&mut self.camera, &mut frame_input.events);

        let mut hovered = self.hovered;
        for event in &frame_input.events {
            if let Event::MouseMotion { position, .. } = event {
                let ray = Ray::new(
                    self.camera.position_at_pixel(*position),
                    self.camera.view_direction_at_pixel(*position),
                );
                hovered = polytope.nearest_vertex_along_ray(&ray, self.pick_threshold);
            }
        }
        if hovered != self.hovered {
            tracing::debug!(?hovered, "Hovered vertex changed");
            self.hovered = hovered;
            self.vertex_mesh
                .geometry
                .set_instances(&meshes::vertex_instances(polytope, &self.palette, hovered));
            redraw = true;
        }
        redraw
    }

    pub fn render(&self, show_faces: bool, target: &RenderTarget) {
        // Lights
        let ambient = AmbientLight::new(&self.context, 0.6, Srgba::WHITE);
        let directional0 =
            DirectionalLight::new(&self.context, 1.5, Srgba::WHITE, &vec3(-1.0, -1.0, -1.0));
        let directional1 =
            DirectionalLight::new(&self.context, 1.5, Srgba::WHITE, &vec3(1.0, 1.0, 1.0));
        let lights = [&ambient as &dyn Light, &directional0, &directional1];

        let mut objects: Vec<&dyn Object> = vec![&self.vertex_mesh, &self.edge_mesh];
        if show_faces {
            objects.push(&self.face_mesh);
        }
        target.render(&self.camera, objects, &lights);
    }
}
