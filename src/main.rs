use anyhow::Context as _;
use clap::Parser;
use permutohedron::Permutohedron;
use three_d::*;
use tracing_subscriber::EnvFilter;

mod model_view;

const SMALL_SPACE: f32 = 10.0;

/// Interactive 3D view of the permutohedron of order 4
#[derive(Debug, Parser)]
#[command(version, about)]
struct ViewerArgs {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// How close (in model units) the mouse ray must pass to a vertex to select it
    #[arg(long, default_value_t = 0.3, value_parser = parse_threshold)]
    pick_threshold: f32,

    /// Start with the faces hidden, showing only vertices and edges
    #[arg(long)]
    no_faces: bool,

    /// Maximum window width
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Maximum window height
    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("threshold must be positive, got {value}"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = ViewerArgs::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let polytope = Permutohedron::new().context("building permutohedron")?;
    tracing::info!(
        verts = polytope.vertex_count(),
        edges = polytope.edges().len(),
        faces = polytope.faces().len(),
        "Generated permutohedron"
    );

    // Create window
    let window = Window::new(WindowSettings {
        title: "Permutohedron S₄".to_string(),
        max_size: Some((args.width, args.height)),
        ..Default::default()
    })
    .context("opening window")?;
    let context = window.gl();

    let mut view =
        model_view::ModelView::new(&polytope, args.pick_threshold, &context, window.viewport())?;
    let mut show_faces = !args.no_faces;

    // Main loop
    let mut gui = three_d::GUI::new(&context);
    window.render_loop(move |mut frame_input| {
        // Render GUI
        let mut panel_width = 0.0;
        let hovered = view.hovered();
        let mut redraw = gui.update(
            &mut frame_input.events,
            frame_input.accumulated_time,
            frame_input.viewport,
            frame_input.device_pixel_ratio,
            |egui_context| {
                use three_d::egui::*;
                let response = SidePanel::left("left-panel").show(egui_context, |ui| {
                    ui.heading("Permutohedron S₄");
                    ui.label(format!(
                        "{} vertices, {} edges, {} faces",
                        polytope.vertex_count(),
                        polytope.edges().len(),
                        polytope.faces().len()
                    ));
                    ui.checkbox(&mut show_faces, "Faces");
                    ui.add_space(SMALL_SPACE);

                    ui.strong("Hovered vertex");
                    match hovered {
                        Some(idx) => {
                            let perm = polytope.permutation_at(idx);
                            let identity = polytope.identity();
                            ui.label(perm.to_string());
                            ui.label(format!(
                                "Distance from {}: {}",
                                polytope.permutation_at(identity),
                                polytope.distance(identity, idx)
                            ));
                            ui.label(match perm.is_even() {
                                true => "Even permutation",
                                false => "Odd permutation",
                            });
                            let neighbours = polytope
                                .neighbours(idx)
                                .iter()
                                .map(|&n| polytope.permutation_at(n).to_string())
                                .collect::<Vec<_>>();
                            ui.label(format!("Neighbours: {}", neighbours.join(", ")));
                            let path = polytope
                                .shortest_path(identity, idx)
                                .iter()
                                .map(|&v| polytope.permutation_at(v).to_string())
                                .collect::<Vec<_>>();
                            ui.label(format!("Path: {}", path.join(" → ")));
                        }
                        None => {
                            ui.label("(none)");
                        }
                    }
                });
                panel_width = response.response.rect.width();
            },
        );

        // Calculate remaining viewport
        let w = (panel_width * frame_input.device_pixel_ratio) as u32;
        let viewport = Viewport {
            x: w as i32,
            y: 0,
            width: frame_input.viewport.width - w,
            height: frame_input.viewport.height,
        };

        // Update the 3D view
        redraw |= view.update(&polytope, &mut frame_input, viewport);
        if redraw {
            let screen = frame_input.screen();
            screen.clear(ClearState::color_and_depth(0.98, 0.98, 0.98, 1.0, 1.0));
            view.render(show_faces, &screen);
            if let Err(err) = screen.write(|| gui.render()) {
                tracing::warn!(%err, "Failed to render GUI");
            }
        }

        FrameOutput {
            swap_buffers: redraw,
            wait_next_event: true,
            ..Default::default()
        }
    });
    Ok(())
}
