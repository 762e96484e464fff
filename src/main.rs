//! polyview - N-dimensional hypercube viewer
//!
//! Runs the configured scene headlessly: each tick advances the world and the
//! orbit camera, then projects everything into a coloured draw list.

use std::io::{self, BufWriter, Write};

use polyview::config::AppConfig;
use polyview::scene::SceneBuilder;
use polyview::systems::{write_lines, RenderSystem, SimulationSystem};
use polyview::AppError;
use polyview_render::OrbitCamera;

fn run(config: &AppConfig) -> Result<(), AppError> {
    let mut world = SceneBuilder::from_config(&config.scene)?;
    log::info!(
        "Loaded {}D scene with {} entities",
        config.scene.dimension,
        world.entity_count()
    );

    let [axis_i, axis_j] = config.camera.plane;
    let mut camera = OrbitCamera::new(
        &config.camera.center_for(config.scene.dimension),
        config.camera.rate,
        axis_i,
        axis_j,
    )?;

    let mut simulation = SimulationSystem::new(config.simulation.tick_interval);
    let mut renderer = RenderSystem::new(
        config.screen.to_screen_transform(),
        config.palette.to_palette()?,
    );

    let stats_interval = config.debug.stats_interval;
    for _ in 0..config.simulation.ticks {
        let result = simulation.update(&mut world, &mut camera)?;
        let frame = renderer.render_frame(&mut world, &camera)?;

        if stats_interval > 0 && result.tick % stats_interval == 0 {
            log::info!(
                "Tick {}: {} lines, {} triangles, {} culled",
                result.tick,
                frame.line_count(),
                frame.triangle_count(),
                frame.culled_count()
            );
        }
    }

    let stats = renderer.stats();
    log::info!(
        "Rendered {} frames ({:.2}s simulated): {} lines, {} triangles, {} culled",
        stats.frames,
        simulation.elapsed(),
        stats.lines,
        stats.triangles,
        stats.culled
    );

    if config.output.dump {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_lines(renderer.last_frame(), &mut out)?;
        out.flush()?;
    }

    Ok(())
}

fn main() {
    let config = AppConfig::load();

    // Logging level comes from the config unless RUST_LOG is set
    let default_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    log::info!("Starting polyview");

    let result = config
        .map_err(AppError::from)
        .and_then(|config| run(&config));

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
