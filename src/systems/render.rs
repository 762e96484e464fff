//! Frame rendering system
//!
//! Builds one frame per tick from the world and camera, keeps the most recent
//! frame, and can write its line segments as text.

use std::io::{self, Write};

use polyview_core::World;
use polyview_math::GeometryError;
use polyview_render::{Frame, OrbitCamera, Palette, ScreenTransform};

/// Running totals over every rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub lines: usize,
    pub triangles: usize,
    pub culled: usize,
}

/// Produces frames from the world
pub struct RenderSystem {
    screen: ScreenTransform,
    palette: Palette,
    frame: Frame,
    stats: FrameStats,
}

impl RenderSystem {
    pub fn new(screen: ScreenTransform, palette: Palette) -> Self {
        Self {
            screen,
            palette,
            frame: Frame::new(),
            stats: FrameStats::default(),
        }
    }

    /// Render a single frame
    ///
    /// Dirty flags are cleared once the frame has been built.
    pub fn render_frame(
        &mut self,
        world: &mut World,
        camera: &OrbitCamera,
    ) -> Result<&Frame, GeometryError> {
        self.frame = Frame::from_world(world, camera, &self.screen, &self.palette)?;
        world.clear_all_dirty();

        self.stats.frames += 1;
        self.stats.lines += self.frame.line_count();
        self.stats.triangles += self.frame.triangle_count();
        self.stats.culled += self.frame.culled_count();
        Ok(&self.frame)
    }

    /// The most recently rendered frame
    pub fn last_frame(&self) -> &Frame {
        &self.frame
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

/// Write every line segment of `frame` as `x1 y1 x2 y2 r1 g1 b1 r2 g2 b2`
pub fn write_lines<W: Write>(frame: &Frame, out: &mut W) -> io::Result<()> {
    for (a, b) in frame.segments() {
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {} {}",
            a.position[0],
            a.position[1],
            b.position[0],
            b.position[1],
            a.color[0],
            a.color[1],
            a.color[2],
            b.color[0],
            b.color[1],
            b.color[2],
        )?;
    }
    Ok(())
}
