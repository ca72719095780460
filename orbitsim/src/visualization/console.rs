//! Render side of the simulation
//!
//! The viewer runs on the caller's thread, polls the latest committed
//! [`Snapshot`] at a fixed refresh rate and hands new ticks to a [`Renderer`].
//! It never blocks the simulation thread beyond cloning an `Arc`.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::simulation::driver::DriverHandle;
use crate::simulation::snapshot::Snapshot;
use crate::visualization::depth::DepthColor;

/// Rendering collaborator fed one consistent frame at a time
pub trait Renderer {
    fn present(&mut self, frame: &Snapshot) -> io::Result<()>;
}

/// Writes one line per body for every presented frame
pub struct ConsoleRenderer<W: Write> {
    out: W,
    stretch: f64, // depth colour squashing
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, stretch: f64) -> Self {
        Self { out, stretch }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn present(&mut self, frame: &Snapshot) -> io::Result<()> {
        writeln!(self.out, "tick {} t={:.4}", frame.tick, frame.t)?;
        for (i, b) in frame.bodies.iter().enumerate() {
            let [r, g, bl] = DepthColor::from_depth(b.x.z, self.stretch).to_rgb8();
            writeln!(
                self.out,
                "  #{i} pos=({:.3}, {:.3}, {:.3}) color=#{r:02x}{g:02x}{bl:02x}",
                b.x.x, b.x.y, b.x.z
            )?;
        }
        self.out.flush()
    }
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub fps: u32,
    pub frames: Option<u64>, // None = until the driver finishes
}

impl ViewerConfig {
    fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

/// Present frames until `cfg.frames` is reached or the simulation thread ends.
/// Returns the number of frames presented. Frames with no new tick are skipped.
pub fn run_viewer<R: Renderer>(handle: &DriverHandle, renderer: &mut R, cfg: &ViewerConfig) -> io::Result<u64> {
    let interval = cfg.frame_interval();
    let mut presented = 0u64;
    let mut last_tick = None;

    loop {
        if cfg.frames.is_some_and(|n| presented >= n) {
            break;
        }
        let finished = handle.is_finished();

        let frame = handle.reader().latest();
        if last_tick != Some(frame.tick) {
            renderer.present(&frame)?;
            last_tick = Some(frame.tick);
            presented += 1;
        }

        // last commit happens before the thread exits, so it was shown above
        if finished {
            debug!("simulation thread finished, viewer exiting");
            break;
        }
        thread::sleep(interval);
    }

    Ok(presented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{Body, System};
    use crate::simulation::vector::NVec3;

    #[test]
    fn console_lists_every_body() {
        let bodies = vec![
            Body::new(NVec3::new(1.0, 2.0, 0.0), NVec3::zeros(), 1.0).unwrap(),
            Body::new(NVec3::new(-1.0, 0.5, 0.0), NVec3::zeros(), 1.0).unwrap(),
        ];
        let frame = Snapshot::capture(3, &System::new(bodies));

        let mut r = ConsoleRenderer::new(Vec::new(), 0.01);
        r.present(&frame).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("tick 3"));
        assert_eq!(lines[1], "  #0 pos=(1.000, 2.000, 0.000) color=#808080");
    }
}
