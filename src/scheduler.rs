use log::info;

use crate::{
    canvas::Canvas,
    simulator::{Simulator, StepReport},
};

enum LoopState<C> {
    Running(C),
    Stale,
}

/// Drives the simulator once per display refresh.
///
/// The loop only runs while it owns a surface to draw on. Without one it is
/// stale and every tick does nothing. Tearing the surface down is the only
/// way to stop it.
pub struct FrameLoop<C: Canvas> {
    simulator: Simulator,
    state: LoopState<C>,
    frames: u64,
}

impl<C: Canvas> FrameLoop<C> {
    pub fn attach(simulator: Simulator, canvas: Option<C>) -> Self {
        let state = match canvas {
            Some(canvas) => LoopState::Running(canvas),
            None => {
                info!("no surface available, frame loop not started");
                LoopState::Stale
            }
        };

        Self {
            simulator,
            state,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    /// Runs one frame. Returns `None` when the loop is stale.
    pub fn tick(&mut self) -> Option<StepReport> {
        match &mut self.state {
            LoopState::Running(canvas) => {
                self.frames += 1;
                Some(self.simulator.frame(canvas))
            }
            LoopState::Stale => None,
        }
    }

    /// Drops the surface. The loop stays stale from here on.
    pub fn detach(&mut self) -> Option<C> {
        match std::mem::replace(&mut self.state, LoopState::Stale) {
            LoopState::Running(canvas) => {
                info!("surface torn down after {} frames", self.frames);
                Some(canvas)
            }
            LoopState::Stale => None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> Option<&C> {
        match &self.state {
            LoopState::Running(canvas) => Some(canvas),
            LoopState::Stale => None,
        }
    }

    pub fn canvas_mut(&mut self) -> Option<&mut C> {
        match &mut self.state {
            LoopState::Running(canvas) => Some(canvas),
            LoopState::Stale => None,
        }
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Access between two ticks, e.g. for pointer input or new items.
    pub fn simulator_mut(&mut self) -> &mut Simulator {
        &mut self.simulator
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;

    use super::*;
    use crate::canvas::Color;

    #[derive(Default)]
    struct Counter {
        clears: usize,
    }

    impl Canvas for Counter {
        fn viewport(&self) -> Vec2 {
            Vec2::new(400.0, 400.0)
        }

        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _w: f32, _color: Color) {}

        fn measure_text(&self, _text: &str, _font_size: f32) -> f32 {
            0.0
        }

        fn fill_text(&mut self, _text: &str, _center: Vec2, _font_size: f32, _color: Color) {}
    }

    fn simulator() -> Simulator {
        Simulator::builder().seed(3).build().unwrap()
    }

    #[test]
    fn test_without_surface_loop_is_stale() {
        let mut frame_loop: FrameLoop<Counter> = FrameLoop::attach(simulator(), None);
        assert!(!frame_loop.is_running());
        assert_eq!(frame_loop.tick(), None);
        assert_eq!(frame_loop.frames(), 0);
    }

    #[test]
    fn test_running_loop_ticks_until_detached() {
        let mut frame_loop = FrameLoop::attach(simulator(), Some(Counter::default()));
        frame_loop.simulator_mut().sync_items(&["a"]).unwrap();

        assert!(frame_loop.tick().is_some());
        assert!(frame_loop.tick().is_some());
        assert_eq!(frame_loop.canvas().unwrap().clears, 2);
        assert_eq!(frame_loop.simulator().bounds(), Vec2::new(400.0, 400.0));

        let canvas = frame_loop.detach().unwrap();
        assert_eq!(canvas.clears, 2);
        assert!(!frame_loop.is_running());
        assert_eq!(frame_loop.tick(), None);
        assert!(frame_loop.detach().is_none());
        assert_eq!(frame_loop.frames(), 2);
    }
}
