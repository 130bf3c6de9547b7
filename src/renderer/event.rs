use std::time::{Duration, Instant};

use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Translates window coordinates into simulation space.
///
/// The window reports physical pixels while the simulation runs in logical
/// pixels, so everything is divided by the current scale factor.
pub struct PointerTracker {
    scale_factor: f64,
    position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            position: None,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn moved(&mut self, position: PhysicalPosition<f64>) -> Vec2 {
        let logical = position.to_logical::<f32>(self.scale_factor);
        let point = Vec2::new(logical.x, logical.y);
        self.position = Some(point);
        point
    }

    pub fn left(&mut self) {
        self.position = None;
    }

    /// Last known pointer position, `None` while outside the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn viewport(&self, size: PhysicalSize<u32>) -> Vec2 {
        let logical = size.to_logical::<f32>(self.scale_factor);
        Vec2::new(logical.width, logical.height)
    }
}

/// Swallows key repeats that arrive faster than `cooldown`.
pub struct Debounce {
    cooldown: Duration,
    last: Option<Instant>,
}

impl Debounce {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.cooldown => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pointer_is_scaled_to_logical() {
        let mut tracker = PointerTracker::new(2.0);
        assert_eq!(tracker.position(), None);

        let p = tracker.moved(PhysicalPosition::new(200.0, 100.0));
        assert_eq!(p, Vec2::new(100.0, 50.0));
        assert_eq!(tracker.position(), Some(p));

        tracker.set_scale_factor(1.0);
        assert_eq!(
            tracker.viewport(PhysicalSize::new(640, 480)),
            Vec2::new(640.0, 480.0)
        );

        tracker.left();
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn test_debounce() {
        let mut debounce = Debounce::new(Duration::from_millis(400));
        let t0 = Instant::now();
        assert!(debounce.ready(t0));
        assert!(!debounce.ready(t0 + Duration::from_millis(100)));
        assert!(debounce.ready(t0 + Duration::from_millis(500)));
    }
}
