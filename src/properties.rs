use glam::Vec2;

use crate::{
    canvas::{Canvas, Color, WHITE},
    error::BubbleError,
    text::wrap_label,
};

/// How far the clickable circle sits inside the collision circle.
pub const HIT_INSET: f32 = 8.0;

const BORDER_WIDTH: f32 = 2.0;
const LABEL_LINE_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    pub fill: Color,
    pub border: Color,
}

impl BubbleStyle {
    /// #373A36 with a white border
    pub const DEFAULT: Self = Self {
        fill: [0.216, 0.227, 0.212, 1.0],
        border: WHITE,
    };

    /// #FF7043 for both fill and border
    pub const HIGHLIGHT: Self = Self {
        fill: [1.0, 0.439, 0.263, 1.0],
        border: [1.0, 0.439, 0.263, 1.0],
    };
}

/// Viewport edge a bubble was pushed back from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Right,
    Bottom,
    Left,
    Top,
}

/// One pickable bubble. Its `label` is the identity across frames.
#[derive(Debug, Clone)]
pub struct Bubble {
    label: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    radius: f32,
    base_radius: f32,
    active_radius: f32,
    mass: f32,
    hovered: bool,
    active: bool,
    style: BubbleStyle,
}

impl Bubble {
    /// Creates a resting bubble. `active_radius` is the radius it grows to
    /// while selected.
    pub fn new(
        label: impl Into<String>,
        position: Vec2,
        radius: f32,
        active_radius: f32,
        mass: f32,
    ) -> Result<Self, BubbleError> {
        let label = label.into();
        if label.is_empty() {
            return Err(BubbleError::EmptyLabel);
        }
        for r in [radius, active_radius] {
            if !(r.is_finite() && r > 0.0) {
                return Err(BubbleError::InvalidRadius(r));
            }
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BubbleError::InvalidMass(mass));
        }

        Ok(Self {
            label,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            base_radius: radius,
            active_radius,
            mass,
            hovered: false,
            active: false,
            style: BubbleStyle::DEFAULT,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn style(&self) -> BubbleStyle {
        self.style
    }

    /// Semi-implicit euler step with every velocity component clamped to
    /// `max_speed`.
    pub fn integrate(&mut self, dt: f32, max_speed: f32) {
        self.velocity += self.acceleration * dt;
        self.velocity = self
            .velocity
            .clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
        self.position += self.velocity * dt;
    }

    /// Pushes the bubble back inside `width` x `height`.
    ///
    /// Edges are checked right, bottom, left, top and only the first one that
    /// is crossed gets resolved, so a bubble stuck in a corner is corrected
    /// one axis per call. Acceleration along the axis is flipped together with
    /// velocity so it can't keep driving the bubble into the wall.
    pub fn resolve_edge_collision(&mut self, width: f32, height: f32) -> Option<Edge> {
        let r = self.radius;
        if self.position.x + r > width {
            self.position.x = width - r;
            self.bounce_x();
            Some(Edge::Right)
        } else if self.position.y + r > height {
            self.position.y = height - r;
            self.bounce_y();
            Some(Edge::Bottom)
        } else if self.position.x - r < 0.0 {
            self.position.x = r;
            self.bounce_x();
            Some(Edge::Left)
        } else if self.position.y - r < 0.0 {
            self.position.y = r;
            self.bounce_y();
            Some(Edge::Top)
        } else {
            None
        }
    }

    fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
        self.acceleration.x = -self.acceleration.x;
    }

    fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
        self.acceleration.y = -self.acceleration.y;
    }

    /// Ignored while the bubble is active.
    pub fn set_hover(&mut self, hovered: bool) {
        if self.active {
            return;
        }
        self.hovered = hovered;
        self.style = if hovered {
            BubbleStyle::HIGHLIGHT
        } else {
            BubbleStyle::DEFAULT
        };
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
        self.hovered = false;
        if self.active {
            self.radius = self.active_radius;
            self.style = BubbleStyle::HIGHLIGHT;
        } else {
            self.radius = self.base_radius;
            self.style = BubbleStyle::DEFAULT;
        }
    }

    pub fn hit_radius(&self) -> f32 {
        self.radius - HIT_INSET
    }

    /// If `point` lies on the clickable circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) <= self.hit_radius().powi(2)
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let hit_radius = self.hit_radius();
        canvas.stroke_circle(self.position, hit_radius, BORDER_WIDTH, self.style.border);
        canvas.fill_circle(self.position, hit_radius, self.style.fill);

        let font_size = self.radius / 5.0;
        let max_width = self.radius * 2.0 - HIT_INSET;
        let lines = wrap_label(&self.label, max_width, |s| canvas.measure_text(s, font_size));

        let top = self.position.y - lines.len().saturating_sub(1) as f32 * LABEL_LINE_HEIGHT / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let center = Vec2::new(self.position.x, top + i as f32 * LABEL_LINE_HEIGHT);
            canvas.fill_text(line, center, font_size, WHITE);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bubble(x: f32, y: f32) -> Bubble {
        Bubble::new("Chess", Vec2::new(x, y), 50.0, 60.0, 500.0).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        circles: Vec<(Vec2, f32)>,
        text: Vec<(String, Vec2)>,
    }

    impl Canvas for Recorder {
        fn viewport(&self) -> Vec2 {
            Vec2::new(500.0, 500.0)
        }

        fn clear(&mut self) {}

        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.circles.push((center, radius));
        }

        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _w: f32, _color: Color) {}

        fn measure_text(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size
        }

        fn fill_text(&mut self, text: &str, center: Vec2, _font_size: f32, _color: Color) {
            self.text.push((text.to_string(), center));
        }
    }

    #[test]
    fn test_rejects_invalid_bodies() {
        let p = Vec2::ZERO;
        assert_eq!(
            Bubble::new("a", p, 50.0, 60.0, 0.0).unwrap_err(),
            BubbleError::InvalidMass(0.0)
        );
        assert_eq!(
            Bubble::new("a", p, -1.0, 60.0, 1.0).unwrap_err(),
            BubbleError::InvalidRadius(-1.0)
        );
        assert_eq!(
            Bubble::new("", p, 50.0, 60.0, 1.0).unwrap_err(),
            BubbleError::EmptyLabel
        );
        assert!(Bubble::new("a", p, 50.0, 60.0, f32::NAN).is_err());
    }

    #[test]
    fn test_integrate_clamps_speed() {
        let mut b = bubble(250.0, 250.0);
        b.acceleration = Vec2::new(1e6, -1e6);
        b.integrate(0.1, 15.0);
        assert_eq!(b.velocity, Vec2::new(15.0, -15.0));
        assert!((b.position - Vec2::new(251.5, 248.5)).length() < 1e-4);
    }

    #[test]
    fn test_integrate_applies_acceleration() {
        let mut b = bubble(0.0, 0.0);
        b.acceleration = Vec2::new(2.0, 0.0);
        b.integrate(0.5, 15.0);
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(b.position, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_right_edge_bounce() {
        let mut b = bubble(500.0, 250.0);
        b.velocity = Vec2::new(3.0, 1.0);
        b.acceleration = Vec2::new(0.5, 0.0);
        assert_eq!(b.resolve_edge_collision(500.0, 500.0), Some(Edge::Right));
        assert_eq!(b.position.x, 450.0);
        assert_eq!(b.velocity, Vec2::new(-3.0, 1.0));
        assert_eq!(b.acceleration.x, -0.5);
    }

    #[test]
    fn test_edges_resolve_one_at_a_time() {
        // bottom-left corner: bottom wins over left
        let mut b = bubble(10.0, 495.0);
        b.velocity = Vec2::new(-2.0, 2.0);
        assert_eq!(b.resolve_edge_collision(500.0, 500.0), Some(Edge::Bottom));
        assert_eq!(b.position, Vec2::new(10.0, 450.0));
        assert_eq!(b.velocity, Vec2::new(-2.0, -2.0));

        assert_eq!(b.resolve_edge_collision(500.0, 500.0), Some(Edge::Left));
        assert_eq!(b.position, Vec2::new(50.0, 450.0));
        assert_eq!(b.velocity, Vec2::new(2.0, -2.0));

        assert_eq!(b.resolve_edge_collision(500.0, 500.0), None);
    }

    #[test]
    fn test_top_edge_bounce() {
        let mut b = bubble(250.0, 20.0);
        b.velocity = Vec2::new(0.0, -4.0);
        assert_eq!(b.resolve_edge_collision(500.0, 500.0), Some(Edge::Top));
        assert_eq!(b.position.y, 50.0);
        assert_eq!(b.velocity.y, 4.0);
    }

    #[test]
    fn test_toggle_active_twice_restores() {
        let mut b = bubble(250.0, 250.0);
        let (radius, style) = (b.radius(), b.style());

        b.toggle_active();
        assert!(b.is_active());
        assert_eq!(b.radius(), 60.0);
        assert_eq!(b.style(), BubbleStyle::HIGHLIGHT);

        b.toggle_active();
        assert!(!b.is_active());
        assert_eq!(b.radius(), radius);
        assert_eq!(b.style(), style);
    }

    #[test]
    fn test_hover_ignored_while_active() {
        let mut b = bubble(250.0, 250.0);
        b.set_hover(true);
        assert!(b.is_hovered());
        assert_eq!(b.style(), BubbleStyle::HIGHLIGHT);

        b.toggle_active();
        b.set_hover(false);
        assert!(!b.is_hovered());
        assert_eq!(b.style(), BubbleStyle::HIGHLIGHT);

        b.toggle_active();
        b.set_hover(false);
        assert_eq!(b.style(), BubbleStyle::DEFAULT);
    }

    #[test]
    fn test_hit_region_is_inset() {
        let b = bubble(100.0, 100.0);
        assert!(b.contains(Vec2::new(100.0, 100.0)));
        assert!(b.contains(Vec2::new(141.0, 100.0)));
        assert!(!b.contains(Vec2::new(145.0, 100.0)));
        assert!(!b.contains(Vec2::new(100.0, 151.0)));
    }

    #[test]
    fn test_draw_centers_label() {
        let mut b = bubble(100.0, 100.0);
        b.label = "Board games".to_string();
        let mut canvas = Recorder::default();
        b.draw(&mut canvas);

        assert_eq!(canvas.circles, vec![(Vec2::new(100.0, 100.0), 42.0)]);
        // 10px per char, wrapped at 92px
        assert_eq!(canvas.text.len(), 2);
        assert_eq!(canvas.text[0], ("Board".to_string(), Vec2::new(100.0, 90.0)));
        assert_eq!(canvas.text[1], ("games".to_string(), Vec2::new(100.0, 110.0)));
    }
}
