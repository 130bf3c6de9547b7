use glam::Vec2;
use log::{debug, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    bubble_set::{BubbleSet, SyncReport},
    canvas::{self, Canvas},
    collision::{detect_all, resolve},
    error::BubbleError,
    properties::Bubble,
    selection::{CursorHint, Selection},
};

/// How bubbles are moved at the start of every step.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum IntegrationModel {
    /// Each bubble follows its own constant acceleration with clamped speed.
    #[default]
    Simple,
    /// Bubbles pull on each other with `strength * m1 * m2 / r²`.
    /// `r` never drops below `min_distance`.
    Attraction { strength: f32, min_distance: f32 },
}

impl IntegrationModel {
    pub const fn attraction() -> Self {
        Self::Attraction {
            strength: 100.0,
            min_distance: 1.0,
        }
    }

    fn default_delta_time(&self) -> f32 {
        match self {
            Self::Simple => 0.1,
            Self::Attraction { .. } => 0.01,
        }
    }
}

/// Counters for a single call to [`Simulator::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub edge_hits: usize,
    pub collisions: usize,
    pub resolved: usize,
    pub skipped: usize,
}

pub struct Simulator {
    bubbles: BubbleSet,
    selection: Selection,
    rng: StdRng,
    bounds: Vec2,
    model: IntegrationModel,
    max_speed: f32,
    delta_time: f32,
    radius: f32,
    active_radius: f32,
    mass: f32,
}

impl Simulator {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }

    pub fn bubbles(&self) -> &BubbleSet {
        &self.bubbles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn model(&self) -> IntegrationModel {
        self.model
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Resizes the simulated viewport. Takes effect with the next step.
    ///
    /// Empty or non-finite sizes are ignored and the last usable bounds stay
    /// in place. Returns whether the bounds changed.
    pub fn set_bounds(&mut self, bounds: Vec2) -> bool {
        if !canvas::is_usable(bounds) {
            debug!("ignoring unusable bounds {}", bounds);
            return false;
        }
        self.bounds = bounds;
        true
    }

    /// Label of the bubble under the pointer, if any.
    pub fn hovered_label(&self) -> Option<&str> {
        self.bubbles.iter().find(|b| b.is_hovered()).map(|b| b.label())
    }

    pub fn set_on_select<F>(&mut self, on_select: F)
    where
        F: FnMut(&[String]) + 'static,
    {
        self.selection.set_on_select(on_select);
    }

    /// Adds a bubble for every new label in `items` and drops the bubbles
    /// whose label is gone.
    pub fn sync_items<S: AsRef<str>>(&mut self, items: &[S]) -> Result<SyncReport, BubbleError> {
        let Self {
            bubbles,
            rng,
            bounds,
            radius,
            active_radius,
            mass,
            ..
        } = self;

        let report = bubbles.sync(items, |label| {
            let position = Vec2::new(
                spawn_coordinate(rng, *radius, bounds.x),
                spawn_coordinate(rng, *radius, bounds.y),
            );
            Bubble::new(label, position, *radius, *active_radius, *mass)
        })?;

        if !report.added.is_empty() || !report.removed.is_empty() {
            debug!(
                "bubbles synced: {} added, {} removed, {} live",
                report.added.len(),
                report.removed.len(),
                self.bubbles.len()
            );
        }
        Ok(report)
    }

    /// Advances the simulation by one time step.
    ///
    /// Order is fixed: move, bounce off the viewport edges, then find and
    /// resolve all overlapping pairs one after another in detection order.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();

        match self.model {
            IntegrationModel::Simple => {
                for bubble in self.bubbles.iter_mut() {
                    bubble.integrate(self.delta_time, self.max_speed);
                }
            }
            IntegrationModel::Attraction {
                strength,
                min_distance,
            } => self.move_with_attraction(strength, min_distance),
        }

        for bubble in self.bubbles.iter_mut() {
            if bubble.resolve_edge_collision(self.bounds.x, self.bounds.y).is_some() {
                report.edge_hits += 1;
            }
        }

        let collisions = detect_all(self.bubbles.as_slice());
        report.collisions = collisions.len();

        for collision in collisions.iter() {
            match resolve(self.bubbles.as_mut_slice(), collision) {
                Ok(()) => report.resolved += 1,
                Err(e) => {
                    warn!("skipping collision: {}", e);
                    report.skipped += 1;
                }
            }
        }

        trace!("{:?}", report);
        report
    }

    /// Runs one full frame against `canvas`: clear, step, draw.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> StepReport {
        self.set_bounds(canvas.viewport());
        canvas.clear();

        let report = self.step();

        for bubble in self.bubbles.iter() {
            bubble.draw(canvas);
        }
        report
    }

    /// Toggles every bubble under `point` and returns the active labels.
    pub fn click(&mut self, point: Vec2) -> Vec<String> {
        self.selection.click(self.bubbles.as_mut_slice(), point)
    }

    pub fn pointer_move(&mut self, point: Vec2) -> CursorHint {
        self.selection.pointer_move(self.bubbles.as_mut_slice(), point)
    }

    /// Clears every hover once the pointer has left the surface.
    pub fn pointer_left(&mut self) {
        self.selection.pointer_left(self.bubbles.as_mut_slice());
    }

    pub fn active_labels(&self) -> Vec<String> {
        Selection::active_labels(self.bubbles.as_slice())
    }

    fn move_with_attraction(&mut self, strength: f32, min_distance: f32) {
        let bubbles = self.bubbles.as_mut_slice();
        let mut forces = vec![Vec2::ZERO; bubbles.len()];

        for i in 0..bubbles.len() {
            for j in (i + 1)..bubbles.len() {
                let force = attraction_force(strength, min_distance, &bubbles[i], &bubbles[j]);
                forces[i] += force;
                forces[j] -= force;
            }
        }

        for (bubble, force) in bubbles.iter_mut().zip(forces) {
            let acceleration = force / bubble.mass();
            bubble.velocity += acceleration * self.delta_time;
            bubble.position += bubble.velocity * self.delta_time;
        }
    }
}

/// Force pulling `b1` towards `b2`.
fn attraction_force(strength: f32, min_distance: f32, b1: &Bubble, b2: &Bubble) -> Vec2 {
    let delta = b2.position - b1.position;
    let r = delta.length().max(min_distance);
    let f = strength * b1.mass() * b2.mass() / (r * r);
    delta * f / r
}

/// Random whole-number coordinate that keeps a bubble of `radius` inside
/// `0..extent`, or the middle of the axis if it can't fit.
fn spawn_coordinate(rng: &mut StdRng, radius: f32, extent: f32) -> f32 {
    let min = radius.ceil() as i64;
    let max = (extent - radius).floor() as i64;
    if min > max {
        return extent / 2.0;
    }
    rng.gen_range(min..=max) as f32
}

/// Builder for `Simulator`
pub struct SimulatorBuilder {
    model: IntegrationModel,
    max_speed: f32,
    delta_time: Option<f32>,
    radius: f32,
    active_growth: f32,
    mass: Option<f32>,
    bounds: Vec2,
    seed: Option<u64>,
}

impl SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Which integration model moves the bubbles.
    pub fn integration_model(mut self, model: IntegrationModel) -> Self {
        self.model = model;
        self
    }

    /// Upper bound for each velocity component under the simple model.
    pub fn max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// How much time a simulation step should simulate.
    /// Defaults to `0.1` for the simple model and `0.01` for attraction.
    pub fn delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = Some(delta_time);
        self
    }

    /// Radius of newly created bubbles.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// How much a bubble grows while it is selected.
    pub fn active_growth(mut self, growth: f32) -> Self {
        self.active_growth = growth;
        self
    }

    /// Mass of newly created bubbles. Defaults to `10 * radius`.
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Initial viewport size. A canvas overrides it every frame.
    pub fn bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Vec2::new(width, height);
        self
    }

    /// Seed for spawn positions. Without one the positions differ every run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Constructs a instance of `Simulator`
    pub fn build(self) -> Result<Simulator, BubbleError> {
        let delta_time = self
            .delta_time
            .unwrap_or_else(|| self.model.default_delta_time());
        let mass = self.mass.unwrap_or(self.radius * 10.0);

        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.max_speed) {
            return Err(BubbleError::InvalidConfig("max speed must be positive"));
        }
        if !positive(delta_time) {
            return Err(BubbleError::InvalidConfig("delta time must be positive"));
        }
        if !positive(self.radius) {
            return Err(BubbleError::InvalidRadius(self.radius));
        }
        if !(self.active_growth.is_finite() && self.radius + self.active_growth > 0.0) {
            return Err(BubbleError::InvalidConfig("active radius must be positive"));
        }
        if !positive(mass) {
            return Err(BubbleError::InvalidMass(mass));
        }
        if !canvas::is_usable(self.bounds) {
            return Err(BubbleError::InvalidConfig("bounds must be positive"));
        }
        if let IntegrationModel::Attraction {
            strength,
            min_distance,
        } = self.model
        {
            if !strength.is_finite() || !positive(min_distance) {
                return Err(BubbleError::InvalidConfig(
                    "attraction needs a finite strength and a positive minimum distance",
                ));
            }
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Simulator {
            bubbles: BubbleSet::new(),
            selection: Selection::new(),
            rng,
            bounds: self.bounds,
            model: self.model,
            max_speed: self.max_speed,
            delta_time,
            radius: self.radius,
            active_radius: self.radius + self.active_growth,
            mass,
        })
    }
}

impl Default for SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    fn default() -> Self {
        Self {
            model: IntegrationModel::Simple,
            max_speed: 15.0,
            delta_time: None,
            radius: 50.0,
            active_growth: 10.0,
            mass: None,
            bounds: Vec2::new(500.0, 500.0),
            seed: None,
        }
    }
}
