use glam::Vec2;

use crate::{error::BubbleError, properties::Bubble};

/// Separation axis for two bubbles whose centers coincide.
const FALLBACK_NORMAL: Vec2 = Vec2::X;

/// Two overlapping bubbles found during one step.
///
/// `a` and `b` index into the slice that was passed to [`detect_all`] and are
/// only valid until that slice changes shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub a: usize,
    pub b: usize,
    /// Center of `b` minus center of `a`, not normalized
    pub delta: Vec2,
    pub distance: f32,
}

impl Collision {
    pub fn overlap(&self, bubbles: &[Bubble]) -> f32 {
        bubbles[self.a].radius() + bubbles[self.b].radius() - self.distance
    }
}

/// Returns a collision for every pair `i < j` whose circles overlap, in
/// lexicographic pair order.
pub fn detect_all(bubbles: &[Bubble]) -> Vec<Collision> {
    let mut collisions = vec![];

    for (i, b1) in bubbles.iter().enumerate() {
        for (j, b2) in bubbles.iter().enumerate().skip(i + 1) {
            let delta = b2.position - b1.position;
            let distance = delta.length();
            if distance < b1.radius() + b2.radius() {
                collisions.push(Collision {
                    a: i,
                    b: j,
                    delta,
                    distance,
                });
            }
        }
    }

    collisions
}

/// Separates the two bubbles of `collision` and bounces them apart with an
/// elastic impulse along the collision normal.
///
/// The bubbles are pushed apart symmetrically by half the overlap each. The
/// impulse is weighted by inverse mass. Bubbles sharing a center have no
/// normal of their own and are split along +x instead, so a stacked pair never
/// stays stacked. A non-finite distance leaves both bubbles untouched.
pub fn resolve(bubbles: &mut [Bubble], collision: &Collision) -> Result<(), BubbleError> {
    let (o1, o2) = pair_mut(bubbles, collision.a, collision.b);

    if !collision.distance.is_finite() {
        return Err(BubbleError::DegenerateCollision {
            a: o1.label().to_string(),
            b: o2.label().to_string(),
        });
    }

    let (normal, distance) = if collision.distance > 0.0 {
        (collision.delta / collision.distance, collision.distance)
    } else {
        (FALLBACK_NORMAL, 0.0)
    };

    let s = o1.radius() + o2.radius() - distance;
    o1.position -= normal * s / 2.0;
    o2.position += normal * s / 2.0;

    let relative_velocity = o2.velocity - o1.velocity;
    let k = -2.0 * relative_velocity.dot(normal) / (1.0 / o1.mass() + 1.0 / o2.mass());
    o1.velocity -= k * normal / o1.mass();
    o2.velocity += k * normal / o2.mass();

    Ok(())
}

fn pair_mut(bubbles: &mut [Bubble], a: usize, b: usize) -> (&mut Bubble, &mut Bubble) {
    debug_assert!(a < b);
    let (left, right) = bubbles.split_at_mut(b);
    (&mut left[a], &mut right[0])
}
