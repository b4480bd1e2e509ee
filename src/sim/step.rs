//! Exact event-driven stepping
//!
//! Advances both blocks across a time budget by jumping from collision to
//! collision. Collision times are solved in closed form, so the size of the
//! budget has no effect on accuracy: a budget of 1 and a budget of 1000 end
//! in the same state (up to rounding).

use super::body::Body;
use super::event::{CollisionEvent, CollisionKind};

/// Result of one `advance` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Collisions in the order they happened
    pub events: Vec<CollisionEvent>,
    /// Time actually simulated
    pub elapsed: f64,
    /// Budget left over because the event cap was hit (0 otherwise)
    pub deferred: f64,
}

impl StepOutcome {
    pub fn wall_hits(&self) -> usize {
        self.count(CollisionKind::Wall)
    }

    pub fn block_hits(&self) -> usize {
        self.count(CollisionKind::Block)
    }

    fn count(&self, kind: CollisionKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

/// Time until block 1 reaches the wall, or infinity if it is not heading there
#[inline]
fn time_to_wall(body1: &Body) -> f64 {
    if body1.velocity < 0.0 {
        (body1.position / -body1.velocity).max(0.0)
    } else {
        f64::INFINITY
    }
}

/// Time until block 1's right edge meets block 2, or infinity if they are not closing
#[inline]
fn time_to_block(body1: &Body, body2: &Body) -> f64 {
    let gap = body2.position - body1.leading_edge();
    let closing = body1.velocity - body2.velocity;
    if closing > 0.0 {
        (gap / closing).max(0.0)
    } else {
        f64::INFINITY
    }
}

/// 1-D elastic collision response
///
/// Returns post-collision velocities `(v1, v2)` for pre-collision velocities
/// `u1, u2` and masses `m1, m2`. Conserves momentum and kinetic energy.
#[inline]
pub fn elastic_velocities(u1: f64, u2: f64, m1: f64, m2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1 = ((m1 - m2) / total) * u1 + (2.0 * m2 / total) * u2;
    let v2 = (2.0 * m1 / total) * u1 + ((m2 - m1) / total) * u2;
    (v1, v2)
}

/// Advance both blocks by `budget`, resolving every collision inside it
///
/// `collisions` is the running collision counter; it is incremented once per
/// event and each event carries the new value. At most `max_events` events
/// are resolved; if the cap is reached the unspent time is returned in
/// `StepOutcome::deferred` so the caller can carry it into the next call.
///
/// When the wall and the block are hit at the same instant the wall is
/// resolved first.
pub fn advance(
    body1: &mut Body,
    body2: &mut Body,
    budget: f64,
    collisions: &mut u64,
    max_events: usize,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    let mut remaining = budget;

    while remaining > 0.0 {
        if outcome.events.len() >= max_events {
            log::warn!(
                "event cap of {} reached, deferring {} time units",
                max_events,
                remaining
            );
            outcome.deferred = remaining;
            break;
        }

        let t_wall = time_to_wall(body1);
        let t_block = time_to_block(body1, body2);
        let t_next = t_wall.min(t_block).min(remaining);

        body1.drift(t_next);
        body2.drift(t_next);
        remaining -= t_next;
        outcome.elapsed += t_next;

        let kind = if t_next == t_wall {
            body1.velocity = -body1.velocity;
            CollisionKind::Wall
        } else if t_next == t_block {
            let (v1, v2) =
                elastic_velocities(body1.velocity, body2.velocity, body1.mass(), body2.mass());
            body1.velocity = v1;
            body2.velocity = v2;
            CollisionKind::Block
        } else {
            break;
        };

        *collisions += 1;
        outcome.events.push(CollisionEvent {
            index: *collisions,
            kind,
            body1: *body1,
            body2: *body2,
        });
    }

    outcome
}
