//! Collision events and their log records

use serde::Serialize;

use super::body::Body;
use crate::fixed;

/// What was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollisionKind {
    /// Block 1 bounced off the wall
    Wall,
    /// The two blocks hit each other
    Block,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "wall",
            CollisionKind::Block => "block",
        }
    }
}

/// Snapshot taken right after a collision was resolved
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionEvent {
    /// Running collision count including this one (1-based)
    pub index: u64,
    pub kind: CollisionKind,
    /// Post-collision state of block 1
    pub body1: Body,
    /// Post-collision state of block 2
    pub body2: Body,
}

impl CollisionEvent {
    /// One log line: `index\tkind\tx1=..\tv1=..\tx2=..\tv2=..\n`
    ///
    /// Positions are block centers, everything at 4 decimals.
    pub fn record(&self) -> String {
        format!(
            "{}\t{}\tx1={}\tv1={}\tx2={}\tv2={}\n",
            self.index,
            self.kind.as_str(),
            fixed(self.body1.center(), 4),
            fixed(self.body1.velocity, 4),
            fixed(self.body2.center(), 4),
            fixed(self.body2.velocity, 4),
        )
    }
}

/// Concatenate the records of one advance call
pub fn format_batch(events: &[CollisionEvent]) -> String {
    events.iter().map(CollisionEvent::record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: CollisionKind, v1: f64, v2: f64) -> CollisionEvent {
        CollisionEvent {
            index: 7,
            kind,
            body1: Body::new(0.0, v1),
            body2: Body::new(200.5, v2),
        }
    }

    #[test]
    fn test_record_format() {
        let e = event(CollisionKind::Wall, 1.0, -0.25);
        assert_eq!(
            e.record(),
            "7\twall\tx1=15.0000\tv1=1.0000\tx2=215.5000\tv2=-0.2500\n"
        );
    }

    #[test]
    fn test_record_no_negative_zero() {
        let e = event(CollisionKind::Block, -0.0, 0.0);
        assert!(e.record().contains("v1=0.0000"));
        assert!(e.record().starts_with("7\tblock\t"));
    }

    #[test]
    fn test_format_batch_concatenates() {
        let batch = format_batch(&[
            event(CollisionKind::Wall, 1.0, 0.0),
            event(CollisionKind::Block, 0.0, 1.0),
        ]);
        assert_eq!(batch.lines().count(), 2);
        assert!(batch.ends_with('\n'));
        assert!(format_batch(&[]).is_empty());
    }
}
