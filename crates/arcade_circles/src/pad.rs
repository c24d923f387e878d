//! The click-to-place pad.
//!
//! The first click drops circle one, the second drops circle two and
//! judges the pair, the third clears the pad.

use super::circle::{Circle, intersects};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Smallest radius a placed circle can get.
pub const MIN_RADIUS: f64 = 20.0;

/// Radii are drawn from `[MIN_RADIUS, MAX_RADIUS)`.
pub const MAX_RADIUS: f64 = 70.0;

/// Whether the two circles on the pad touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The circles overlap or are tangent.
    Overlap,
    /// The circles are apart.
    Apart,
}

impl Verdict {
    /// Announcement for this verdict.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Overlap => "Circles Overlap!",
            Verdict::Apart => "Circles Don't Overlap",
        }
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PadEvent {
    /// The first circle was placed.
    First(Circle),
    /// The second circle was placed and the pair judged.
    Second(Circle, Verdict),
    /// The pad was full and has been cleared.
    Cleared,
}

/// Up to two circles placed by clicking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CirclePad {
    circles: Vec<Circle>,
}

impl CirclePad {
    /// An empty pad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Circles currently on the pad.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// The verdict once both circles are down.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.circles.as_slice() {
            [a, b] => Some(if intersects(a, b) {
                Verdict::Overlap
            } else {
                Verdict::Apart
            }),
            _ => None,
        }
    }

    /// Handles a click at `(x, y)` with a random radius.
    #[instrument(skip(self, rng))]
    pub fn click<R: Rng + ?Sized>(self, x: f64, y: f64, rng: &mut R) -> (Self, PadEvent) {
        let radius = rng.random_range(MIN_RADIUS..MAX_RADIUS);
        self.place(Circle::new(x, y, radius))
    }

    /// Handles a click that drops the given circle.
    #[instrument(skip(self))]
    pub fn place(mut self, circle: Circle) -> (Self, PadEvent) {
        match self.circles.len() {
            0 => {
                debug!(?circle, "Placed first circle");
                self.circles.push(circle);
                (self, PadEvent::First(circle))
            }
            1 => {
                self.circles.push(circle);
                let verdict = self.verdict().unwrap_or(Verdict::Apart);
                info!(?circle, ?verdict, "Placed second circle");
                (self, PadEvent::Second(circle, verdict))
            }
            _ => {
                debug!("Pad full, clearing");
                (Self::new(), PadEvent::Cleared)
            }
        }
    }

    /// Clears the pad.
    pub fn reset(self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let pad = CirclePad::new();
        let (pad, event) = pad.place(Circle::new(0.0, 0.0, 5.0));
        assert!(matches!(event, PadEvent::First(_)));
        assert_eq!(pad.verdict(), None);

        let (pad, event) = pad.place(Circle::new(10.0, 0.0, 5.0));
        assert_eq!(event, PadEvent::Second(Circle::new(10.0, 0.0, 5.0), Verdict::Overlap));
        assert_eq!(pad.verdict(), Some(Verdict::Overlap));

        let (pad, event) = pad.place(Circle::new(99.0, 99.0, 5.0));
        assert_eq!(event, PadEvent::Cleared);
        assert!(pad.circles().is_empty());
    }

    #[test]
    fn test_event_verdict_matches_pad() {
        let (pad, _) = CirclePad::new().place(Circle::new(0.0, 0.0, 5.0));
        let (pad, event) = pad.place(Circle::new(0.0, 10.0, 5.0));
        assert_eq!(event, PadEvent::Second(Circle::new(0.0, 10.0, 5.0), Verdict::Overlap));
        assert_eq!(pad.verdict(), Some(Verdict::Overlap));
    }

    #[test]
    fn test_apart() {
        let (pad, _) = CirclePad::new().place(Circle::new(0.0, 0.0, 5.0));
        let (_, event) = pad.place(Circle::new(11.0, 0.0, 5.0));
        assert_eq!(event, PadEvent::Second(Circle::new(11.0, 0.0, 5.0), Verdict::Apart));
        assert_eq!(Verdict::Apart.message(), "Circles Don't Overlap");
    }
}
