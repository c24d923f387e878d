//! Drop two circles, see whether they touch.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod circle;
mod pad;

pub use circle::{Circle, intersects};
pub use pad::{CirclePad, MAX_RADIUS, MIN_RADIUS, PadEvent, Verdict};
