use serde::{Deserialize, Serialize};

use super::direction::WindowDirection;
use crate::common::geometry::{Rect, Round};

const HALF: f64 = 1.0 / 2.0;
const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;
const ALMOST_MAXIMIZE_INSET: f64 = 0.5 / 10.0;
const ALMOST_MAXIMIZE_EXTENT: f64 = 9.0 / 10.0;

/// Offset and extent expressed as fractions of a container rect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractionalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FractionalRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn max_x(&self) -> f64 { self.x + self.width }

    pub fn max_y(&self) -> f64 { self.y + self.height }

    /// Maps the fractions onto `container` and snaps every edge to whole
    /// pixels. Edges are computed from the container origin independently,
    /// so two layouts that share a fractional edge share the pixel edge too.
    pub fn apply_to(&self, container: Rect) -> Rect {
        let (ox, oy) = (container.min_x(), container.min_y());
        let (w, h) = (container.width(), container.height());
        let min_x = ox + self.x * w;
        let min_y = oy + self.y * h;
        let max_x = ox + self.max_x() * w;
        let max_y = oy + self.max_y() * h;
        Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y).round()
    }
}

/// Fractional target for a direction, or `None` when the direction has to
/// be resolved some other way (pixel deltas, monitor switching, hiding...).
pub fn resolve(direction: WindowDirection) -> Option<FractionalRect> {
    use WindowDirection::*;
    let rect = FractionalRect::new;
    Some(match direction {
        Maximize | Fullscreen => rect(0.0, 0.0, 1.0, 1.0),
        AlmostMaximize => rect(
            ALMOST_MAXIMIZE_INSET,
            ALMOST_MAXIMIZE_INSET,
            ALMOST_MAXIMIZE_EXTENT,
            ALMOST_MAXIMIZE_EXTENT,
        ),

        TopHalf => rect(0.0, 0.0, 1.0, HALF),
        RightHalf => rect(HALF, 0.0, HALF, 1.0),
        BottomHalf => rect(0.0, HALF, 1.0, HALF),
        LeftHalf => rect(0.0, 0.0, HALF, 1.0),

        TopLeftQuarter => rect(0.0, 0.0, HALF, HALF),
        TopRightQuarter => rect(HALF, 0.0, HALF, HALF),
        BottomRightQuarter => rect(HALF, HALF, HALF, HALF),
        BottomLeftQuarter => rect(0.0, HALF, HALF, HALF),

        RightThird => rect(TWO_THIRDS, 0.0, THIRD, 1.0),
        RightTwoThirds => rect(THIRD, 0.0, TWO_THIRDS, 1.0),
        HorizontalCenterThird => rect(THIRD, 0.0, THIRD, 1.0),
        LeftThird => rect(0.0, 0.0, THIRD, 1.0),
        LeftTwoThirds => rect(0.0, 0.0, TWO_THIRDS, 1.0),

        TopThird => rect(0.0, 0.0, 1.0, THIRD),
        TopTwoThirds => rect(0.0, 0.0, 1.0, TWO_THIRDS),
        VerticalCenterThird => rect(0.0, THIRD, 1.0, THIRD),
        BottomThird => rect(0.0, TWO_THIRDS, 1.0, THIRD),
        BottomTwoThirds => rect(0.0, THIRD, 1.0, TWO_THIRDS),

        NoAction | Undo | InitialFrame | Hide | Minimize | MacOSCenter | Center | NextScreen
        | PreviousScreen | Larger | Smaller | ShrinkTop | ShrinkBottom | ShrinkRight
        | ShrinkLeft | GrowTop | GrowBottom | GrowRight | GrowLeft | Custom | Cycle => {
            return None;
        }
    })
}

impl WindowDirection {
    pub fn frame_multiply_values(self) -> Option<FractionalRect> { resolve(self) }
}
