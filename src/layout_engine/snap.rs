//! Pointer-driven snap zones.
//!
//! While a window is dragged the caller samples the cursor and asks which
//! layout the drop would produce. Anything inside the dead zone is a no-op;
//! leaving it across an edge picks a half, quarter, third or maximize
//! depending on where along that edge the cursor sits.
//!
//! The previous suggestion is passed in on every call rather than kept
//! here, so classification stays a pure function of its inputs.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::direction::WindowDirection;
use super::frame::resolve;
use crate::common::config::EdgeMargins;
use crate::common::geometry::{Point, Rect};

/// Suggested layout for a pointer position, given the prior suggestion.
///
/// Edges are tested left, right, top, bottom; the first one the pointer is
/// past wins, so a pointer beyond both the left and top edges of the dead
/// zone is classified by the left edge.
pub fn classify(
    pointer: Point,
    screen_frame: Rect,
    dead_zone: Rect,
    prior: WindowDirection,
) -> WindowDirection {
    let direction = if pointer.x < dead_zone.min_x() {
        left_edge(pointer, screen_frame)
    } else if pointer.x > dead_zone.max_x() {
        right_edge(pointer, screen_frame)
    } else if pointer.y < dead_zone.min_y() {
        top_edge(pointer, screen_frame)
    } else if pointer.y > dead_zone.max_y() {
        bottom_edge(pointer, screen_frame, prior)
    } else {
        WindowDirection::NoAction
    };

    if direction != prior {
        trace!(?pointer, ?prior, ?direction, "snap direction changed");
    }
    direction
}

/// Zero, negative and NaN extents are not split into bands.
fn subdivides(extent: f64) -> bool { extent > 0.0 }

/// Where a vertical edge band splits into corner / half / corner.
enum Band {
    Top,
    Middle,
    Bottom,
}

fn vertical_band(pointer: Point, screen_frame: Rect) -> Band {
    let height = screen_frame.height();
    if !subdivides(height) {
        return Band::Middle;
    }
    let max_y = screen_frame.max_y();
    if pointer.y < max_y - height * 7.0 / 8.0 {
        Band::Top
    } else if pointer.y > max_y - height / 8.0 {
        Band::Bottom
    } else {
        Band::Middle
    }
}

fn left_edge(pointer: Point, screen_frame: Rect) -> WindowDirection {
    match vertical_band(pointer, screen_frame) {
        Band::Top => WindowDirection::TopLeftQuarter,
        Band::Middle => WindowDirection::LeftHalf,
        Band::Bottom => WindowDirection::BottomLeftQuarter,
    }
}

fn right_edge(pointer: Point, screen_frame: Rect) -> WindowDirection {
    match vertical_band(pointer, screen_frame) {
        Band::Top => WindowDirection::TopRightQuarter,
        Band::Middle => WindowDirection::RightHalf,
        Band::Bottom => WindowDirection::BottomRightQuarter,
    }
}

fn top_edge(pointer: Point, screen_frame: Rect) -> WindowDirection {
    let width = screen_frame.width();
    if !subdivides(width) {
        return WindowDirection::Maximize;
    }
    let max_x = screen_frame.max_x();
    if pointer.x < max_x - width * 4.0 / 5.0 || pointer.x > max_x - width / 5.0 {
        WindowDirection::TopHalf
    } else {
        WindowDirection::Maximize
    }
}

fn bottom_edge(pointer: Point, screen_frame: Rect, prior: WindowDirection) -> WindowDirection {
    let width = screen_frame.width();
    if !subdivides(width) {
        return WindowDirection::BottomHalf;
    }
    let max_x = screen_frame.max_x();
    if pointer.x < max_x - width * 2.0 / 3.0 {
        WindowDirection::LeftThird
    } else if pointer.x > max_x - width / 3.0 {
        WindowDirection::RightThird
    } else {
        two_thirds_extension(prior).unwrap_or(WindowDirection::BottomHalf)
    }
}

/// A drag that already reached a bottom third keeps growing into two thirds
/// when it moves back over the middle, instead of dropping to the half.
///
/// Only the directions listed here extend; new ones must be added explicitly.
fn two_thirds_extension(prior: WindowDirection) -> Option<WindowDirection> {
    match prior {
        WindowDirection::LeftThird | WindowDirection::LeftTwoThirds => {
            Some(WindowDirection::LeftTwoThirds)
        }
        WindowDirection::RightThird | WindowDirection::RightTwoThirds => {
            Some(WindowDirection::RightTwoThirds)
        }
        _ => None,
    }
}

/// A classified direction together with the frame it would produce.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub direction: WindowDirection,
    pub frame: Option<Rect>,
}

/// The geometry of one screen's snap zones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapZones {
    pub screen_frame: Rect,
    pub dead_zone: Rect,
}

impl SnapZones {
    pub fn new(screen_frame: Rect, dead_zone: Rect) -> Self { Self { screen_frame, dead_zone } }

    /// Dead zone derived by insetting the screen frame by `margins`.
    pub fn with_margins(screen_frame: Rect, margins: &EdgeMargins) -> Self {
        let dead_zone =
            screen_frame.inset(margins.top, margins.left, margins.bottom, margins.right);
        Self { screen_frame, dead_zone }
    }

    pub fn classify(&self, pointer: Point, prior: WindowDirection) -> WindowDirection {
        classify(pointer, self.screen_frame, self.dead_zone, prior)
    }

    /// Classifies the pointer and resolves the result against the screen
    /// frame. `frame` is `None` for directions without a fractional layout.
    pub fn target(&self, pointer: Point, prior: WindowDirection) -> SnapTarget {
        let direction = self.classify(pointer, prior);
        let frame = resolve(direction).map(|fraction| fraction.apply_to(self.screen_frame));
        SnapTarget { direction, frame }
    }
}
