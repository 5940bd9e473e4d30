//! Plain screen-space geometry shared by the layout engine.
//!
//! Coordinates follow the flipped (top-left origin) convention used for
//! window frames: `y` grows downward, so `min_y` is the top edge.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self { Self { origin, size } }

    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn min_x(&self) -> f64 { self.origin.x }

    pub fn min_y(&self) -> f64 { self.origin.y }

    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }

    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }

    pub fn width(&self) -> f64 { self.size.width }

    pub fn height(&self) -> f64 { self.size.height }

    /// Shrinks the rect by the given per-edge amounts. Each axis collapses to
    /// a zero-sized span at the midpoint of the insets instead of inverting.
    pub fn inset(&self, top: f64, left: f64, bottom: f64, right: f64) -> Rect {
        let (x, width) = inset_axis(self.origin.x, self.size.width, left, right);
        let (y, height) = inset_axis(self.origin.y, self.size.height, top, bottom);
        Rect::from_xywh(x, y, width, height)
    }
}

fn inset_axis(origin: f64, extent: f64, lead: f64, trail: f64) -> (f64, f64) {
    let remaining = extent - lead - trail;
    if remaining >= 0.0 {
        (origin + lead, remaining)
    } else {
        let total = lead + trail;
        let split = if total > 0.0 { extent * lead / total } else { extent / 2.0 };
        (origin + split, 0.0)
    }
}

pub trait Round {
    fn round(&self) -> Self;
}

impl Round for Rect {
    /// Rounds each edge independently so that rects sharing an edge before
    /// rounding still share it afterwards.
    fn round(&self) -> Self {
        let min_x = self.min_x().round();
        let min_y = self.min_y().round();
        let max_x = self.max_x().round();
        let max_y = self.max_y().round();
        Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeometryParseError {
    #[error("expected {expected} comma-separated numbers, got {found}")]
    WrongArity { expected: usize, found: usize },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("non-finite value `{0}`")]
    NotFinite(String),
    #[error("negative extent in `{0}`")]
    NegativeExtent(String),
}

fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N], GeometryParseError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(GeometryParseError::WrongArity { expected: N, found: parts.len() });
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        let value: f64 =
            part.parse().map_err(|_| GeometryParseError::InvalidNumber(part.to_string()))?;
        if !value.is_finite() {
            return Err(GeometryParseError::NotFinite(part.to_string()));
        }
        *slot = value;
    }
    Ok(out)
}

impl FromStr for Point {
    type Err = GeometryParseError;

    /// Parses `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_numbers::<2>(s)?;
        Ok(Point::new(x, y))
    }
}

impl FromStr for Rect {
    type Err = GeometryParseError;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, width, height] = parse_numbers::<4>(s)?;
        if width < 0.0 || height < 0.0 {
            return Err(GeometryParseError::NegativeExtent(s.to_string()));
        }
        Ok(Rect::from_xywh(x, y, width, height))
    }
}
