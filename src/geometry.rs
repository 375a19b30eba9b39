//! Coordinate math shared by the templates.
//!
//! Everything here is a pure function of its numeric inputs. Values are only
//! turned into text at the edge, always with one decimal place, so rendered
//! documents stay byte-stable across runs.

use std::f64::consts::TAU;

pub const CANVAS_WIDTH: f64 = 1200.0;
pub const CANVAS_HEIGHT: f64 = 720.0;

/// Middle of the 1200x720 canvas; every radial composition orbits this point.
pub const CENTER: Point = Point { x: 600.0, y: 360.0 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `x,y` with one decimal, the form used by quadratic path data.
    pub fn comma_pair(&self) -> String {
        format!("{},{}", fmt1(self.x), fmt1(self.y))
    }

    /// `x y` with one decimal, the form used by polygon path data.
    pub fn space_pair(&self) -> String {
        format!("{} {}", fmt1(self.x), fmt1(self.y))
    }
}

/// Fixed one-decimal formatting for anything embedded in markup.
pub fn fmt1(value: f64) -> String {
    format!("{value:.1}")
}

/// Polar to cartesian around `center`.
pub fn polar(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
}

/// Angle of slot `index` out of `count` evenly spread slots.
pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f64 / count as f64
}

/// An elliptical orbit whose radius breathes with the slot index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub center: Point,
    pub base_radius: f64,
    pub modulation: f64,
    pub frequency: f64,
    /// Vertical compression; 1.0 would be a circle.
    pub aspect: f64,
}

impl Orbit {
    /// Orbit used by the network field.
    pub const NETWORK: Orbit = Orbit {
        center: CENTER,
        base_radius: 200.0,
        modulation: 80.0,
        frequency: 0.7,
        aspect: 0.7,
    };

    pub fn radius(&self, index: usize) -> f64 {
        self.base_radius + self.modulation * (index as f64 * self.frequency).sin()
    }

    /// Position of slot `index` out of `count`.
    pub fn place(&self, index: usize, count: usize) -> Point {
        let angle = slot_angle(index, count);
        let radius = self.radius(index);
        Point::new(
            self.center.x + angle.cos() * radius,
            self.center.y + angle.sin() * radius * self.aspect,
        )
    }
}

/// Evenly spaced x positions along a horizontal track.
pub fn linear_x(start: f64, spacing: f64, index: usize) -> f64 {
    start + index as f64 * spacing
}

/// Apex at `inner`, base corners at `outer` offset by `half_width` radians either side.
pub fn wedge(center: Point, angle: f64, inner: f64, outer: f64, half_width: f64) -> [Point; 3] {
    [
        polar(center, angle, inner),
        polar(center, angle + half_width, outer),
        polar(center, angle - half_width, outer),
    ]
}
