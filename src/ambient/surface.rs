use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color at `alpha`, clamped into `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// CSS `rgba(...)` notation, as canvas style setters expect.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// A radial gradient fading from `color` at `center` to transparent at
/// `radius`, painted over `bounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
    pub bounds: Rect,
}

/// A 2D drawing target. Drawing is infallible on a valid surface.
pub trait Surface {
    fn size(&self) -> Viewport;
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn stroke_path(&mut self, points: &[Point], stroke: Stroke);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn fill_glow(&mut self, glow: &Glow);
}
