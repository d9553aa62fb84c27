use serde::{Deserialize, Serialize};

/// A 2D point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::zero()
    }
}

/// A 2D size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The uniform scale percentage at which `content` fits entirely inside
    /// this size: `min(w/cw, h/ch) × 100`.
    ///
    /// Returns 0.0 when the content has a zero dimension.
    pub fn fit_scale_percent(&self, content: Size2D) -> f64 {
        if content.width == 0.0 || content.height == 0.0 {
            return 0.0;
        }
        (self.width / content.width).min(self.height / content.height) * 100.0
    }

    /// The center point of this size.
    pub fn center(&self) -> Point2D {
        Point2D::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A static 2D layer transform: position, uniform-axis scale, and anchor.
///
/// Scale is expressed as a percentage per axis (100 = natural size),
/// matching the units every animated scale value uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Position of the anchor point on the canvas.
    pub position: Point2D,
    /// Scale percentages per axis (100.0 = unscaled).
    pub scale: Point2D,
    /// Anchor point (0.0–1.0 normalized, 0.5/0.5 = center).
    pub anchor: Point2D,
}

impl Transform2D {
    /// Identity transform: origin position, 100% scale, centered anchor.
    pub fn identity() -> Self {
        Self {
            position: Point2D::zero(),
            scale: Point2D::new(100.0, 100.0),
            anchor: Point2D::new(0.5, 0.5),
        }
    }

    /// Builder: set position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point2D::new(x, y);
        self
    }

    /// Builder: set a uniform scale percentage.
    pub fn scaled(mut self, percent: f64) -> Self {
        self.scale = Point2D::new(percent, percent);
        self
    }

    /// Builder: set the normalized anchor point.
    pub fn anchored(mut self, x: f64, y: f64) -> Self {
        self.anchor = Point2D::new(x, y);
        self
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
