//! Bounding box accumulation for CFF outlines.

use itertools::Itertools;
use tinyvec::ArrayVec;

pub(crate) mod charstring;

/// The bounding box of a glyph outline, in font units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Tracks the pen position while a charstring executes and folds every line and curve
/// segment into the glyph's bounding box.
///
/// The bounding box only exists once a segment has been drawn, moves alone don't create one.
/// A segment with a NaN or infinite coordinate marks the outline as overflowed.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    x: f64,
    y: f64,
    bbox: Option<BBox>,
    overflowed: bool,
}

impl BBox {
    fn union(self, other: BBox) -> BBox {
        BBox {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    #[cfg(test)]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn bbox(&self) -> Option<BBox> {
        self.bbox
    }

    /// Whether a segment had a NaN or infinite coordinate.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    fn extend(&mut self, extent: BBox) {
        if !extent.is_finite() {
            self.overflowed = true;
        }
        self.bbox = Some(match self.bbox {
            Some(bbox) => bbox.union(extent),
            None => extent,
        });
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn line_by(&mut self, dx: f64, dy: f64) {
        let x = self.x + dx;
        let y = self.y + dy;
        if !all_finite(&[self.x, self.y, x, y]) {
            self.overflowed = true;
        }
        self.extend(BBox {
            x_min: self.x.min(x),
            x_max: self.x.max(x),
            y_min: self.y.min(y),
            y_max: self.y.max(y),
        });
        self.x = x;
        self.y = y;
    }

    /// Draw a cubic Bézier from the pen position. Each control point is relative to the
    /// previous one.
    pub fn curve_by(&mut self, dxa: f64, dya: f64, dxb: f64, dyb: f64, dxc: f64, dyc: f64) {
        let xa = self.x + dxa;
        let ya = self.y + dya;
        let xb = xa + dxb;
        let yb = ya + dyb;
        let xc = xb + dxc;
        let yc = yb + dyc;
        if !all_finite(&[self.x, self.y, xa, ya, xb, yb, xc, yc]) {
            self.overflowed = true;
        }

        let (x_min, x_max) = bezier_extent(self.x, xa, xb, xc);
        let (y_min, y_max) = bezier_extent(self.y, ya, yb, yc);
        self.extend(BBox {
            x_min,
            x_max,
            y_min,
            y_max,
        });
        self.x = xc;
        self.y = yc;
    }
}

fn all_finite(coords: &[f64]) -> bool {
    coords.iter().all(|coord| coord.is_finite())
}

/// The range covered by one coordinate of a cubic Bézier curve.
///
/// Only the end points and the interior extrema are considered. Control points that lie
/// outside the curve do not widen the range.
pub fn bezier_extent(p0: f64, p1: f64, p2: f64, p3: f64) -> (f64, f64) {
    let mut candidates = ArrayVec::<[f64; 4]>::new();
    candidates.push(p0);
    candidates.push(p3);
    for t in derivative_roots(p0, p1, p2, p3) {
        if t > 0.0 && t < 1.0 {
            candidates.push(bezier_at(p0, p1, p2, p3, t));
        }
    }

    candidates
        .into_iter()
        .minmax()
        .into_option()
        .unwrap_or((p0, p3))
}

// Roots of the derivative a*t^2 + b*t + c (scaled by 1/3).
fn derivative_roots(p0: f64, p1: f64, p2: f64, p3: f64) -> ArrayVec<[f64; 2]> {
    let a = p3 - p0 + 3.0 * (p1 - p2);
    let b = 2.0 * (p0 + p2) - 4.0 * p1;
    let c = p1 - p0;

    let mut roots = ArrayVec::new();
    if a == 0.0 {
        if b != 0.0 {
            roots.push(-c / b);
        }
    } else {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let sd = discriminant.sqrt();
            let den = a + a;
            roots.push((-b + sd) / den);
            roots.push((-b - sd) / den);
        }
    }
    roots
}

fn bezier_at(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let k = 1.0 - t;
    p0 * k * k * k + 3.0 * k * t * (p1 * k + p2 * t) + p3 * t * t * t
}
