//! Catmull-Rom curve emission into cubic Bézier paths.

use crate::foundation::core::{BezPath, Point};

const EPSILON: f64 = 1e-12;

/// Streams points through a Catmull-Rom spline, writing cubic segments to a [`BezPath`].
///
/// `alpha` selects the knot parameterization: 0 uniform, 0.5 centripetal, 1 chordal. The
/// curve passes through every point; the first and last point only steer the tangent of
/// the neighbouring segment.
struct CatmullRom<'a> {
    path: &'a mut BezPath,
    alpha: f64,
    connect: bool,
    count: usize,
    p0: Point,
    p1: Point,
    p2: Point,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl<'a> CatmullRom<'a> {
    /// `connect` joins the first point to the current path end with a line instead of
    /// starting a new subpath.
    fn start(path: &'a mut BezPath, alpha: f64, connect: bool) -> Self {
        let nan = Point::new(f64::NAN, f64::NAN);
        Self {
            path,
            alpha,
            connect,
            count: 0,
            p0: nan,
            p1: nan,
            p2: nan,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn point(&mut self, p: Point) {
        if self.count > 0 {
            let d2 = (self.p2 - p).hypot2();
            self.l23_2a = d2.powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }

        match self.count {
            0 => {
                self.count = 1;
                if self.connect {
                    self.path.line_to(p);
                } else {
                    self.path.move_to(p);
                }
            }
            1 => self.count = 2,
            2 => {
                self.count = 3;
                self.segment(p);
            }
            _ => self.segment(p),
        }

        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = p;
    }

    fn end(mut self) {
        match self.count {
            2 => self.path.line_to(self.p2),
            3.. => {
                let last = self.p2;
                self.point(last);
            }
            _ => {}
        }
    }

    // Cubic from p1 to p2 whose control points come from the neighbours p0 and `p`.
    fn segment(&mut self, p: Point) {
        let mut c1 = self.p1;
        let mut c2 = self.p2;

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            c1 = Point::new(
                (c1.x * a - self.p0.x * self.l12_2a + self.p2.x * self.l01_2a) / n,
                (c1.y * a - self.p0.y * self.l12_2a + self.p2.y * self.l01_2a) / n,
            );
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            c2 = Point::new(
                (c2.x * b + self.p1.x * self.l23_2a - p.x * self.l12_2a) / m,
                (c2.y * b + self.p1.y * self.l23_2a - p.y * self.l12_2a) / m,
            );
        }

        self.path.curve_to(c1, c2, self.p2);
    }
}

/// Open Catmull-Rom curve through `points`.
pub fn catmull_rom_line(points: &[Point], alpha: f64) -> BezPath {
    let mut path = BezPath::new();
    let mut curve = CatmullRom::start(&mut path, alpha, false);
    for &p in points {
        curve.point(p);
    }
    curve.end();
    path
}

/// Closed area between an upper and a lower boundary sampled at the same x positions.
///
/// The upper boundary is traced left to right, the lower one right to left, both with the
/// same spline, and the shape is closed. Returns `None` when there are no samples.
pub fn catmull_rom_area(upper: &[Point], lower: &[Point], alpha: f64) -> Option<BezPath> {
    if upper.is_empty() || upper.len() != lower.len() {
        return None;
    }

    let mut path = BezPath::new();
    let mut top = CatmullRom::start(&mut path, alpha, false);
    for &p in upper {
        top.point(p);
    }
    top.end();

    let mut bottom = CatmullRom::start(&mut path, alpha, true);
    for &p in lower.iter().rev() {
        bottom.point(p);
    }
    bottom.end();

    path.close_path();
    Some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/chart/curve.rs"]
mod tests;
