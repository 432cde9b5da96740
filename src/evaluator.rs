//! Evaluates bezier curves of arbitrary degree through their bernstein sum.

use crate::binomial::{Binomial, BinomialStrategy};
use crate::Point;

/// Evaluates a bezier curve given as a slice of control points.
///
/// The curve of `n` points has degree `n - 1` and is computed explicitly as
/// $B(t) = \sum_i C(n-1, i) (1-t)^{n-1-i} t^i P_i$.
/// This yields the same points as de castlejau's algorithm.
#[derive(Clone, Debug)]
pub struct Evaluator {
    binomial: Binomial,
}

impl Evaluator {
    /// Creates an evaluator supporting curves with up to `max_points` control points.
    pub fn new(strategy: BinomialStrategy, max_points: usize) -> Self {
        Evaluator {
            binomial: Binomial::new(strategy, max_points),
        }
    }

    /// The source of binomial coefficients
    pub fn binomial(&self) -> &Binomial {
        &self.binomial
    }

    /// Get the point on the curve at position `t`.
    ///
    /// This method assumes `t` to be between 0 and 1 but doesn't check it.
    /// The curve of a single point is that point for every `t`.
    ///
    /// Callers have to guard against an empty slice.
    /// In release builds the origin is returned for it.
    pub fn evaluate(&self, points: &[Point], t: f32) -> Point {
        debug_assert!(!points.is_empty(), "a curve needs at least one point");
        let Some(degree) = points.len().checked_sub(1) else {
            return Point::zeros();
        };

        let t_inv = 1.0 - t;
        points
            .iter()
            .enumerate()
            .fold(Point::zeros(), |sum, (i, point)| {
                let coeff = self.binomial.coefficient(degree, i) as f32
                    * t_inv.powi((degree - i) as i32)
                    * t.powi(i as i32);
                sum + point * coeff
            })
    }

    /// Samples the curve at `t = 0, step, 2 * step, ...` while `t <= 1`.
    ///
    /// `t` is accumulated by repeated addition, so whether `t = 1` itself is
    /// reached depends on rounding. For example a step of `0.25` ends exactly on 1
    /// while ten steps of `0.1` overshoot it.
    ///
    /// `step` has to be positive, see [`Config::clamp_step`](crate::Config::clamp_step).
    pub fn samples<'a>(&'a self, points: &'a [Point], step: f32) -> Samples<'a> {
        debug_assert!(step > 0.0, "sampling needs a positive step");
        Samples {
            evaluator: self,
            points,
            step,
            t: 0.0,
        }
    }

    /// Pairs of consecutive samples `(B(t), B(t + step))` approximating the curve by a polyline.
    ///
    /// Terminates like [`Evaluator::samples`].
    /// The last segment's end may lie beyond `t = 1`.
    pub fn segments<'a>(&'a self, points: &'a [Point], step: f32) -> Segments<'a> {
        Segments {
            samples: self.samples(points, step),
        }
    }
}

/// Lazy sequence of points on a curve, see [`Evaluator::samples`]
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    evaluator: &'a Evaluator,
    points: &'a [Point],
    step: f32,
    t: f32,
}

impl<'a> Samples<'a> {
    /// The parameter of the next sample
    pub fn t(&self) -> f32 {
        self.t
    }
}

impl<'a> Iterator for Samples<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        // negated so a NaN step ends the sequence too
        if self.points.is_empty() || !(self.t <= 1.0) {
            return None;
        }
        let point = self.evaluator.evaluate(self.points, self.t);
        self.t += self.step;
        Some(point)
    }
}

/// Lazy sequence of line segments along a curve, see [`Evaluator::segments`]
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    samples: Samples<'a>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let t = self.samples.t();
        let begin = self.samples.next()?;
        let end = self
            .samples
            .evaluator
            .evaluate(self.samples.points, t + self.samples.step);
        Some((begin, end))
    }
}
