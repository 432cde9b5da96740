#![warn(missing_docs)]
//! Interactive visualizer for bezier curves of arbitrary degree.
//!
//! Control points are placed, dragged and removed through [`InputEvent`]s
//! fed into a [`Playground`]. Every frame the curve through the current points
//! is sampled by an [`Evaluator`] and drawn on a [`draw::Canvas`],
//! either as a marker per sample or as a polyline.

pub mod binomial;
pub mod config;
pub mod control_points;
pub mod draw;
pub mod evaluator;
pub mod input;
pub mod playground;

pub use crate::config::Config;
pub use crate::control_points::ControlPoints;
pub use crate::evaluator::Evaluator;
pub use crate::input::InputEvent;
pub use crate::playground::{Playground, RenderMode};

/// A point in canvas coordinates, also used for offsets and sizes.
pub type Point = nalgebra::Vector2<f32>;

/// Linear interpolation `a + (b - a) * t`
pub fn lerp(a: Point, b: Point, t: f32) -> Point {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use crate::binomial::{binomial, BinomialStrategy, BinomialTable, MAX_DEGREE};
    use crate::input::{Key, PointerButton, WheelDirection};
    use crate::{lerp, Config, Evaluator, InputEvent, Playground, Point};
    use approx::assert_relative_eq;

    #[test]
    fn coefficient_strategies_agree() {
        let table = BinomialTable::new(MAX_DEGREE);
        for n in 0..=MAX_DEGREE {
            for k in 0..=n {
                assert_eq!(table.get(n, k), Some(binomial(n, k)));
            }
        }
    }

    #[test]
    fn quadratic_midpoint() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        let evaluator = Evaluator::new(BinomialStrategy::Direct, 64);
        assert_eq!(evaluator.evaluate(&points, 0.5), Point::new(75.0, 25.0));
    }

    #[test]
    fn full_degree_curve_interpolates_endpoints() {
        let points: Vec<Point> = (0..64)
            .map(|i| Point::new(i as f32 * 12.0, if i % 2 == 0 { 0.0 } else { 500.0 }))
            .collect();
        for strategy in [BinomialStrategy::Direct, BinomialStrategy::Table] {
            let evaluator = Evaluator::new(strategy, 64);
            assert_eq!(evaluator.evaluate(&points, 0.0), points[0]);
            assert_eq!(evaluator.evaluate(&points, 1.0), points[63]);
        }
    }

    #[test]
    fn lerp_points() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -2.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_relative_eq!(lerp(a, b, 0.5), Point::new(2.0, 0.0));
        assert_relative_eq!((b - a).norm(), 20.0f32.sqrt());
    }

    #[test]
    fn playground_follows_config() {
        let playground = Playground::new(Config {
            capacity: 5,
            binomial: BinomialStrategy::Table,
            ..Config::default()
        });
        assert_eq!(playground.config().capacity, 5);
        assert_eq!(playground.points().capacity(), 5);
        assert_eq!(
            playground.evaluator().binomial().strategy(),
            BinomialStrategy::Table
        );
    }

    #[test]
    fn remove_from_empty_playground() {
        let mut playground = Playground::new(Config::default());
        playground.handle(InputEvent::Key(Key::RemoveLast));
        assert!(playground.points().is_empty());
        assert_eq!(playground.points().selected(), None);
        assert!(!playground.should_quit());
    }

    #[test]
    fn session() {
        let mut playground = Playground::new(Config::default());
        let press = |x, y| InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        };
        let release = InputEvent::PointerUp {
            button: PointerButton::Primary,
        };

        for event in [
            press(100.0, 500.0),
            release,
            press(400.0, 100.0),
            release,
            press(700.0, 500.0),
            release,
            // drag the middle point upwards
            press(402.0, 98.0),
            InputEvent::PointerMove(Point::new(400.0, 50.0)),
            InputEvent::PointerMove(Point::new(400.0, 20.0)),
            release,
            InputEvent::Wheel(WheelDirection::Up),
            InputEvent::Key(Key::ToggleMode),
        ] {
            playground.handle(event);
        }

        assert_eq!(
            playground.points().as_slice(),
            &[
                Point::new(100.0, 500.0),
                Point::new(400.0, 20.0),
                Point::new(700.0, 500.0),
            ]
        );
        assert_relative_eq!(playground.step(), 0.051, epsilon = 1e-6);

        let evaluator = playground.evaluator();
        let mid = evaluator.evaluate(playground.points().as_slice(), 0.5);
        assert_relative_eq!(mid, Point::new(400.0, 260.0), epsilon = 1e-3);
    }
}
