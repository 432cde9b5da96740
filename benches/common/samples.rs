use nbezier_viz::Point;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Point::new({random()*800:.2f}, {random()*600:.2f})")
/// ```
pub static POINTS: [(f32, f32); 10] = [
    (412.87, 133.20),
    ( 58.31, 511.64),
    (739.02, 402.15),
    (287.56,  24.93),
    (603.48, 577.01),
    (145.90, 296.37),
    (508.12,  88.45),
    ( 12.67, 340.72),
    (771.39, 219.58),
    (330.04, 468.80),
];

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);

#[allow(non_snake_case)]
pub struct Curves {
    pub CUBIC: Vec<Point>,
    pub HIGHER: Vec<Point>,
    pub FULL: Vec<Point>,
}

impl Curves {
    pub fn new() -> Curves {
        let point = |i: usize| {
            let (x, y) = POINTS[i % POINTS.len()];
            Point::new(x, y)
        };
        Curves {
            CUBIC:  (0..4).map(point).collect(),
            HIGHER: (0..10).map(point).collect(),
            FULL:   (0..64).map(|i| point(i * 7)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=(&'static str, &[Point])> {
        [
            ("cubic", &self.CUBIC[..]),
            ("higher", &self.HIGHER[..]),
            ("full", &self.FULL[..]),
        ].into_iter()
    }
}
