//! Ordered, capacity bounded store of the control points the user places.

use std::fmt;

use smallvec::SmallVec;

use crate::Point;

/// Number of points stored inline before [`ControlPoints`] would spill to the heap.
///
/// Equal to the largest capacity accepted by the [`Config`](crate::Config),
/// so the store never allocates.
pub const INLINE_CAPACITY: usize = 64;

/// The store is full and the point was not added.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapacityReached {
    /// The store's capacity
    pub capacity: usize,
}

impl fmt::Display for CapacityReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "can't add more than {} control points", self.capacity)
    }
}

impl std::error::Error for CapacityReached {}

/// Control points in insertion order together with the point currently being dragged.
///
/// If a point is selected, its index is always valid.
/// Points are only ever removed from the end.
#[derive(Clone, Debug)]
pub struct ControlPoints {
    points: SmallVec<[Point; INLINE_CAPACITY]>,
    capacity: usize,
    marker_size: f32,
    selected: Option<usize>,
}

impl ControlPoints {
    /// Creates an empty store holding at most `capacity` points.
    ///
    /// `marker_size` is the side of the square hit box around each point.
    pub fn new(capacity: usize, marker_size: f32) -> Self {
        ControlPoints {
            points: SmallVec::new(),
            capacity,
            marker_size,
            selected: None,
        }
    }

    /// Maximum number of points
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether there are no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in insertion order
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Index of the point being dragged
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Finds the first point whose hit box contains `position`.
    ///
    /// The hit box is a square with side `marker_size` centered on the point, its edges included.
    /// If boxes overlap the lowest index wins.
    pub fn hit_test(&self, position: Point) -> Option<usize> {
        let size = Point::repeat(self.marker_size);
        self.points.iter().position(|point| {
            let begin = point - size * 0.5;
            let end = begin + size;
            begin.x <= position.x
                && position.x <= end.x
                && begin.y <= position.y
                && position.y <= end.y
        })
    }

    /// Appends a point and returns its index.
    ///
    /// A full store is left untouched.
    pub fn add(&mut self, position: Point) -> Result<usize, CapacityReached> {
        if self.points.len() >= self.capacity {
            return Err(CapacityReached {
                capacity: self.capacity,
            });
        }
        self.points.push(position);
        log::debug!(
            "added control point #{} at ({}, {})",
            self.points.len() - 1,
            position.x,
            position.y
        );
        Ok(self.points.len() - 1)
    }

    /// Marks the point at `index` as being dragged.
    ///
    /// Invalid indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.points.len() {
            self.selected = Some(index);
        }
    }

    /// Stops dragging
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Moves the point being dragged to `position`.
    ///
    /// Does nothing if no point is selected.
    pub fn move_selected(&mut self, position: Point) {
        if let Some(index) = self.selected {
            log::trace!(
                "moving control point #{} to ({}, {})",
                index,
                position.x,
                position.y
            );
            self.points[index] = position;
        }
    }

    /// Removes the last point and returns it.
    ///
    /// An empty store is left untouched.
    pub fn remove_last(&mut self) -> Option<Point> {
        let point = self.points.pop()?;
        if self.selected == Some(self.points.len()) {
            self.selected = None;
        }
        log::debug!("removed control point #{}", self.points.len());
        Some(point)
    }
}

impl<'a> IntoIterator for &'a ControlPoints {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(points: &[(f32, f32)]) -> ControlPoints {
        let mut store = ControlPoints::new(INLINE_CAPACITY, 15.0);
        for &(x, y) in points {
            store.add(Point::new(x, y)).unwrap();
        }
        store
    }

    #[test]
    fn hit_test() {
        let store = store(&[(100.0, 100.0), (200.0, 100.0)]);
        assert_eq!(store.hit_test(Point::new(100.0, 100.0)), Some(0));
        assert_eq!(store.hit_test(Point::new(205.0, 95.0)), Some(1));
        assert_eq!(store.hit_test(Point::new(150.0, 100.0)), None);
    }

    #[test]
    fn hit_box_edges_are_inclusive() {
        let store = store(&[(100.0, 100.0)]);
        assert_eq!(store.hit_test(Point::new(92.5, 107.5)), Some(0));
        assert_eq!(store.hit_test(Point::new(107.5, 92.5)), Some(0));
        assert_eq!(store.hit_test(Point::new(107.6, 100.0)), None);
    }

    #[test]
    fn overlapping_hit_boxes() {
        let store = store(&[(100.0, 100.0), (105.0, 100.0), (102.0, 100.0)]);
        assert_eq!(store.hit_test(Point::new(103.0, 100.0)), Some(0));
        assert_eq!(store.hit_test(Point::new(110.0, 100.0)), Some(1));
    }

    #[test]
    fn add_beyond_capacity() {
        let mut store = ControlPoints::new(2, 15.0);
        assert_eq!(store.add(Point::new(0.0, 0.0)), Ok(0));
        assert_eq!(store.add(Point::new(1.0, 0.0)), Ok(1));
        assert_eq!(
            store.add(Point::new(2.0, 0.0)),
            Err(CapacityReached { capacity: 2 })
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[1], Point::new(1.0, 0.0));
    }

    #[test]
    fn select_and_move() {
        let mut store = store(&[(0.0, 0.0), (10.0, 10.0)]);
        store.select(1);
        assert_eq!(store.selected(), Some(1));
        store.move_selected(Point::new(50.0, 60.0));
        assert_eq!(store.as_slice(), &[Point::new(0.0, 0.0), Point::new(50.0, 60.0)]);

        store.deselect();
        store.move_selected(Point::new(0.0, 0.0));
        assert_eq!(store.as_slice()[1], Point::new(50.0, 60.0));
    }

    #[test]
    fn select_invalid_index() {
        let mut store = store(&[(0.0, 0.0)]);
        store.select(1);
        assert_eq!(store.selected(), None);
        store.select(0);
        store.select(7);
        assert_eq!(store.selected(), Some(0));
    }

    #[test]
    fn iterates_in_insertion_order() {
        let store = store(&[(3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let xs: Vec<f32> = store.iter().map(|point| point.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
        assert_eq!((&store).into_iter().count(), 3);
    }

    #[test]
    fn remove_last() {
        let mut store = store(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(store.remove_last(), Some(Point::new(10.0, 10.0)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove_last(), Some(Point::new(0.0, 0.0)));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_last_on_empty_store() {
        let mut store = ControlPoints::new(4, 15.0);
        assert_eq!(store.remove_last(), None);
        assert!(store.is_empty());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn remove_selected_point() {
        let mut store = store(&[(0.0, 0.0), (10.0, 10.0)]);
        store.select(0);
        store.remove_last();
        assert_eq!(store.selected(), Some(0));

        store.remove_last();
        assert_eq!(store.selected(), None);
    }
}
