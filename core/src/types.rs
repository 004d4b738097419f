use serde::{Deserialize, Serialize};

/// Single coordinate axis, signed so procedural boards can grow in every direction.
pub type Coord = i32;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, 1),
    (0, -1),
];

/// Applies `delta` to `coords`, returning a value only when it does not overflow.
fn apply_delta(coords: Coord2, delta: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Iterates the Moore neighborhood of a coordinate.
///
/// The order is fixed so that anything drawing from the RNG per neighbor stays reproducible, but callers should not
/// depend on it beyond that.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(self) -> NeighborIter;
}

impl NeighborIterExt for Coord2 {
    fn iter_neighbors(self) -> NeighborIter {
        NeighborIter::new(self)
    }
}

/// Inclusive rectangle of coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Coord2,
    pub max: Coord2,
}

impl Bounds {
    pub const fn new(min: Coord2, max: Coord2) -> Self {
        Self { min, max }
    }

    pub const fn point(coords: Coord2) -> Self {
        Self::new(coords, coords)
    }

    pub const fn min_x(&self) -> Coord {
        self.min.0
    }

    pub const fn min_y(&self) -> Coord {
        self.min.1
    }

    pub const fn max_x(&self) -> Coord {
        self.max.0
    }

    pub const fn max_y(&self) -> Coord {
        self.max.1
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        x >= self.min.0 && x <= self.max.0 && y >= self.min.1 && y <= self.max.1
    }

    /// Grows the rectangle so it also covers `coords`.
    pub fn include(self, (x, y): Coord2) -> Self {
        Self {
            min: (self.min.0.min(x), self.min.1.min(y)),
            max: (self.max.0.max(x), self.max.1.max(y)),
        }
    }

    /// Row-major iteration over every coordinate in the rectangle.
    pub fn iter(self) -> impl Iterator<Item = Coord2> {
        (self.min.1..=self.max.1).flat_map(move |y| (self.min.0..=self.max.0).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_are_the_eight_surrounding_cells() {
        let mut neighbors: Vec<_> = (0, 0).iter_neighbors().collect();
        neighbors.sort();

        assert_eq!(
            neighbors,
            [
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_overflowing_coordinates() {
        let neighbors: Vec<_> = (Coord::MAX, Coord::MAX).iter_neighbors().collect();

        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&(Coord::MAX - 1, Coord::MAX - 1)));
    }

    #[test]
    fn bounds_iterate_row_major() {
        let cells: Vec<_> = Bounds::new((0, 0), (1, 1)).iter().collect();

        assert_eq!(cells, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn bounds_include_grows_to_cover() {
        let bounds = Bounds::point((0, 0)).include((-2, 3)).include((1, -1));

        assert_eq!(bounds, Bounds::new((-2, -1), (1, 3)));
        assert!(bounds.contains((0, 2)));
        assert!(!bounds.contains((2, 0)));
    }
}
