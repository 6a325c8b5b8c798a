use core::fmt;

use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::costs::Cost;
use crate::error::{PathfindingError, Result};
use crate::N_SMALLVEC_SIZE;

/// A single grid cell: its terrain symbol and the cost of entering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub cost: Cost,
}

impl Cell {
    pub fn new(symbol: char, cost: Cost) -> Cell {
        Cell { symbol, cost }
    }
    pub fn passable(&self) -> bool {
        self.cost > 0
    }
}

/// [TerrainGrid] stores the cells row by row together with the unique start and goal. Its shape
/// never changes after construction, which lets it precompute the connected components of
/// passable cells in a [UnionFind] structure for quick reachability queries.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Point,
    goal: Point,
    components: UnionFind<usize>,
}

impl TerrainGrid {
    /// Builds a grid from rows of cells. Rows must all have the same non-zero length and both
    /// markers must lie inside the grid.
    pub fn new(rows: Vec<Vec<Cell>>, start: Point, goal: Point) -> Result<TerrainGrid> {
        if rows.iter().all(|r| r.is_empty()) {
            return Err(PathfindingError::EmptyGrid);
        }
        let width = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(PathfindingError::MalformedGrid {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        let height = rows.len();
        let mut grid = TerrainGrid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
            start,
            goal,
            components: UnionFind::new(width * height),
        };
        for marker in [start, goal] {
            if !grid.in_bounds(marker) {
                return Err(PathfindingError::InvalidGridReference(marker));
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }
    fn ix(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }
    pub fn cell(&self, p: Point) -> Result<Cell> {
        if self.in_bounds(p) {
            Ok(self.cells[self.ix(p)])
        } else {
            Err(PathfindingError::InvalidGridReference(p))
        }
    }
    pub fn cost(&self, p: Point) -> Result<Cost> {
        self.cell(p).map(|c| c.cost)
    }
    pub fn can_move_to(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cells[self.ix(p)].passable()
    }

    /// The candidate moves from `p` in the fixed order used by every solver:
    /// `(x, y+1)`, `(x+1, y)`, `(x, y-1)`, `(x-1, y)`.
    pub fn neighborhood_points(p: &Point) -> [Point; N_SMALLVEC_SIZE] {
        [
            Point::new(p.x, p.y + 1),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x - 1, p.y),
        ]
    }
    /// Passable, in-bounds neighbours of `p`.
    pub fn neighbors(&self, p: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        Self::neighborhood_points(p)
            .into_iter()
            .filter(|n| self.can_move_to(*n))
            .collect()
    }
    /// Passable neighbours of `p` paired with the cost of entering them.
    pub fn neighborhood_points_and_cost(
        &self,
        p: &Point,
    ) -> SmallVec<[(Point, Cost); N_SMALLVEC_SIZE]> {
        self.neighbors(p)
            .into_iter()
            .map(|n| (n, self.cells[self.ix(n)].cost))
            .collect()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
    /// All coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Point::new(x, y)))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, p: &Point) -> Result<usize> {
        if self.in_bounds(*p) {
            Ok(self.components.find(self.ix(*p)))
        } else {
            Err(PathfindingError::InvalidGridReference(*p))
        }
    }
    /// Checks if `a` and `b` are passable cells on the same component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        !self.unreachable(a, b)
    }
    /// Checks if `a` and `b` are not on the same component. Walls and out-of-bounds points are
    /// unreachable from everything, themselves included.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        if self.can_move_to(*a) && self.can_move_to(*b) {
            !self.components.equiv(self.ix(*a), self.ix(*b))
        } else {
            true
        }
    }

    /// Links every passable cell to its passable right and lower neighbours.
    fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.width * self.height);
        for p in self.points().collect::<Vec<_>>() {
            if !self.can_move_to(p) {
                continue;
            }
            let parent_ix = self.ix(p);
            for n in [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)] {
                if self.can_move_to(n) {
                    let ix = self.ix(n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_grid, CostTable};

    fn grid(text: &str) -> TerrainGrid {
        parse_grid(text, &CostTable::default()).unwrap()
    }

    #[test]
    fn neighbour_order_is_fixed() {
        let grid = grid("...\n.A.\n..B");
        let centre = Point::new(1, 1);
        let n = grid.neighbors(&centre);
        assert_eq!(
            n.as_slice(),
            &[
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbours_exclude_walls_and_border() {
        // |A#.|
        // |.gB|
        let grid = grid("A#.\n.gB");
        let n = grid.neighborhood_points_and_cost(&Point::new(0, 0));
        assert_eq!(n.as_slice(), &[(Point::new(0, 1), 1)]);
        let n = grid.neighborhood_points_and_cost(&Point::new(0, 1));
        assert_eq!(n.as_slice(), &[(Point::new(1, 1), 5), (Point::new(0, 0), 1)]);
    }

    #[test]
    fn out_of_bounds_lookup_is_an_error() {
        let grid = grid("AB");
        assert!(matches!(
            grid.cell(Point::new(2, 0)),
            Err(PathfindingError::InvalidGridReference(p)) if p == Point::new(2, 0)
        ));
        assert!(grid.cost(Point::new(-1, 0)).is_err());
        assert_eq!(grid.cost(Point::new(1, 0)).unwrap(), 1);
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn component_generation() {
        //  ___
        // |A#.|
        // |.#B|
        //  ___
        let grid = grid("A#.\n.#B");
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 1);
        let p3 = Point::new(2, 0);
        assert_eq!(grid.get_component(&p1).unwrap(), grid.get_component(&p2).unwrap());
        assert!(grid.reachable(&p1, &p2));
        assert!(grid.unreachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &grid.goal()));
        assert!(grid.unreachable(&p1, &Point::new(1, 0)));
    }

    /// Asserts that the two corners are connected around a central wall.
    #[test]
    fn reachable_around_obstacle() {
        // |A  |
        // | # |
        // |  B|
        let grid = grid("A..\n.#.\n..B");
        assert!(grid.reachable(&grid.start(), &grid.goal()));
    }

    #[test]
    fn display_prints_terrain() {
        let text = "A.g\nw#B\n";
        assert_eq!(grid(text).to_string(), text);
    }
}
