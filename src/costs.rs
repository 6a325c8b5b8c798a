use fxhash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GOAL_MARKER, START_MARKER, WALL};

/// Integer traversal cost of entering a cell. Zero means the cell cannot be entered.
pub type Cost = u32;

/// The terrain symbols and costs used when no other table is supplied.
pub const DEFAULT_COSTS: [(char, Cost); 9] = [
    ('w', 100),
    ('m', 50),
    ('f', 10),
    ('g', 5),
    ('r', 1),
    ('.', 1),
    (WALL, 0),
    (START_MARKER, 1),
    (GOAL_MARKER, 1),
];

/// Maps terrain symbols to traversal costs. A table is handed to the loader once and the
/// resulting costs are baked into the [TerrainGrid](crate::TerrainGrid), so solvers never
/// consult it during a search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostTable {
    costs: FxHashMap<char, Cost>,
}

impl Default for CostTable {
    fn default() -> CostTable {
        DEFAULT_COSTS.into_iter().collect()
    }
}

impl FromIterator<(char, Cost)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (char, Cost)>>(iter: I) -> Self {
        CostTable {
            costs: iter.into_iter().collect(),
        }
    }
}

impl CostTable {
    /// A table without any symbols.
    pub fn empty() -> CostTable {
        CostTable {
            costs: FxHashMap::default(),
        }
    }
    pub fn get(&self, symbol: char) -> Option<Cost> {
        self.costs.get(&symbol).copied()
    }
    /// Adds or replaces the cost of a symbol, returning the previous cost.
    pub fn insert(&mut self, symbol: char, cost: Cost) -> Option<Cost> {
        self.costs.insert(symbol, cost)
    }
    pub fn is_passable(&self, symbol: char) -> bool {
        self.get(symbol).is_some_and(|c| c > 0)
    }
    pub fn len(&self) -> usize {
        self.costs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
    /// The smallest positive cost in the table, if there is one.
    pub fn min_passable_cost(&self) -> Option<Cost> {
        self.costs.values().copied().filter(|&c| c > 0).min()
    }
}
