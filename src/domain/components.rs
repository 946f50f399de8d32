//! Connected-component bookkeeping for maze carving.
//!
//! Two interchangeable trackers make the same connect/merge decisions:
//! the set-based [`MergedCells`] and the parent-pointer [`DisjointSet`].

use std::collections::{HashMap, HashSet};

use super::coord::Coord;

/// Tracks which cells are known to be connected.
pub trait Components {
    /// Whether `a` and `b` are already in the same component
    fn connected(&mut self, a: Coord, b: Coord) -> bool;

    /// Join the components of `a` and `b`.
    /// Callers check [`Components::connected`] first.
    fn merge(&mut self, a: Coord, b: Coord);

    /// Number of components, counting unmerged cells as singletons
    fn count(&self) -> usize;
}

/// Unmerged cells plus a list of explicit multi-cell components.
/// A cell is in the unmerged set or in exactly one component, never both.
#[derive(Clone, Debug, Default)]
pub struct MergedCells {
    unmerged: HashSet<Coord>,
    merged: Vec<HashSet<Coord>>,
}

impl MergedCells {
    pub fn new(cells: &[Coord]) -> Self {
        Self {
            unmerged: cells.iter().copied().collect(),
            merged: Vec::new(),
        }
    }

    pub fn unmerged(&self) -> &HashSet<Coord> {
        &self.unmerged
    }

    pub fn components(&self) -> &[HashSet<Coord>] {
        &self.merged
    }

    fn position(&self, at: Coord) -> Option<usize> {
        self.merged.iter().position(|set| set.contains(&at))
    }
}

impl Components for MergedCells {
    fn connected(&mut self, a: Coord, b: Coord) -> bool {
        self.merged
            .iter()
            .any(|set| set.contains(&a) && set.contains(&b))
    }

    fn merge(&mut self, a: Coord, b: Coord) {
        match (self.unmerged.contains(&a), self.unmerged.contains(&b)) {
            (true, true) => {
                self.unmerged.remove(&a);
                self.unmerged.remove(&b);
                self.merged.push(HashSet::from([a, b]));
            }
            (false, true) | (true, false) => {
                let (joined, loose) = if self.unmerged.contains(&b) { (a, b) } else { (b, a) };
                if let Some(idx) = self.position(joined) {
                    self.merged[idx].insert(loose);
                }
                self.unmerged.remove(&loose);
            }
            (false, false) => {
                let (Some(keep), Some(evict)) = (self.position(a), self.position(b)) else {
                    return;
                };
                if keep == evict {
                    return;
                }
                let moved = self.merged.swap_remove(evict);
                // swap_remove moved the last set into `evict`
                let keep = if keep == self.merged.len() { evict } else { keep };
                self.merged[keep].extend(moved);
            }
        }
    }

    fn count(&self) -> usize {
        self.unmerged.len() + self.merged.len()
    }
}

/// Parent-pointer union-find with path compression and union by size.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    index: HashMap<Coord, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(cells: &[Coord]) -> Self {
        let index: HashMap<Coord, usize> = cells
            .iter()
            .enumerate()
            .map(|(i, &at)| (at, i))
            .collect();
        let n = cells.len();

        Self {
            sets: index.len(),
            index,
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn root_of(&mut self, at: Coord) -> Option<usize> {
        let idx = *self.index.get(&at)?;
        Some(self.find(idx))
    }
}

impl Components for DisjointSet {
    fn connected(&mut self, a: Coord, b: Coord) -> bool {
        match (self.root_of(a), self.root_of(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    fn merge(&mut self, a: Coord, b: Coord) {
        let (Some(ra), Some(rb)) = (self.root_of(a), self.root_of(b)) else {
            return;
        };
        if ra == rb {
            return;
        }

        let (big, small) = if self.size[ra] >= self.size[rb] { (ra, rb) } else { (rb, ra) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.sets -= 1;
    }

    fn count(&self) -> usize {
        self.sets
    }
}

/// Available component trackers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Unmerged set plus a vector of merged-cell sets
    #[default]
    ComponentSets,
    /// Parent pointers with path compression
    DisjointSet,
}

impl MergeStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<MergeStrategy> {
        vec![MergeStrategy::ComponentSets, MergeStrategy::DisjointSet]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            MergeStrategy::ComponentSets => "Sets",
            MergeStrategy::DisjointSet => "UnionFind",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            MergeStrategy::ComponentSets => "Vector of merged-cell sets, linear scans",
            MergeStrategy::DisjointSet => "Parent pointers, path compression, union by size",
        }
    }

    /// Fresh tracker with every cell as its own singleton
    pub fn tracker(&self, cells: &[Coord]) -> Box<dyn Components> {
        match self {
            MergeStrategy::ComponentSets => Box::new(MergedCells::new(cells)),
            MergeStrategy::DisjointSet => Box::new(DisjointSet::new(cells)),
        }
    }
}
