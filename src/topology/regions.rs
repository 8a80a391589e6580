//! Node connectivity and region counting
//!
//! Two nodes are adjacent when the primary point between them carries a
//! junction along the matching axis. Regions are the connected components
//! of that adjacency graph. Component aggregation uses a disjoint-set
//! forest; the brute-force fixed-point closure it replaces is still
//! available per-node as [`full_connected`].

use std::collections::{BTreeSet, HashMap, VecDeque};

use bitvec::prelude::bitvec;

use crate::lattice::grid::Grid;

/// Disjoint-set forest over node ordinals with path halving
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut index: usize) -> usize {
        loop {
            let Some(&parent) = self.parent.get(index) else {
                return index;
            };
            if parent == index {
                return index;
            }
            let grandparent = self.parent.get(parent).copied().unwrap_or(parent);
            if let Some(slot) = self.parent.get_mut(index) {
                *slot = grandparent;
            }
            index = grandparent;
        }
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            if let Some(slot) = self.parent.get_mut(root_b) {
                *slot = root_a;
            }
        }
    }
}

/// Number of connected node regions under junction adjacency
///
/// Every node belongs to exactly one region; an unbridged node is a
/// singleton region of its own.
pub fn region_count(grid: &Grid) -> usize {
    let positions = grid.node_positions();
    let ordinals: HashMap<(usize, usize), usize> = positions
        .iter()
        .enumerate()
        .map(|(index, &pos)| (pos, index))
        .collect();

    let mut sets = DisjointSet::new(positions.len());
    for node in grid.nodes() {
        let Some(&origin) = ordinals.get(&node.position()) else {
            continue;
        };
        for connected in node.one_step_connected() {
            if let Some(&other) = ordinals.get(&connected.position()) {
                sets.union(origin, other);
            }
        }
    }

    (0..positions.len())
        .filter(|&index| sets.find(index) == index)
        .count()
}

/// Every node transitively connected to the node at `(x, y)`
///
/// Breadth-first closure of the one-step adjacency, including the starting
/// node itself. Returns an empty set when the coordinate is not a node.
pub fn full_connected(grid: &Grid, x: usize, y: usize) -> BTreeSet<(usize, usize)> {
    let mut component = BTreeSet::new();
    let Some(start) = grid.node(x, y) else {
        return component;
    };

    let ordinals: HashMap<(usize, usize), usize> = grid
        .node_positions()
        .iter()
        .enumerate()
        .map(|(index, &pos)| (pos, index))
        .collect();
    let mut visited = bitvec![0; grid.node_positions().len()];

    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let Some(&ordinal) = ordinals.get(&node.position()) else {
            continue;
        };
        if visited.get(ordinal).as_deref() == Some(&true) {
            continue;
        }
        visited.set(ordinal, true);
        component.insert(node.position());
        for connected in node.one_step_connected() {
            queue.push_back(connected);
        }
    }
    component
}
