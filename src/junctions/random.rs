//! Probabilistic junction toggling
//!
//! The toggle policy is intentionally asymmetric: a draw toward the south or
//! east removes an existing bridge, while a draw toward the north or west
//! only ever adds one. Symmetrizing the policy changes the statistical
//! character of generated knots, so it is preserved as-is.

use rand::Rng;

use crate::junctions::junction::{Direction, Junction};
use crate::lattice::grid::Grid;

impl Grid {
    /// Randomly toggle junctions around every node
    ///
    /// Each node acts with `probability`% chance, drawing one of the four
    /// directions uniformly. South and east draws bridge a free median or
    /// remove an occupied one; north and west draws only bridge. Boundary
    /// medians follow the usual removal guard, so a toggle against the
    /// outermost ring cannot clear it.
    pub fn random_lines<R: Rng>(&mut self, probability: u32, rng: &mut R) {
        let positions: Vec<(usize, usize)> = self.node_positions().to_vec();

        for (x, y) in positions {
            if rng.random_range(0..100) > probability {
                continue;
            }
            match rng.random_range(0..4) {
                0 => self.toggle_south(x, y),
                1 => self.toggle_east(x, y),
                2 => self.add_north(x, y),
                _ => self.add_west(x, y),
            }
        }
    }

    fn toggle_south(&mut self, x: usize, y: usize) {
        if y + 2 >= self.ydim() {
            return;
        }
        if self.junction_at(x, y + 1).is_none() {
            self.insert_junction(Junction::new(
                (x, y),
                (x, y + 1),
                (x, y + 2),
                Direction::NS,
            ));
        } else {
            self.remove_junction_at(x, y + 1);
        }
    }

    fn toggle_east(&mut self, x: usize, y: usize) {
        if x + 2 >= self.xdim() {
            return;
        }
        if self.junction_at(x + 1, y).is_none() {
            self.insert_junction(Junction::new(
                (x, y),
                (x + 1, y),
                (x + 2, y),
                Direction::EW,
            ));
        } else {
            self.remove_junction_at(x + 1, y);
        }
    }

    fn add_north(&mut self, x: usize, y: usize) {
        if y < 2 {
            return;
        }
        if self.junction_at(x, y - 1).is_none() {
            self.insert_junction(Junction::new(
                (x, y),
                (x, y - 1),
                (x, y - 2),
                Direction::NS,
            ));
        }
    }

    fn add_west(&mut self, x: usize, y: usize) {
        if x < 2 {
            return;
        }
        if self.junction_at(x - 1, y).is_none() {
            self.insert_junction(Junction::new(
                (x, y),
                (x - 1, y),
                (x - 2, y),
                Direction::EW,
            ));
        }
    }
}
