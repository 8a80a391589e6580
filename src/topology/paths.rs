//! Path reconstruction over the global strand set
//!
//! Band edges leave a point diagonally: the strand-end they exit determines
//! which diagonal neighbor they enter and at which end. Following that step
//! relation until it revisits the current path (closed band) or walks off
//! the grid (edge-truncated run) partitions every strand into exactly one
//! path. The number of paths is the knot's loop count.

use std::collections::{HashMap, HashSet};

use bitvec::prelude::bitvec;

use crate::lattice::grid::Grid;
use crate::lattice::point::Compass;
use crate::topology::strands::{Strand, collect_strands};

/// One maximal chain of strands
#[derive(Debug, Clone)]
pub struct Path {
    strands: Vec<Strand>,
    closed: bool,
}

impl Path {
    /// Number of strands the path contains
    pub fn len(&self) -> usize {
        self.strands.len()
    }

    /// Whether the path contains no strands
    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    /// Whether the trace returned to its own strand sequence
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// The strands in trace order
    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }
}

/// Every path of the current junction configuration
#[derive(Debug, Clone)]
pub struct PathSet {
    paths: Vec<Path>,
    strand_total: usize,
}

impl PathSet {
    /// Number of reconstructed paths
    pub fn loop_count(&self) -> usize {
        self.paths.len()
    }

    /// The individual paths
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Total strands generated across all points
    pub const fn strand_total(&self) -> usize {
        self.strand_total
    }

    /// Sum of path lengths; equals [`Self::strand_total`] when no strand is
    /// lost or double-counted
    pub fn total_path_length(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }
}

/// Diagonal step relation: exit end to grid offset and entry end
///
/// The relation is an involution: stepping back out of the entry end lands
/// on the originating point.
const fn diagonal_step(exit: Compass) -> (isize, isize, Compass) {
    match exit {
        Compass::North => (-1, -1, Compass::South),
        Compass::East => (1, -1, Compass::West),
        Compass::South => (1, 1, Compass::North),
        Compass::West => (-1, 1, Compass::East),
    }
}

/// Strand index plus the entry end it was reached through
struct Arrival {
    id: usize,
    entry: Compass,
}

/// Strand lookup and step resolution shared by both trace directions
struct StrandField {
    strands: Vec<Strand>,
    by_point: HashMap<(usize, usize), Vec<usize>>,
    xdim: usize,
    ydim: usize,
}

impl StrandField {
    fn new(grid: &Grid) -> Self {
        let strands = collect_strands(grid);
        let mut by_point: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (id, strand) in strands.iter().enumerate() {
            by_point.entry(strand.point).or_default().push(id);
        }
        Self {
            strands,
            by_point,
            xdim: grid.xdim(),
            ydim: grid.ydim(),
        }
    }

    fn get(&self, id: usize) -> Option<Strand> {
        self.strands.get(id).copied()
    }

    /// The strand one diagonal step from `from` through its `exit` end
    fn follow(&self, from: Strand, exit: Compass) -> Option<Arrival> {
        let (dx, dy, entry) = diagonal_step(exit);
        let x = from.point.0.checked_add_signed(dx)?;
        let y = from.point.1.checked_add_signed(dy)?;
        if x >= self.xdim || y >= self.ydim {
            return None;
        }
        let group = self.by_point.get(&(x, y))?;
        let id = group
            .iter()
            .copied()
            .find(|&id| self.get(id).is_some_and(|s| s.has_end(entry)))?;
        Some(Arrival { id, entry })
    }
}

/// Reconstruct all paths implied by the current junction state
///
/// Seeds on the first unconsumed strand and walks forward; a walk that ends
/// at a grid edge resumes from the seed's other end so every path is
/// maximal. Each strand belongs to exactly one path.
pub fn trace_paths(grid: &Grid) -> PathSet {
    let field = StrandField::new(grid);
    let total = field.strands.len();
    let mut consumed = bitvec![0; total];
    let mut paths = Vec::new();

    for seed in 0..total {
        if consumed.get(seed).as_deref() == Some(&true) {
            continue;
        }
        let Some(seed_strand) = field.get(seed) else {
            continue;
        };
        consumed.set(seed, true);
        let mut members = HashSet::from([seed]);

        let (forward, closed) = walk(
            &field,
            seed_strand,
            seed_strand.ends.1,
            &mut members,
            &mut consumed,
        );

        let mut ordered = Vec::with_capacity(members.len());
        if closed {
            ordered.push(seed);
            ordered.extend(forward);
        } else {
            // Edge-truncated: extend out of the seed's other end and stitch
            // the two half-walks together
            let (backward, _) = walk(
                &field,
                seed_strand,
                seed_strand.ends.0,
                &mut members,
                &mut consumed,
            );
            ordered.extend(backward.iter().rev());
            ordered.push(seed);
            ordered.extend(forward);
        }

        let strands = ordered.iter().filter_map(|&id| field.get(id)).collect();
        paths.push(Path { strands, closed });
    }

    PathSet {
        paths,
        strand_total: total,
    }
}

/// Number of continuous bands in the knot
pub fn loop_count(grid: &Grid) -> usize {
    trace_paths(grid).loop_count()
}

/// Follow the step relation from one strand end until closure or a dead end
fn walk(
    field: &StrandField,
    start: Strand,
    start_exit: Compass,
    members: &mut HashSet<usize>,
    consumed: &mut bitvec::vec::BitVec,
) -> (Vec<usize>, bool) {
    let mut collected = Vec::new();
    let mut current = start;
    let mut exit = start_exit;

    loop {
        let Some(arrival) = field.follow(current, exit) else {
            return (collected, false);
        };
        if members.contains(&arrival.id) {
            return (collected, true);
        }
        if consumed.get(arrival.id).as_deref() == Some(&true) {
            // Step relation is a matching, so another path cannot own this
            // strand; bail out rather than steal it
            return (collected, false);
        }
        let Some(next) = field.get(arrival.id) else {
            return (collected, false);
        };
        consumed.set(arrival.id, true);
        members.insert(arrival.id);
        collected.push(arrival.id);
        exit = next.other_end(arrival.entry);
        current = next;
    }
}
