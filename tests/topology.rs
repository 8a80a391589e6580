//! Validates crossing, region, and loop derivation against hand-traced
//! fixtures

use std::collections::BTreeSet;

use knotweave::lattice::Grid;
use knotweave::topology::{
    collect_strands, crossing_count, full_connected, loop_count, region_count, trace_paths,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn an_unbridged_grid_is_all_crossings() {
    let grid = Grid::new(3, 3);
    assert_eq!(crossing_count(&grid), 12);
}

#[test]
fn bridging_trades_crossings_one_for_one() {
    let mut grid = Grid::new(3, 3);
    grid.borders();
    // 12 non-secondary points, 8 bridged by the border frame
    assert_eq!(crossing_count(&grid), 4);
    assert_eq!(crossing_count(&grid) + grid.junction_count(), 12);
}

#[test]
fn every_unbridged_node_is_its_own_region() {
    let grid = Grid::new(3, 3);
    assert_eq!(region_count(&grid), 13);
}

#[test]
fn a_border_frame_connects_exactly_the_ring_nodes() {
    let mut grid = Grid::new(3, 3);
    grid.borders();

    let ring = full_connected(&grid, 0, 0);
    let expected: BTreeSet<(usize, usize)> = [
        (0, 0),
        (2, 0),
        (4, 0),
        (0, 2),
        (4, 2),
        (0, 4),
        (2, 4),
        (4, 4),
    ]
    .into_iter()
    .collect();
    assert_eq!(ring, expected);

    // One ring region plus the center and the four odd nodes
    assert_eq!(region_count(&grid), 6);
}

#[test]
fn full_connected_is_the_same_from_any_member() {
    let mut grid = Grid::new(3, 3);
    grid.borders();
    assert_eq!(full_connected(&grid, 0, 0), full_connected(&grid, 4, 2));
    assert!(full_connected(&grid, 2, 2).len() == 1);
    assert!(full_connected(&grid, 2, 1).is_empty(), "not a node");
}

#[test]
fn an_unbridged_grid_weaves_eight_open_runs() {
    let grid = Grid::new(3, 3);
    // Two pass-through strands per free crossing
    assert_eq!(collect_strands(&grid).len(), 24);

    let paths = trace_paths(&grid);
    assert_eq!(paths.loop_count(), 8);
    assert!(paths.paths().iter().all(|p| !p.is_closed()));

    let mut lengths: Vec<usize> = paths.paths().iter().map(|p| p.len()).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![2, 2, 2, 2, 4, 4, 4, 4]);
    assert_eq!(paths.total_path_length(), paths.strand_total());
}

#[test]
fn a_bordered_knot_closes_into_two_loops() {
    let mut grid = Grid::new(3, 3);
    grid.borders();

    let paths = trace_paths(&grid);
    assert_eq!(paths.loop_count(), 2);
    assert!(paths.paths().iter().all(|p| p.is_closed()));
    assert!(paths.paths().iter().all(|p| p.len() == 8));
    assert_eq!(paths.total_path_length(), paths.strand_total());
    assert_eq!(paths.strand_total(), 16);
}

#[test]
fn strand_conservation_holds_after_random_edits() {
    for seed in 0..8 {
        let mut grid = Grid::new(6, 5);
        let mut rng = StdRng::seed_from_u64(seed);
        grid.borders();
        grid.random_lines(70, &mut rng);

        let paths = trace_paths(&grid);
        assert_eq!(
            paths.total_path_length(),
            paths.strand_total(),
            "seed {seed}: every strand belongs to exactly one path"
        );
        assert!(paths.loop_count() >= 1);
    }
}

#[test]
fn add_then_remove_restores_prior_counts() {
    let mut grid = Grid::new(3, 3);
    grid.borders();

    let regions_before = region_count(&grid);
    let loops_before = loop_count(&grid);

    assert!(grid.connect((2, 0), (2, 2)));
    assert_eq!(region_count(&grid), regions_before - 1, "center joins ring");

    grid.remove_junction_at(2, 1);
    assert_eq!(region_count(&grid), regions_before);
    assert_eq!(loop_count(&grid), loops_before);
}

#[test]
fn queries_recompute_from_current_state() {
    let mut grid = Grid::new(4, 4);
    grid.borders();
    let first = loop_count(&grid);

    let mut rng = StdRng::seed_from_u64(11);
    grid.random_lines(90, &mut rng);
    let second = loop_count(&grid);

    // No caching: both results derive from the state at call time
    let third = loop_count(&grid);
    assert_eq!(second, third);
    assert!(first >= 1 && second >= 1);
}
