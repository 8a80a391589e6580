//! Validates dual-grid construction and bounded navigation

use knotweave::lattice::Grid;

#[test]
fn requested_size_expands_to_odd_dimensions() {
    let grid = Grid::new(3, 3);
    assert_eq!(grid.xdim(), 5);
    assert_eq!(grid.ydim(), 5);

    let wide = Grid::new(7, 2);
    assert_eq!(wide.xdim(), 13);
    assert_eq!(wide.ydim(), 3);
}

#[test]
fn navigation_stops_at_grid_edges() {
    let grid = Grid::new(3, 3);
    let Some(corner) = grid.point(0, 0) else {
        unreachable!("origin is always in bounds");
    };
    assert!(corner.west().is_none());
    assert!(corner.north().is_none());
    assert!(corner.east().is_some_and(|p| p.position() == (1, 0)));
    assert!(corner.south().is_some_and(|p| p.position() == (0, 1)));

    let Some(far) = grid.point(4, 4) else {
        unreachable!("far corner is in bounds for a 5x5 lattice");
    };
    assert!(far.east().is_none());
    assert!(far.south().is_none());
}

#[test]
fn matching_parity_marks_secondary_cells() {
    let grid = Grid::new(3, 3);
    assert!(grid.point(0, 0).is_some_and(|p| p.is_on_secondary()));
    assert!(grid.point(1, 1).is_some_and(|p| p.is_on_secondary()));
    assert!(grid.point(1, 0).is_some_and(|p| !p.is_on_secondary()));
    assert!(grid.point(0, 3).is_some_and(|p| !p.is_on_secondary()));

    // Node lookup follows the same parity rule
    assert!(grid.node(2, 2).is_some());
    assert!(grid.node(2, 1).is_none());
    assert!(grid.node(9, 9).is_none());
}

#[test]
fn a_3x3_knot_has_13_nodes_and_12_crossing_candidates() {
    let grid = Grid::new(3, 3);
    assert_eq!(grid.node_positions().len(), 13);

    let crossings = grid
        .points()
        .filter(|p| !p.is_on_secondary())
        .count();
    assert_eq!(crossings, 12);
}

#[test]
fn two_step_navigation_skips_the_intermediate_point() {
    let grid = Grid::new(3, 3);
    let Some(center) = grid.node(2, 2) else {
        unreachable!("center node exists");
    };
    assert!(center.north_north().is_some_and(|n| n.position() == (2, 0)));
    assert!(center.south_south().is_some_and(|n| n.position() == (2, 4)));
    assert!(center.east_east().is_some_and(|n| n.position() == (4, 2)));
    assert!(center.west_west().is_some_and(|n| n.position() == (0, 2)));

    let Some(corner) = grid.node(0, 0) else {
        unreachable!("corner node exists");
    };
    assert!(corner.north_north().is_none());
    assert!(corner.west_west().is_none());
}

#[test]
fn neighbor_predicates_are_symmetric() {
    let grid = Grid::new(3, 3);
    let (Some(a), Some(b)) = (grid.node(0, 2), grid.node(2, 2)) else {
        unreachable!("both nodes exist");
    };
    assert!(a.is_node_neighbor(b));
    assert!(b.is_node_neighbor(a));
    assert!(a.is_west_neighbor(b));
    assert!(b.is_east_neighbor(a));

    let (Some(c), Some(d)) = (grid.node(2, 0), grid.node(2, 2)) else {
        unreachable!("both nodes exist");
    };
    assert!(c.is_north_neighbor(d));
    assert!(d.is_south_neighbor(c));

    // Diagonal nodes are not neighbors
    let (Some(e), Some(f)) = (grid.node(1, 1), grid.node(3, 3)) else {
        unreachable!("both nodes exist");
    };
    assert!(!e.is_node_neighbor(f));
}
