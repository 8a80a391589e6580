//! Validates polygon and weave-segment projection against junction state

use knotweave::geometry::{Coord, NodeShape, Styling, project};
use knotweave::lattice::Grid;

fn polygon_of(grid: &Grid, styling: &Styling, position: (usize, usize)) -> Vec<Coord> {
    project(grid, styling)
        .into_iter()
        .find(|g| g.position == position)
        .map(|g| g.polygon)
        .unwrap_or_default()
}

#[test]
fn plain_polygons_are_half_unit_diamonds() {
    let grid = Grid::new(3, 3);
    let styling = Styling::plain(&grid);
    let polygon = polygon_of(&grid, &styling, (2, 2));
    assert_eq!(
        polygon,
        vec![
            Coord::new(2.5, 2.0),
            Coord::new(2.0, 2.5),
            Coord::new(1.5, 2.0),
            Coord::new(2.0, 1.5),
        ]
    );
}

#[test]
fn stylized_polygon_with_free_sides_matches_the_diamond_midpoints() {
    let mut grid = Grid::new(3, 3);
    grid.borders();
    let styling = Styling::stylized(&grid);

    // The center node's flanking medians are all free
    let polygon = polygon_of(&grid, &styling, (2, 2));
    assert_eq!(polygon.len(), 4);
    assert!(polygon.contains(&Coord::new(2.0, 1.5)));
    assert!(polygon.contains(&Coord::new(2.5, 2.0)));
    assert!(polygon.contains(&Coord::new(2.0, 2.5)));
    assert!(polygon.contains(&Coord::new(1.5, 2.0)));
}

#[test]
fn a_fully_enclosed_node_fills_the_two_cell_square() {
    let mut grid = Grid::new(3, 3);
    // Bridge across all four sides of the center node
    assert!(grid.connect((1, 1), (3, 1)));
    assert!(grid.connect((1, 3), (3, 3)));
    assert!(grid.connect((3, 1), (3, 3)));
    assert!(grid.connect((1, 1), (1, 3)));

    let styling = Styling::stylized(&grid);
    let polygon = polygon_of(&grid, &styling, (2, 2));
    assert_eq!(
        polygon,
        vec![
            Coord::new(1.0, 1.0),
            Coord::new(1.0, 3.0),
            Coord::new(3.0, 3.0),
            Coord::new(3.0, 1.0),
        ]
    );
}

#[test]
fn bridges_meeting_along_a_corner_pull_in_the_node_center() {
    let mut grid = Grid::new(3, 3);
    assert!(grid.connect((2, 0), (2, 2)));
    assert!(grid.connect((2, 2), (4, 2)));

    let styling = Styling::stylized(&grid);
    let polygon = polygon_of(&grid, &styling, (2, 2));
    assert!(
        polygon.contains(&Coord::new(2.0, 2.0)),
        "corner in-fill vertex expected"
    );
}

#[test]
fn weave_segments_appear_only_across_free_medians() {
    let grid = Grid::new(3, 3);
    let styling = Styling::plain(&grid);
    let geometry = project(&grid, &styling);

    let Some(center) = geometry.iter().find(|g| g.position == (2, 2)) else {
        unreachable!("center node exists");
    };
    assert_eq!(center.lines.len(), 4);

    let Some(corner) = geometry.iter().find(|g| g.position == (0, 0)) else {
        unreachable!("corner node exists");
    };
    // Two medians are off-grid, two are free
    assert_eq!(corner.lines.len(), 2);
}

#[test]
fn weave_slant_flips_with_node_parity() {
    let grid = Grid::new(3, 3);
    let styling = Styling::plain(&grid);
    let geometry = project(&grid, &styling);

    let Some(even) = geometry.iter().find(|g| g.position == (2, 2)) else {
        unreachable!("even node exists");
    };
    assert!(
        even.lines
            .iter()
            .any(|s| s.source == Coord::new(2.5, 2.0) && s.target == Coord::new(3.0, 1.5))
    );

    let Some(odd) = geometry.iter().find(|g| g.position == (1, 1)) else {
        unreachable!("odd node exists");
    };
    assert!(
        odd.lines
            .iter()
            .any(|s| s.source == Coord::new(1.5, 1.0) && s.target == Coord::new(2.0, 1.5))
    );
}

#[test]
fn bridged_nodes_lose_their_segments() {
    let mut grid = Grid::new(3, 3);
    grid.borders();
    let styling = Styling::plain(&grid);
    let geometry = project(&grid, &styling);

    let Some(corner) = geometry.iter().find(|g| g.position == (0, 0)) else {
        unreachable!("corner node exists");
    };
    // Both in-grid medians are bridged by the frame
    assert!(corner.lines.is_empty());
}

#[test]
fn shape_mix_follows_the_styling() {
    let grid = Grid::new(3, 3);
    let mut styling = Styling::stylized(&grid);
    styling.slight_bevel();
    assert_eq!(styling.get(0).shape, NodeShape::Stylized);
    assert!((styling.get(0).bevel - 1.0 / 6.0).abs() < f64::EPSILON);

    let plain = Styling::plain(&grid);
    assert_eq!(plain.get(5).shape, NodeShape::Plain);
}
