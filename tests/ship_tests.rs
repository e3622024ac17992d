use std::collections::BTreeSet;

use sea_battle::{BoardError, Coordinate, Orientation, Vessel};

#[test]
fn test_occupied_cells_follow_orientation() {
    let across = Vessel::new(3, Coordinate::new(1, 2), Orientation::Horizontal);
    let cells: Vec<Coordinate> = across.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
            Coordinate::new(3, 2)
        ]
    );

    let down = Vessel::new(2, Coordinate::new(0, 0), Orientation::Vertical);
    let cells: Vec<Coordinate> = down.occupied_cells().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
    assert!(down.occupies(Coordinate::new(0, 1)));
    assert!(!down.occupies(Coordinate::new(1, 0)));
}

#[test]
fn test_register_hit_until_destroyed() {
    let mut vessel = Vessel::new(2, Coordinate::new(4, 4), Orientation::Horizontal);
    assert_eq!(vessel.remaining_hits(), 2);
    assert!(!vessel.is_destroyed());

    vessel.register_hit().unwrap();
    assert_eq!(vessel.remaining_hits(), 1);
    assert!(!vessel.is_destroyed());

    vessel.register_hit().unwrap();
    assert!(vessel.is_destroyed());

    assert_eq!(vessel.register_hit(), Err(BoardError::AlreadyDestroyed));
    assert_eq!(vessel.remaining_hits(), 0);
}

#[test]
fn test_contour_surrounds_vessel() {
    let single = Vessel::new(1, Coordinate::new(0, 0), Orientation::Vertical);
    let ring: BTreeSet<Coordinate> = single.contour().collect();
    assert_eq!(ring.len(), 8);
    assert!(!ring.contains(&Coordinate::new(0, 0)));
    // Off-board neighbours are kept; the board clips them.
    assert!(ring.contains(&Coordinate::new(-1, -1)));

    let pair = Vessel::new(2, Coordinate::new(2, 2), Orientation::Horizontal);
    let ring: BTreeSet<Coordinate> = pair.contour().collect();
    assert_eq!(ring.len(), 10);
    for cell in pair.occupied_cells() {
        assert!(!ring.contains(&cell));
    }
    assert!(ring.contains(&Coordinate::new(1, 1)));
    assert!(ring.contains(&Coordinate::new(4, 3)));
    assert!(!ring.contains(&Coordinate::new(5, 2)));
}

#[test]
fn test_accessors() {
    let vessel = Vessel::new(4, Coordinate::new(1, 0), Orientation::Vertical);
    assert_eq!(vessel.length(), 4);
    assert_eq!(vessel.origin(), Coordinate::new(1, 0));
    assert_eq!(vessel.orientation(), Orientation::Vertical);
}

#[test]
#[should_panic]
fn test_zero_length_vessel_panics() {
    let _ = Vessel::new(0, Coordinate::new(0, 0), Orientation::Horizontal);
}
