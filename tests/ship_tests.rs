use broadside::{all_sunk, footprint, BoardError, Orientation, Ship};

#[test]
fn test_new_ship_unplaced() {
    let mut ship = Ship::new("battleship", 5, Orientation::Horizontal).unwrap();
    assert_eq!(ship.name(), "battleship");
    assert_eq!(ship.length(), 5);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert!(!ship.is_placed());
    // no squares yet, so nothing can be hit
    assert!(!ship.hit(0, 0));
    assert_eq!(ship.hit_count(), 0);
}

#[test]
fn test_invalid_ships_rejected() {
    assert_eq!(
        Ship::new("empty", 0, Orientation::Vertical).unwrap_err(),
        BoardError::InvalidLength
    );
    assert_eq!(
        Ship::with_coordinates("short", 3, Orientation::Horizontal, &[(0, 0), (0, 1)])
            .unwrap_err(),
        BoardError::CoordinateCountMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_hit_on_ship_coordinates() {
    let coords: Vec<_> = (1..=6).map(|c| (0, c)).collect();
    let mut ship = Ship::with_coordinates("Carrier", 6, Orientation::Horizontal, &coords).unwrap();
    assert!(ship.hit(0, 5));
    assert_eq!(ship.hit_count(), 1);
    assert!(ship.squares()[4].is_hit());
    // miss
    assert!(!ship.hit(1, 5));
    assert_eq!(ship.hit_count(), 1);
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::with_coordinates(
        "submarine",
        3,
        Orientation::Horizontal,
        &[(0, 3), (0, 4), (0, 5)],
    )
    .unwrap();
    assert!(!ship.is_sunk());
    assert!(ship.hit(0, 3));
    assert!(ship.hit(0, 4));
    assert!(!ship.is_sunk());
    assert!(ship.hit(0, 5));
    assert!(ship.is_sunk());
}

#[test]
fn test_same_square_counted_once() {
    let mut ship =
        Ship::with_coordinates("destroyer", 2, Orientation::Vertical, &[(4, 4), (5, 4)]).unwrap();
    assert!(ship.hit(4, 4));
    assert!(!ship.hit(4, 4));
    assert!(!ship.hit(4, 4));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn test_footprint_follows_orientation() {
    assert_eq!(
        footprint((0, 3), 3, Orientation::Horizontal).unwrap(),
        vec![(0, 3), (0, 4), (0, 5)]
    );
    let vertical = footprint((0, 3), 4, Orientation::Vertical).unwrap();
    assert_eq!(vertical.len(), 4);
    assert!(vertical.contains(&(3, 3)));
    assert!(!vertical.contains(&(3, 4)));
    assert!(!vertical.contains(&(0, 6)));
    assert_eq!(footprint((0, usize::MAX), 2, Orientation::Horizontal), None);
}

#[test]
fn test_orientation_parse() {
    assert_eq!("horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!("Vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!("v".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!(
        "diagonal".parse::<Orientation>(),
        Err(BoardError::InvalidOrientation)
    );
    assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
}

#[test]
fn test_all_sunk() {
    assert!(all_sunk(&[]), "an empty fleet counts as sunk");

    let mut a = Ship::with_coordinates("a", 1, Orientation::Horizontal, &[(0, 0)]).unwrap();
    let b = Ship::with_coordinates("b", 1, Orientation::Horizontal, &[(2, 2)]).unwrap();
    a.hit(0, 0);
    assert!(!all_sunk(&[a.clone(), b.clone()]));
    let mut b = b;
    b.hit(2, 2);
    assert!(all_sunk(&[a, b]));
}

#[test]
fn test_ship_from_default_spec() {
    let ship = Ship::from_spec(&broadside::DEFAULT_FLEET[0]);
    assert_eq!(ship.name(), "Carrier");
    assert_eq!(ship.length(), 6);
    assert!(!ship.is_placed());
}

#[test]
fn test_coordinates_must_form_footprint() {
    assert_eq!(
        Ship::with_coordinates("twin", 2, Orientation::Horizontal, &[(0, 0), (0, 0)]).unwrap_err(),
        BoardError::FootprintMismatch
    );
    // contiguous, but along the wrong axis
    assert_eq!(
        Ship::with_coordinates("bent", 2, Orientation::Horizontal, &[(0, 0), (1, 0)]).unwrap_err(),
        BoardError::FootprintMismatch
    );
    assert_eq!(
        Ship::with_coordinates("gap", 2, Orientation::Vertical, &[(0, 0), (2, 0)]).unwrap_err(),
        BoardError::FootprintMismatch
    );
    let ship = Ship::with_coordinates("ok", 2, Orientation::Vertical, &[(0, 0), (1, 0)]).unwrap();
    assert!(ship.occupies(1, 0));
}
