use broadside::Square;

#[test]
fn test_default_square_is_origin_and_unhit() {
    let square = Square::default();
    assert_eq!(square.x(), 0);
    assert_eq!(square.y(), 0);
    assert!(!square.is_hit());
}

#[test]
fn test_mark_hit_only_goes_one_way() {
    let mut square = Square::new(3, 7);
    square.mark_hit();
    assert!(square.is_hit());
    square.mark_hit();
    assert!(square.is_hit());
    assert_eq!(square.coord(), (3, 7));
}

#[test]
fn test_squares_compare_by_position() {
    assert_eq!(Square::with_hit(1, 2, true), Square::new(1, 2));
    assert_ne!(Square::new(1, 2), Square::new(2, 1));
    assert_eq!(Square::from((4, 5)), Square::new(4, 5));
}
