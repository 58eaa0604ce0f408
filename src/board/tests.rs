use super::*;

#[test]
fn test_side_opposite() {
    assert_eq!(Side::Red.opposite(), Side::Blue);
    assert_eq!(Side::Blue.opposite(), Side::Red);
    assert_eq!(Side::Neutral.opposite(), Side::Neutral);
}

#[test]
fn test_side_marks() {
    assert_eq!(Side::Neutral.mark(), '-');
    assert_eq!(Side::Red.mark(), 'r');
    assert_eq!(Side::Blue.mark(), 'b');
}

#[test]
fn test_square_accessors() {
    let sq = Square::new(Side::Blue, 3);
    assert_eq!(sq.side(), Side::Blue);
    assert_eq!(sq.spots(), 3);
    assert_eq!(Square::INITIAL.side(), Side::Neutral);
    assert_eq!(Square::INITIAL.spots(), 1);
}

#[test]
#[should_panic(expected = "at least one spot")]
fn test_square_zero_spots_panics() {
    let _ = Square::new(Side::Red, 0);
}

#[test]
fn test_move_index_roundtrip() {
    // Index 7 on a 5-wide board is row 2, column 3.
    let mv = Move::from_index(7, 5);
    assert_eq!(mv, Move::new(2, 3));
    assert_eq!(mv.to_index(5), 7);
}

#[test]
fn test_move_corner_indices() {
    assert_eq!(Move::from_index(0, 5), Move::new(1, 1));
    assert_eq!(Move::from_index(4, 5), Move::new(1, 5));
    assert_eq!(Move::from_index(20, 5), Move::new(5, 1));
    assert_eq!(Move::from_index(24, 5), Move::new(5, 5));
}

#[test]
fn test_move_display() {
    assert_eq!(Move::new(2, 3).to_string(), "(2, 3)");
}
