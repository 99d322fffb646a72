//! Tests for tic-tac-toe position enum.

use tictactoe_mvc::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_all_is_in_index_order() {
    for (index, position) in Position::ALL.iter().enumerate() {
        assert_eq!(position.to_index(), index);
        assert_eq!(Position::at(position.row(), position.col()), Some(*position));
    }
    assert_eq!(Position::at(3, 0), None);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("0"), None);
    assert_eq!(Position::from_label_or_number("bottom-center"), Some(Position::BottomCenter));
    assert_eq!(Position::from_label_or_number("middle"), None);
}
