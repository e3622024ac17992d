use sea_battle::ui::{describe_outcome, BoardView, MoveLabel};
use sea_battle::{Board, Coordinate, Orientation, ShotOutcome, Vessel};

fn small_board(hidden: bool) -> Board {
    let mut board = Board::new(2, hidden);
    board
        .place_vessel(Vessel::new(1, Coordinate::new(0, 0), Orientation::Vertical))
        .unwrap();
    board.begin_match();
    board
}

#[test]
fn test_render_own_board() {
    let board = small_board(false);
    assert_eq!(
        BoardView(&board).to_string(),
        "  | 1 | 2\n1 | ■ | 0\n2 | 0 | 0"
    );
}

#[test]
fn test_render_hides_vessels() {
    let mut board = small_board(true);
    assert_eq!(
        BoardView(&board).to_string(),
        "  | 1 | 2\n1 | 0 | 0\n2 | 0 | 0"
    );
    board.set_hidden(false);
    assert!(BoardView(&board).to_string().contains('■'));
}

#[test]
fn test_render_shots() {
    let mut board = small_board(true);
    board.resolve_shot(Coordinate::new(1, 1)).unwrap();
    assert_eq!(
        BoardView(&board).to_string(),
        "  | 1 | 2\n1 | 0 | 0\n2 | 0 | T"
    );

    board.resolve_shot(Coordinate::new(0, 0)).unwrap();
    assert_eq!(
        BoardView(&board).to_string(),
        "  | 1 | 2\n1 | X | *\n2 | * | *"
    );
}

#[test]
fn test_header_for_wider_board() {
    let board = Board::new(3, false);
    let text = BoardView(&board).to_string();
    assert_eq!(text.lines().next(), Some("  | 1 | 2 | 3"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_outcome_and_move_labels() {
    assert_eq!(describe_outcome(ShotOutcome::Miss), "Miss!");
    assert_eq!(describe_outcome(ShotOutcome::Hit), "Ship hit!");
    assert_eq!(describe_outcome(ShotOutcome::Destroyed), "Ship destroyed!");
    assert_eq!(MoveLabel(Coordinate::new(2, 4)).to_string(), "3 5");
}
