//! Tests for outcome evaluation.

use tictactoe_engine::{
    BalancedMarks, Board, BoardError, GameStatus, Invariant, LINES, Player, Position,
    SingleWinner, Square, evaluate, is_draw,
};

fn place(board: &mut Board, positions: &[Position], player: Player) {
    for pos in positions {
        board.set(*pos, Square::Occupied(player));
    }
}

#[test]
fn test_empty_board_is_in_progress() {
    assert_eq!(evaluate(&Board::new()), Ok(GameStatus::InProgress));
}

#[test]
fn test_marks_without_a_line_stay_in_progress() {
    let mut board = Board::new();
    place(&mut board, &[Position::TopLeft, Position::Center], Player::X);
    place(&mut board, &[Position::BottomRight], Player::O);
    assert_eq!(evaluate(&board), Ok(GameStatus::InProgress));
}

#[test]
fn test_every_line_scores_a_win() {
    for line in LINES {
        let mut board = Board::new();
        place(&mut board, &line, Player::X);
        assert_eq!(
            evaluate(&board),
            Ok(GameStatus::Won(Player::X)),
            "line {line:?} not detected",
        );
    }
}

#[test]
fn test_win_reported_with_empty_squares_remaining() {
    let mut board = Board::new();
    place(
        &mut board,
        &[Position::TopRight, Position::MiddleRight, Position::BottomRight],
        Player::O,
    );
    place(&mut board, &[Position::TopLeft, Position::Center], Player::X);
    assert_eq!(evaluate(&board), Ok(GameStatus::Won(Player::O)));
}

#[test]
fn test_full_board_without_a_line_is_a_draw() {
    let mut board = Board::new();
    // X O X / O X X / O X O
    place(
        &mut board,
        &[
            Position::TopLeft,
            Position::TopRight,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
        ],
        Player::X,
    );
    place(
        &mut board,
        &[
            Position::TopCenter,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::BottomRight,
        ],
        Player::O,
    );
    assert_eq!(evaluate(&board), Ok(GameStatus::Draw));
    assert!(is_draw(&board));
}

#[test]
fn test_full_board_with_a_line_is_a_win_not_a_draw() {
    let mut board = Board::new();
    // X X X / O O X / O X O
    place(
        &mut board,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomCenter,
        ],
        Player::X,
    );
    place(
        &mut board,
        &[
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
            Position::BottomRight,
        ],
        Player::O,
    );
    assert_eq!(evaluate(&board), Ok(GameStatus::Won(Player::X)));
    assert!(!is_draw(&board));
}

#[test]
fn test_conflicting_winners_are_rejected() {
    let mut board = Board::new();
    place(
        &mut board,
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        Player::X,
    );
    place(
        &mut board,
        &[
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        Player::O,
    );
    assert_eq!(evaluate(&board), Err(BoardError::ConflictingWinners));
    assert!(!SingleWinner::holds(&board));
}

#[test]
fn test_invariants_hold_on_legal_snapshots() {
    let mut board = Board::new();
    let moves = [
        (Position::Center, Player::X),
        (Position::TopLeft, Player::O),
        (Position::BottomRight, Player::X),
        (Position::TopRight, Player::O),
    ];
    for (pos, player) in moves {
        board.set(pos, Square::Occupied(player));
        assert!(BalancedMarks::holds(&board), "{}", BalancedMarks::description());
        assert!(SingleWinner::holds(&board), "{}", SingleWinner::description());
    }
}
