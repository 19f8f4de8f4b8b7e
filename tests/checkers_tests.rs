//! Checkers: opening layout, steps, captures, promotion and wins.

use gamecenter_engine::core::{BoardSize, Cell, Coord, GameState, Move, PieceType, Player, PlayerSlot};
use gamecenter_engine::rules::{GameKind, RuleViolation, RulesEngine};
use gamecenter_engine::table::{MoveRejection, TableError, TableGame};

const P1: PlayerSlot = PlayerSlot::Player1;
const P2: PlayerSlot = PlayerSlot::Player2;

fn open_table() -> (TableGame, Player, Player) {
    let mut table = TableGame::for_kind(GameKind::Checkers);
    let mut red = Player::new("red", "Red");
    let mut black = Player::new("black", "Black");
    table.add_player(&mut red).unwrap();
    table.add_player(&mut black).unwrap();
    table.start_game().unwrap();
    (table, red, black)
}

fn validate(before: &GameState, mv: Move, player: PlayerSlot) -> Result<GameState, RuleViolation> {
    let rules = GameKind::Checkers.rules();
    let mut after = before.with_move(mv, player).unwrap();
    rules.validate_move(before, &mut after, player)?;
    Ok(after)
}

#[test]
fn test_opening_layout() {
    let state = GameKind::Checkers.rules().init_state(BoardSize::square(8));
    assert_eq!(state.count_owned(P1), 12);
    assert_eq!(state.count_owned(P2), 12);
    assert_eq!(state.owner(Coord::new(2, 1)), P1);
    assert_eq!(state.owner(Coord::new(5, 0)), P2);
    assert!(state.is_empty_at(Coord::new(3, 2)));
    assert!(state.is_empty_at(Coord::new(0, 0)));
}

/// Player1 opens with a forward diagonal step.
#[test]
fn test_opening_step_accepted() {
    let (mut table, red, black) = open_table();

    table
        .play_move(&red.id, Coord::new(2, 1), Coord::new(3, 2))
        .unwrap();

    let state = table.state();
    assert!(state.is_empty_at(Coord::new(2, 1)));
    assert_eq!(state.owner(Coord::new(3, 2)), P1);
    assert_eq!(state.piece(Coord::new(3, 2)), PieceType::MAN);
    assert_eq!(table.current_player(), Some(&black.id));
}

#[test]
fn test_capture_through_table() {
    let (mut table, red, black) = open_table();

    table.play_move(&red.id, Coord::new(2, 1), Coord::new(3, 2)).unwrap();
    table.play_move(&black.id, Coord::new(5, 4), Coord::new(4, 3)).unwrap();
    table.play_move(&red.id, Coord::new(3, 2), Coord::new(5, 4)).unwrap();

    let state = table.state();
    assert!(state.is_empty_at(Coord::new(4, 3)));
    assert_eq!(state.owner(Coord::new(5, 4)), P1);
    assert_eq!(state.count_owned(P2), 11);
    assert!(table.is_open());
}

/// A lone capture on a hand-built position.
#[test]
fn test_capture_removes_jumped_piece() {
    let mut before = GameState::new(8, 8, Cell::EMPTY);
    before.set(Coord::new(2, 1), Cell::new(P1, PieceType::MAN)).unwrap();
    before.set(Coord::new(3, 2), Cell::new(P2, PieceType::MAN)).unwrap();

    let after = validate(&before, Move::new(Coord::new(2, 1), Coord::new(4, 3)), P1).unwrap();
    assert!(after.is_empty_at(Coord::new(3, 2)));
    assert_eq!(after.owner(Coord::new(4, 3)), P1);
    assert_eq!(before.owner(Coord::new(3, 2)), P2);
}

#[test]
fn test_backward_step_rejected_for_man() {
    let (mut table, red, black) = open_table();
    table.play_move(&red.id, Coord::new(2, 1), Coord::new(3, 2)).unwrap();
    table.play_move(&black.id, Coord::new(5, 4), Coord::new(4, 5)).unwrap();
    let snapshot = table.state().clone();

    let err = table
        .play_move(&red.id, Coord::new(3, 2), Coord::new(2, 1))
        .unwrap_err();
    assert!(matches!(
        err,
        TableError::InvalidMove {
            reason: MoveRejection::Rules(RuleViolation::WrongDirection { .. }),
            ..
        }
    ));
    assert_eq!(table.state(), &snapshot);
    assert_eq!(table.current_player(), Some(&red.id));
}

#[test]
fn test_step_onto_occupied_rejected() {
    let (mut table, red, _) = open_table();
    let err = table
        .play_move(&red.id, Coord::new(1, 0), Coord::new(2, 1))
        .unwrap_err();
    assert!(matches!(
        err,
        TableError::InvalidMove {
            reason: MoveRejection::Rules(_),
            ..
        }
    ));
    assert_eq!(table.move_count(), 0);
}

#[test]
fn test_king_moves_backwards() {
    let mut before = GameState::new(8, 8, Cell::EMPTY);
    before.set(Coord::new(4, 3), Cell::new(P1, PieceType::MAN)).unwrap();
    assert_eq!(
        validate(&before, Move::new(Coord::new(4, 3), Coord::new(3, 2)), P1),
        Err(RuleViolation::WrongDirection {
            from: Coord::new(4, 3),
            to: Coord::new(3, 2)
        })
    );

    before.set(Coord::new(4, 3), Cell::new(P1, PieceType::KING)).unwrap();
    let after = validate(&before, Move::new(Coord::new(4, 3), Coord::new(3, 2)), P1).unwrap();
    assert_eq!(after.piece(Coord::new(3, 2)), PieceType::KING);
}

#[test]
fn test_promotion_on_far_row() {
    let mut before = GameState::new(8, 8, Cell::EMPTY);
    before.set(Coord::new(6, 1), Cell::new(P1, PieceType::MAN)).unwrap();
    before.set(Coord::new(1, 2), Cell::new(P2, PieceType::MAN)).unwrap();

    let after = validate(&before, Move::new(Coord::new(6, 1), Coord::new(7, 2)), P1).unwrap();
    assert_eq!(after.piece(Coord::new(7, 2)), PieceType::KING);

    let after = validate(&before, Move::new(Coord::new(1, 2), Coord::new(0, 1)), P2).unwrap();
    assert_eq!(after.piece(Coord::new(0, 1)), PieceType::KING);
}

#[test]
fn test_straight_and_long_moves_rejected() {
    let mut before = GameState::new(8, 8, Cell::EMPTY);
    before.set(Coord::new(2, 1), Cell::new(P1, PieceType::MAN)).unwrap();

    for to in [Coord::new(3, 1), Coord::new(5, 4), Coord::new(2, 3)] {
        assert!(matches!(
            validate(&before, Move::new(Coord::new(2, 1), to), P1),
            Err(RuleViolation::NotDiagonal { .. })
        ));
    }
}

#[test]
fn test_jump_over_empty_rejected() {
    let mut before = GameState::new(8, 8, Cell::EMPTY);
    before.set(Coord::new(2, 1), Cell::new(P1, PieceType::MAN)).unwrap();
    assert_eq!(
        validate(&before, Move::new(Coord::new(2, 1), Coord::new(4, 3)), P1),
        Err(RuleViolation::NothingToCapture {
            at: Coord::new(3, 2)
        })
    );
}

#[test]
fn test_last_capture_wins() {
    let rules = GameKind::Checkers.rules();
    let mut before = GameState::new(8, 8, Cell::EMPTY);
    before.set(Coord::new(2, 1), Cell::new(P1, PieceType::MAN)).unwrap();
    before.set(Coord::new(3, 2), Cell::new(P2, PieceType::MAN)).unwrap();
    assert!(!rules.is_game_over(&before));

    let after = validate(&before, Move::new(Coord::new(2, 1), Coord::new(4, 3)), P1).unwrap();
    assert_eq!(rules.check_win(&after), P1);
    assert!(rules.is_game_over(&after));
}
