//! Property checks over turn order, boards, line wins and move gating.

use proptest::prelude::*;

use gamecenter_engine::core::{Board, Cell, Coord, GameState, Player, PlayerSlot, TableConfig, TurnQueue};
use gamecenter_engine::rules::{GameKind, RulesEngine};
use gamecenter_engine::table::{MoveRejection, TableError, TableGame};

fn queue_of(len: usize) -> TurnQueue<usize> {
    let mut queue = TurnQueue::new();
    for i in 0..len {
        queue.append(i);
    }
    queue
}

proptest! {
    #[test]
    fn test_next_len_times_is_identity(len in 1usize..12, advance in 0usize..30) {
        let mut queue = queue_of(len);
        for _ in 0..advance {
            queue.next().unwrap();
        }
        let start = *queue.current().unwrap();
        for _ in 0..queue.len() {
            queue.next().unwrap();
        }
        prop_assert_eq!(*queue.current().unwrap(), start);
    }

    #[test]
    fn test_remove_other_keeps_current(len in 2usize..12, advance in 0usize..30, victim in 0usize..12) {
        let mut queue = queue_of(len);
        for _ in 0..advance {
            queue.next().unwrap();
        }
        let victim = victim % len;
        let current = *queue.current().unwrap();
        prop_assume!(victim != current);

        prop_assert!(queue.remove(&victim));
        prop_assert_eq!(*queue.current().unwrap(), current);
        prop_assert_eq!(queue.len(), len - 1);
        prop_assert!(!queue.contains(&victim));
    }

    #[test]
    fn test_remove_current_stays_valid(len in 1usize..12, advance in 0usize..30) {
        let mut queue = queue_of(len);
        for _ in 0..advance {
            queue.next().unwrap();
        }
        let current = *queue.current().unwrap();
        prop_assert!(queue.remove(&current));

        if len == 1 {
            prop_assert!(queue.current().is_err());
        } else {
            prop_assert!(queue.current_index() < queue.len());
        }
    }

    #[test]
    fn test_board_bounds(rows in 1usize..10, cols in 1usize..10, r in -3i32..13, c in -3i32..13) {
        let mut board = Board::new(rows, cols, 0u8);
        let at = Coord::new(r, c);
        let inside = r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols;

        prop_assert_eq!(board.is_valid(at), inside);
        prop_assert_eq!(board.at(at).is_ok(), inside);
        prop_assert_eq!(board.set(at, 7).is_ok(), inside);
        if inside {
            prop_assert_eq!(board.get(at), Some(&7));
        }
    }

    #[test]
    fn test_full_line_wins(n in 3usize..8, line in 0usize..8, kind in 0u8..4, p2 in any::<bool>()) {
        let rules = GameKind::TicTacToe.rules();
        let player = if p2 { PlayerSlot::Player2 } else { PlayerSlot::Player1 };
        let line = line % n;
        let ni = n as i32;
        let li = line as i32;

        let cells: Vec<Coord> = (0..ni)
            .map(|i| match kind {
                0 => Coord::new(li, i),
                1 => Coord::new(i, li),
                2 => Coord::new(i, i),
                _ => Coord::new(i, ni - 1 - i),
            })
            .collect();

        let mut state = GameState::new(n, n, Cell::EMPTY);
        for (i, at) in cells.iter().enumerate() {
            // Leave the last cell open first.
            if i + 1 < cells.len() {
                state.set(*at, Cell::owned_by(player)).unwrap();
            }
        }
        prop_assert_eq!(rules.check_win(&state), PlayerSlot::Unknown);
        prop_assert!(!rules.is_game_over(&state));

        state.set(cells[n - 1], Cell::owned_by(player)).unwrap();
        prop_assert_eq!(rules.check_win(&state), player);
        prop_assert!(rules.is_game_over(&state));
    }

    #[test]
    fn test_wrong_player_always_rejected(kind in 0usize..3, r in 0i32..3, c in 0i32..3, moves in 0usize..3) {
        let kind = GameKind::ALL[kind];
        let mut table = TableGame::new(kind, TableConfig::new(8, 8));
        let mut a = Player::new("a", "A");
        let mut b = Player::new("b", "B");
        table.add_player(&mut a).unwrap();
        table.add_player(&mut b).unwrap();
        table.start_game().unwrap();

        // Let the turn pass a few times with placements on the last row.
        if !table.rules().is_drag_enabled() {
            for i in 0..moves {
                let player = if i % 2 == 0 { &a } else { &b };
                let at = Coord::new(7, i as i32);
                table.play_move(&player.id, at, at).unwrap();
            }
        }

        let current = table.current_player().cloned().unwrap();
        let other = if current == a.id { &b } else { &a };
        let before = table.state().clone();
        let at = Coord::new(r, c);

        let err = table.play_move(&other.id, at, at).unwrap_err();
        prop_assert_eq!(
            err,
            TableError::InvalidMove {
                player: other.id.clone(),
                reason: MoveRejection::NotYourTurn,
            }
        );
        prop_assert_eq!(table.state(), &before);
    }

    #[test]
    fn test_missing_players_deficit(kind in 0usize..3, joined in 0usize..2) {
        let kind = GameKind::ALL[kind];
        let mut table = TableGame::for_kind(kind);
        for i in 0..joined {
            let mut player = Player::new(format!("p{i}"), "P");
            table.add_player(&mut player).unwrap();
        }
        let before = table.state().clone();
        let needed = table.rules().min_players();

        prop_assert_eq!(
            table.start_game(),
            Err(TableError::MissingPlayers { missing: needed - joined })
        );
        prop_assert_eq!(table.state(), &before);
        prop_assert!(!table.is_open());
    }
}
