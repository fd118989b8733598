use kingfall::chess::board::Board;
use kingfall::chess::core::{Color, Position};
use kingfall::chess::error::ChessError;
use kingfall::chess::factory::{BoardFactory, CustomBoardFactory, InitialBoardFactory};
use kingfall::chess::piece::Piece;
use kingfall::evaluation::Winner;
use pretty_assertions::assert_eq;

fn position(coordinate: &str) -> Position {
    Position::try_from(coordinate)
        .unwrap_or_else(|_| panic!("we are parsing valid coordinates: {coordinate}"))
}

fn initial() -> Board {
    InitialBoardFactory
        .generate()
        .expect("the initial layout is always valid")
}

fn custom(ranks: &[&str], turn: Color) -> Board {
    CustomBoardFactory::new(ranks, turn)
        .generate()
        .expect("test snapshots are valid")
}

/// Plays a sequence of moves that are all expected to be accepted without
/// capturing a king.
fn play(board: &mut Board, moves: &[(&str, &str)]) {
    for (source, target) in moves {
        assert_eq!(board.make_move(source, target), Ok(false), "{source}{target}");
    }
}

#[test]
fn knight_ignores_obstacles() {
    let mut board = initial();
    let knight = board.find_piece(position("b1"));
    assert_eq!(board.make_move("b1", "c3"), Ok(false));
    assert_eq!(board.find_piece(position("c3")), knight);
    assert!(board.find_piece(position("b1")).is_none());
}

#[test]
fn bishop_path_blocked() {
    let mut board = initial();
    assert_eq!(
        board.make_move("c1", "e3"),
        Err(ChessError::PathBlocked {
            from: position("c1"),
            to: position("e3"),
            obstacle: position("d2"),
        })
    );
}

#[test]
fn rook_and_queen_slides_blocked() {
    let mut board = initial();
    assert_eq!(
        board.make_move("a1", "a3"),
        Err(ChessError::PathBlocked {
            from: position("a1"),
            to: position("a3"),
            obstacle: position("a2"),
        })
    );
    assert_eq!(
        board.make_move("d1", "d3"),
        Err(ChessError::PathBlocked {
            from: position("d1"),
            to: position("d3"),
            obstacle: position("d2"),
        })
    );
    // The first occupied cell along the line is reported.
    play(&mut board, &[("a2", "a4"), ("h7", "h6")]);
    assert_eq!(
        board.make_move("a1", "a5"),
        Err(ChessError::PathBlocked {
            from: position("a1"),
            to: position("a5"),
            obstacle: position("a4"),
        })
    );
}

#[test]
fn not_black_turn() {
    let mut board = initial();
    let error = board.make_move("b7", "b6").unwrap_err();
    assert_eq!(error, ChessError::WrongTurn(Color::White));
    assert_eq!(error.to_string(), "it is White's turn");
}

#[test]
fn not_white_turn() {
    let mut board = initial();
    play(&mut board, &[("b2", "b4")]);
    assert_eq!(
        board.make_move("b4", "b5"),
        Err(ChessError::WrongTurn(Color::Black))
    );
}

#[test]
fn friendly_fire() {
    let mut board = initial();
    assert_eq!(
        board.make_move("c2", "b2"),
        Err(ChessError::FriendlyFire(position("b2")))
    );
}

#[test]
fn empty_source() {
    let mut board = initial();
    assert_eq!(
        board.make_move("c4", "c5"),
        Err(ChessError::EmptySource(position("c4")))
    );
}

#[test]
fn invalid_coordinates() {
    let mut board = initial();
    for (source, target) in [("a9", "a1"), ("a1", "i1"), ("", "a1"), ("a1", "a10")] {
        assert!(
            matches!(
                board.make_move(source, target),
                Err(ChessError::InvalidCoordinate(_))
            ),
            "{source}{target}"
        );
    }
}

#[test]
fn rejected_moves_leave_board_untouched() {
    let mut board = initial();
    play(&mut board, &[("e2", "e4"), ("d7", "d5")]);
    let before = board.clone();
    for (source, target) in [
        ("e4", "e6"), // Pawn double push away from the starting rank.
        ("e4", "f5"), // Pawn capture onto an empty cell.
        ("d5", "d4"), // Black piece on White's turn.
        ("a1", "a3"), // Blocked by the a2 pawn.
        ("f1", "f4"),
        ("g1", "g3"),
        ("e1", "e3"),
        ("x1", "e3"),
        ("h3", "h4"),
        ("d1", "d1"),
    ] {
        assert!(board.make_move(source, target).is_err(), "{source}{target}");
    }
    assert_eq!(board, before);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn turns_alternate_and_captures_remove_one_piece() {
    let mut board = initial();
    let moves = [
        ("e2", "e4"),
        ("d7", "d5"),
        ("e4", "d5"),
        ("d8", "d5"),
        ("b1", "c3"),
        ("d5", "a5"),
        ("d2", "d4"),
        ("g8", "f6"),
    ];
    let mut pieces = board.piece_count();
    for (source, target) in moves {
        let mover = board.turn();
        let captures = !board.find_piece(position(target)).is_none();
        assert_eq!(board.make_move(source, target), Ok(false), "{source}{target}");
        assert_eq!(board.last_turn(), mover);
        assert_eq!(board.turn(), mover.opponent());
        let expected = if captures { pieces - 1 } else { pieces };
        assert_eq!(board.piece_count(), expected);
        pieces = expected;
    }
    assert_eq!(pieces, 30);
}

#[test]
fn find_piece_is_idempotent() {
    let board = initial();
    for position in Position::all() {
        assert_eq!(board.find_piece(position), board.find_piece(position));
    }
}

#[test]
fn king_capture_reports_the_winner() {
    let mut board = custom(
        &[
            "........", //
            "........", //
            "........", //
            "........", //
            "...kr...", //
            "....K...", //
            "........", //
            "........",
        ],
        Color::White,
    );
    // Capturing the rook does not end the game.
    assert_eq!(board.make_move("e3", "e4"), Ok(false));
    assert_eq!(board.last_turn(), Color::White);
    assert_eq!(board.find_piece(position("e4")), Piece::King(Color::White));
    // Black answers by capturing the white king.
    assert_eq!(board.make_move("d4", "e4"), Ok(true));
    assert_eq!(board.last_turn(), Color::Black);
    assert_eq!(Winner::from(board.last_turn()), Winner::Black);
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn white_king_captures_black_king() {
    let mut board = custom(
        &[
            "........", //
            "........", //
            "........", //
            "...k....", //
            "....K...", //
            "........", //
            "........", //
            "........",
        ],
        Color::White,
    );
    assert_eq!(board.make_move("e4", "d5"), Ok(true));
    assert_eq!(board.last_turn(), Color::White);
}

#[test]
fn stacked_pawns_score_less() {
    let spread = custom(
        &[
            "....k...", //
            "pppppppp", //
            "........", //
            "........", //
            "........", //
            "........", //
            "PP.PPPPP", //
            "....K...",
        ],
        Color::White,
    );
    let stacked = custom(
        &[
            "....k...", //
            "pppppppp", //
            "........", //
            "........", //
            "........", //
            "P.......", //
            "P..PPPPP", //
            "....K...",
        ],
        Color::White,
    );
    let spread = spread.calculate_score();
    let stacked = stacked.calculate_score();
    assert_eq!(
        spread.calculate(Color::White).centipawns() - stacked.calculate(Color::White).centipawns(),
        50
    );
    assert_eq!(spread.calculate(Color::White).centipawns(), 700);
    assert_eq!(stacked.calculate(Color::White).centipawns(), 650);
    assert_eq!(
        Winner::of(spread.calculate(Color::White), spread.calculate(Color::Black)),
        Winner::Black
    );
}

#[test]
fn custom_snapshot_turn() {
    let mut board = custom(
        &[
            "rnbqkbnr", //
            "pppppppp", //
            "........", //
            "........", //
            "........", //
            "........", //
            "PPPPPPPP", //
            "RNBQKBNR",
        ],
        Color::Black,
    );
    assert_eq!(
        board.make_move("e2", "e4"),
        Err(ChessError::WrongTurn(Color::Black))
    );
    play(&mut board, &[("e7", "e5"), ("e2", "e4")]);
}

#[test]
fn rendered_board_reads_back() {
    let mut board = initial();
    play(&mut board, &[("g1", "f3"), ("b8", "c6"), ("e2", "e4")]);
    let snapshot = format!("{board}\nb\n");
    let restored = CustomBoardFactory::try_from(snapshot.as_str())
        .and_then(|factory| factory.generate())
        .expect("rendered boards are valid snapshots");
    assert_eq!(restored, board);
}
