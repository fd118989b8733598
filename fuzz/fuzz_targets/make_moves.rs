#![no_main]
use kingfall::chess::board::Board;
use kingfall::chess::core::Position;
use libfuzzer_sys::fuzz_target;

// Every pair of bytes is a move between two cells.
fuzz_target!(|data: &[u8]| {
    let mut board = Board::starting();
    let cells = Position::all().collect::<Vec<_>>();
    for pair in data.chunks_exact(2) {
        let source = cells[usize::from(pair[0]) % cells.len()];
        let target = cells[usize::from(pair[1]) % cells.len()];
        let before = board.clone();
        let pieces = board.piece_count();
        match board.apply(source, target) {
            Ok(king_captured) => {
                assert_eq!(board.last_turn(), before.turn());
                assert!(board.piece_count() + 1 >= pieces);
                if king_captured {
                    return;
                }
            },
            Err(_) => assert_eq!(board, before),
        }
    }
});
