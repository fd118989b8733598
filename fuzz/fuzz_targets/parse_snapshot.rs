#![no_main]
use kingfall::chess::core::Color;
use kingfall::chess::factory::{BoardFactory, CustomBoardFactory};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = CustomBoardFactory::try_from(input).and_then(|factory| factory.generate())
    else {
        return;
    };
    let turn = match board.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    let rendered = format!("{board}\n{turn}");
    let restored = CustomBoardFactory::try_from(rendered.as_str())
        .and_then(|factory| factory.generate())
        .expect("rendered boards are valid snapshots");
    assert_eq!(restored, board);
});
