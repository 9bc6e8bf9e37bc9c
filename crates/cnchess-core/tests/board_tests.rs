use cnchess_core::constants::{COL_BEGIN, COL_END, GRID_COLS, GRID_ROWS, ROW_BEGIN, ROW_END};
use cnchess_core::{parse_move, Board, Cell, Piece, PieceType, Pos, Side};

fn interior(row_offset: i32, col_offset: i32) -> Pos {
    Pos::new(ROW_BEGIN + row_offset, COL_BEGIN + col_offset)
}

#[test]
fn opening_layout_matches_standard_setup() {
    let board = Board::new();

    assert_eq!(
        board.get(interior(0, 0)).piece(),
        Some(Piece::new(PieceType::Rook, Side::Upper))
    );
    assert_eq!(
        board.get(interior(0, 4)).piece(),
        Some(Piece::new(PieceType::General, Side::Upper))
    );
    assert_eq!(
        board.get(interior(2, 1)).piece(),
        Some(Piece::new(PieceType::Cannon, Side::Upper))
    );
    assert_eq!(
        board.get(interior(3, 4)).piece(),
        Some(Piece::new(PieceType::Pawn, Side::Upper))
    );
    assert_eq!(
        board.get(interior(9, 4)).piece(),
        Some(Piece::new(PieceType::General, Side::Lower))
    );
    assert_eq!(
        board.get(interior(6, 0)).piece(),
        Some(Piece::new(PieceType::Pawn, Side::Lower))
    );
    assert!(board.get(interior(4, 4)).is_empty());
    assert!(board.get(interior(5, 8)).is_empty());
    assert!(board.history().is_empty());
}

#[test]
fn get_is_total_over_and_beyond_storage() {
    let board = Board::new();

    assert!(board.get(Pos::new(0, 0)).is_off_board());
    assert!(board.get(Pos::new(1, 6)).is_off_board());
    assert!(board.get(Pos::new(GRID_ROWS as i32 - 1, GRID_COLS as i32 - 1)).is_off_board());
    assert!(board.get(Pos::new(-3, 5)).is_off_board());
    assert!(board.get(Pos::new(5, 200)).is_off_board());
}

#[test]
fn sentinel_border_survives_apply_and_undo() {
    let mut board = Board::new();
    for input in ["b2e2", "h7h4", "e2e6", "h4e4"] {
        board.apply(parse_move(input).expect("valid move string"));
    }
    board.undo();
    board.undo();

    for row in 0..GRID_ROWS as i32 {
        for col in 0..GRID_COLS as i32 {
            let pos = Pos::new(row, col);
            if pos.is_interior() {
                assert!(!board.get(pos).is_off_board(), "interior cell at {pos:?}");
            } else {
                assert_eq!(board.get(pos), Cell::OffBoard, "border cell at {pos:?}");
            }
        }
    }
}

#[test]
fn apply_records_history_and_moves_piece() {
    let mut board = Board::new();
    let mv = parse_move("b2e2").expect("valid move string");
    let cannon = board.get(mv.from);

    board.apply(mv);

    assert!(board.get(mv.from).is_empty());
    assert_eq!(board.get(mv.to), cannon);
    assert_eq!(board.history().len(), 1);

    let entry = board.history()[0];
    assert_eq!(entry.mv, mv);
    assert_eq!(entry.from_cell, cannon);
    assert_eq!(entry.to_cell, Cell::Empty);
}

#[test]
fn apply_undo_restores_board_bit_for_bit() {
    let original = Board::new();
    let mut board = original.clone();

    board.apply(parse_move("b2e2").expect("valid move string"));
    board.undo();

    assert_eq!(board, original);
}

#[test]
fn undo_restores_captured_piece() {
    let original = Board::new();
    let mut board = original.clone();

    // Upper cannon takes the Lower knight over the cannon screen on file b.
    let capture = parse_move("b7b0").expect("valid move string");
    assert_eq!(
        board.get(capture.to).piece(),
        Some(Piece::new(PieceType::Knight, Side::Lower))
    );

    board.apply(capture);
    assert_eq!(
        board.get(capture.to).piece(),
        Some(Piece::new(PieceType::Cannon, Side::Upper))
    );

    board.undo();
    assert_eq!(board, original);
}

#[test]
fn two_moves_two_undos_return_to_opening() {
    let original = Board::new();
    let mut board = original.clone();

    board.apply(parse_move("b2e2").expect("valid move string"));
    board.apply(parse_move("b7e7").expect("valid move string"));
    board.undo();
    board.undo();

    assert_eq!(board, original);
    assert!(board.history().is_empty());
}

#[test]
fn undo_on_empty_history_is_a_noop() {
    let mut board = Board::new();
    assert!(!board.undo());
    assert_eq!(board, Board::new());
}

#[test]
fn reset_reinstalls_opening_and_clears_history() {
    let mut board = Board::new();
    board.apply(parse_move("b2e2").expect("valid move string"));
    board.apply(parse_move("h7h4").expect("valid move string"));

    board.reset();

    assert_eq!(board, Board::new());
}

#[test]
fn put_rejects_border_positions() {
    let mut board = Board::empty();
    let rook = Piece::new(PieceType::Rook, Side::Lower);

    assert!(board.put(rook, interior(5, 5)).is_ok());
    assert!(board.put(rook, Pos::new(0, 0)).is_err());
    assert!(board.put(rook, Pos::new(ROW_END + 1, COL_END)).is_err());
}

#[test]
fn display_draws_interior_with_rank_and_file_legend() {
    let rendered = Board::new().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("9 "));
    assert!(lines[0].contains("R N B A G A B N R"));
    assert!(lines[10].contains("a b c d e f g h i"));
}
