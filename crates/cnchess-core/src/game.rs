use crate::board::Board;
use crate::constants::{palace_row_bounds, NINE_PALACE_LEFT, NINE_PALACE_RIGHT};
use crate::movegen::pseudo_moves;
use crate::types::{Move, Piece, PieceType, Pos, Side};

/// Generals never leave their nine-palace, so a palace scan is enough.
pub fn general_alive(board: &Board, side: Side) -> bool {
    let general = Piece::new(PieceType::General, side);
    let (top, bottom) = palace_row_bounds(side);

    for row in top..=bottom {
        for col in NINE_PALACE_LEFT..=NINE_PALACE_RIGHT {
            if board.get(Pos::new(row, col)).piece() == Some(general) {
                return true;
            }
        }
    }
    false
}

/// A side has won once the opposing general has been captured.
pub fn is_win(board: &Board, side: Side) -> bool {
    let upper_alive = general_alive(board, Side::Upper);
    let lower_alive = general_alive(board, Side::Lower);

    if upper_alive && lower_alive {
        return false;
    }
    match side {
        Side::Upper => upper_alive,
        Side::Lower => lower_alive,
    }
}

pub fn winner(board: &Board) -> Option<Side> {
    if is_win(board, Side::Upper) {
        Some(Side::Upper)
    } else if is_win(board, Side::Lower) {
        Some(Side::Lower)
    } else {
        None
    }
}

/// A candidate move is legal iff the generator emits it for `side`.
pub fn is_legal_move(board: &Board, side: Side, mv: Move) -> bool {
    pseudo_moves(board, side).contains(&mv)
}
