use crate::board::Board;
use crate::constants::{
    palace_row_bounds, COL_BEGIN, COL_END, NINE_PALACE_LEFT, NINE_PALACE_RIGHT, RIVER_DOWN,
    RIVER_UP, ROW_BEGIN, ROW_END,
};
use crate::types::{Move, MoveList, PieceType, Pos, Side};

pub const CARDINALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Every move that respects movement geometry and capture rules for `side`,
/// in interior scan order. Moves that expose one's own general are NOT
/// filtered; the flying-general capture emitted here lets the search punish
/// them one ply later.
pub fn pseudo_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();

    for row in ROW_BEGIN..=ROW_END {
        for col in COL_BEGIN..=COL_END {
            let from = Pos::new(row, col);
            let Some(piece) = board.get(from).piece() else {
                continue;
            };
            if piece.side != side {
                continue;
            }

            match piece.piece_type {
                PieceType::Pawn => pawn_moves(board, &mut moves, from, side),
                PieceType::Cannon => cannon_moves(board, &mut moves, from, side),
                PieceType::Rook => rook_moves(board, &mut moves, from, side),
                PieceType::Knight => knight_moves(board, &mut moves, from, side),
                PieceType::Bishop => bishop_moves(board, &mut moves, from, side),
                PieceType::Advisor => advisor_moves(board, &mut moves, from, side),
                PieceType::General => general_moves(board, &mut moves, from, side),
            }
        }
    }

    moves
}

/// A destination is reachable unless it is the sentinel or holds a
/// same-side piece.
fn push_if_reachable(board: &Board, moves: &mut MoveList, from: Pos, to: Pos, side: Side) {
    let dest = board.get(to);
    if !dest.is_off_board() && dest.side() != Some(side) {
        moves.push(Move::new(from, to));
    }
}

fn pawn_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    match side {
        Side::Upper => {
            push_if_reachable(board, moves, from, from.offset(1, 0), side);
            if from.row > RIVER_UP {
                push_if_reachable(board, moves, from, from.offset(0, -1), side);
                push_if_reachable(board, moves, from, from.offset(0, 1), side);
            }
        }
        Side::Lower => {
            push_if_reachable(board, moves, from, from.offset(-1, 0), side);
            if from.row < RIVER_DOWN {
                push_if_reachable(board, moves, from, from.offset(0, -1), side);
                push_if_reachable(board, moves, from, from.offset(0, 1), side);
            }
        }
    }
}

fn cannon_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    for (d_row, d_col) in CARDINALS {
        cannon_ride(board, moves, from, d_row, d_col, side);
    }
}

fn cannon_ride(board: &Board, moves: &mut MoveList, from: Pos, d_row: i32, d_col: i32, side: Side) {
    let mut pos = from.offset(d_row, d_col);
    let mut cell = board.get(pos);

    while cell.is_empty() {
        moves.push(Move::new(from, pos));
        pos = pos.offset(d_row, d_col);
        cell = board.get(pos);
    }

    if cell.is_off_board() {
        return;
    }

    // The first piece met is the screen; the first piece past it may be
    // captured if it belongs to the opponent.
    loop {
        pos = pos.offset(d_row, d_col);
        cell = board.get(pos);
        if cell.is_empty() {
            continue;
        }
        if cell.side() == Some(side.opponent()) {
            moves.push(Move::new(from, pos));
        }
        break;
    }
}

fn rook_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    for (d_row, d_col) in CARDINALS {
        rook_ride(board, moves, from, d_row, d_col, side);
    }
}

fn rook_ride(board: &Board, moves: &mut MoveList, from: Pos, d_row: i32, d_col: i32, side: Side) {
    let mut pos = from.offset(d_row, d_col);
    let mut cell = board.get(pos);

    while cell.is_empty() {
        moves.push(Move::new(from, pos));
        pos = pos.offset(d_row, d_col);
        cell = board.get(pos);
    }

    if cell.side() == Some(side.opponent()) {
        moves.push(Move::new(from, pos));
    }
}

/// Each orthogonal leg gates the two L-moves that bend around it.
const KNIGHT_LEGS: [((i32, i32), [(i32, i32); 2]); 4] = [
    ((1, 0), [(2, 1), (2, -1)]),
    ((-1, 0), [(-2, 1), (-2, -1)]),
    ((0, 1), [(1, 2), (-1, 2)]),
    ((0, -1), [(1, -2), (-1, -2)]),
];

fn knight_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    for ((leg_row, leg_col), destinations) in KNIGHT_LEGS {
        if !board.get(from.offset(leg_row, leg_col)).is_empty() {
            continue;
        }
        for (d_row, d_col) in destinations {
            push_if_reachable(board, moves, from, from.offset(d_row, d_col), side);
        }
    }
}

fn bishop_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    for (d_row, d_col) in DIAGONALS {
        let to = from.offset(2 * d_row, 2 * d_col);

        // A bishop never crosses the river.
        match side {
            Side::Upper if to.row > RIVER_UP => continue,
            Side::Lower if to.row < RIVER_DOWN => continue,
            _ => {}
        }

        if board.get(from.offset(d_row, d_col)).is_empty() {
            push_if_reachable(board, moves, from, to, side);
        }
    }
}

fn advisor_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    let (top, bottom) = palace_row_bounds(side);
    for (d_row, d_col) in DIAGONALS {
        let to = from.offset(d_row, d_col);
        if to.row < top || to.row > bottom || to.col < NINE_PALACE_LEFT || to.col > NINE_PALACE_RIGHT
        {
            continue;
        }
        push_if_reachable(board, moves, from, to, side);
    }
}

fn general_moves(board: &Board, moves: &mut MoveList, from: Pos, side: Side) {
    let (top, bottom) = palace_row_bounds(side);
    for (d_row, d_col) in CARDINALS {
        let to = from.offset(d_row, d_col);
        if to.row < top || to.row > bottom || to.col < NINE_PALACE_LEFT || to.col > NINE_PALACE_RIGHT
        {
            continue;
        }
        push_if_reachable(board, moves, from, to, side);
    }

    // Flying general: capture the opposing general along an open file.
    let d_row = match side {
        Side::Upper => 1,
        Side::Lower => -1,
    };
    let mut pos = from.offset(d_row, 0);
    loop {
        let cell = board.get(pos);
        if cell.is_empty() {
            pos = pos.offset(d_row, 0);
            continue;
        }
        if let Some(piece) = cell.piece() {
            if piece.side != side && piece.piece_type == PieceType::General {
                moves.push(Move::new(from, pos));
            }
        }
        break;
    }
}
