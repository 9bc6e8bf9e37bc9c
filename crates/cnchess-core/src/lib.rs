pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod search;
pub mod types;

pub use board::{Board, BoardError, HistoryEntry};
pub use eval::Evaluator;
pub use game::{general_alive, is_legal_move, is_win, winner};
pub use movegen::{pseudo_moves, CARDINALS, DIAGONALS};
pub use notation::{format_move, parse_move, NotationError};
pub use search::{SearchResult, Searcher};
pub use types::{Cell, Move, MoveList, Piece, PieceType, Pos, Score, Side};
