use crate::board::Board;
use crate::types::{Move, Score, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no pseudo-legal moves at all.
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes: u64,
}

pub trait Searcher {
    fn search(&mut self, board: &Board, side: Side) -> SearchResult;
}
