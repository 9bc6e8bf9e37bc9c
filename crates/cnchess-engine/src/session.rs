use std::sync::Arc;
use std::time::{Duration, Instant};

use cnchess_core::{is_win, pseudo_moves, Board, Evaluator, Move, Piece, Side};

use crate::alphabeta::DEFAULT_SEARCH_DEPTH;
use crate::parallel::{ParallelConfig, ParallelSearcher, SPLIT_CHUNKS};

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub user_side: Side,
    pub depth: u8,
    pub chunks: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_side: Side::Lower,
            depth: DEFAULT_SEARCH_DEPTH,
            chunks: SPLIT_CHUNKS,
        }
    }
}

/// The engine's answer to a user move: what it played, with which piece,
/// and how long the search took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineReply {
    pub mv: Move,
    pub piece: Piece,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub mv: Move,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The from-cell does not hold a piece of the user's side.
    NotYourPiece,
    /// The move is not among the user's pseudo-legal moves.
    Illegal,
    UserWins,
    EngineWins(EngineReply),
    Continue(EngineReply),
}

/// One human-versus-engine game. The frontend submits user moves and gets
/// back the engine's replies; board mutation stays in here.
pub struct Session {
    board: Board,
    user_side: Side,
    searcher: ParallelSearcher,
}

impl Session {
    pub fn new(config: SessionConfig, eval: Arc<dyn Evaluator>) -> Self {
        Self::from_board(Board::new(), config, eval)
    }

    /// Resumes from an arbitrary position instead of the opening.
    pub fn from_board(board: Board, config: SessionConfig, eval: Arc<dyn Evaluator>) -> Self {
        let searcher = ParallelSearcher::new(
            ParallelConfig {
                depth: config.depth,
                chunks: config.chunks,
            },
            eval,
        );
        Self {
            board,
            user_side: config.user_side,
            searcher,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn user_side(&self) -> Side {
        self.user_side
    }

    pub fn engine_side(&self) -> Side {
        self.user_side.opponent()
    }

    pub fn new_game(&mut self, user_side: Side) {
        self.user_side = user_side;
        self.board.reset();
    }

    /// Restarts the game keeping the current side selection.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    pub fn legal_user_move(&self, mv: Move) -> bool {
        pseudo_moves(&self.board, self.user_side).contains(&mv)
    }

    /// Validates and applies the user's move, then computes and applies the
    /// engine's reply unless the game already ended.
    pub fn submit_move(&mut self, mv: Move) -> TurnOutcome {
        if self.board.get(mv.from).side() != Some(self.user_side) {
            return TurnOutcome::NotYourPiece;
        }
        if !self.legal_user_move(mv) {
            return TurnOutcome::Illegal;
        }

        self.board.apply(mv);
        if is_win(&self.board, self.user_side) {
            return TurnOutcome::UserWins;
        }

        let started = Instant::now();
        let result = self.searcher.best_move(&self.board, self.engine_side());
        let elapsed = started.elapsed();

        let Some(reply_move) = result.best_move else {
            // No engine piece can move at all; the user has run the board.
            return TurnOutcome::UserWins;
        };
        let piece = self
            .board
            .get(reply_move.from)
            .piece()
            .expect("engine reply starts from an occupied cell");

        self.board.apply(reply_move);
        let reply = EngineReply {
            mv: reply_move,
            piece,
            elapsed,
        };

        if is_win(&self.board, self.engine_side()) {
            TurnOutcome::EngineWins(reply)
        } else {
            TurnOutcome::Continue(reply)
        }
    }

    /// Suggests a move for the user without touching the live board.
    pub fn hint(&self) -> Option<Hint> {
        let started = Instant::now();
        let result = self.searcher.best_move(&self.board, self.user_side);
        let mv = result.best_move?;
        Some(Hint {
            mv,
            elapsed: started.elapsed(),
        })
    }

    /// Undoes the engine's and the user's last half-moves; when the history
    /// is shorter, undoes as many as exist.
    pub fn undo_pair(&mut self) {
        self.board.undo();
        self.board.undo();
    }
}
