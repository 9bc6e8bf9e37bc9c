use crate::board::Board;
use crate::types::Score;

/// Static position evaluation. Higher scores favor the Lower side.
/// Implementations are shared read-only across search tasks.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board) -> Score;
}
