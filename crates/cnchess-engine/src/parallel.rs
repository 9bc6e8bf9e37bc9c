use std::sync::Arc;
use std::thread;

use cnchess_core::{pseudo_moves, Board, Evaluator, Move, Score, SearchResult, Searcher, Side};

use crate::alphabeta::{AlphaBetaConfig, AlphaBetaSearcher, DEFAULT_SEARCH_DEPTH};

pub const SPLIT_CHUNKS: usize = 32;

#[derive(Debug, Clone, Copy)]
pub struct ParallelConfig {
    pub depth: u8,
    /// Upper bound on the number of root chunks searched concurrently.
    pub chunks: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            chunks: SPLIT_CHUNKS,
        }
    }
}

/// Root-split search: the root move list is partitioned into contiguous
/// chunks, each searched on a privately cloned board with a fresh window.
/// Chunk results are reduced in submission order with the same tie-break as
/// the sequential root, so the choice of move is reproducible.
#[derive(Clone)]
pub struct ParallelSearcher {
    eval: Arc<dyn Evaluator>,
    config: ParallelConfig,
}

impl ParallelSearcher {
    pub fn new(config: ParallelConfig, eval: Arc<dyn Evaluator>) -> Self {
        Self { eval, config }
    }

    pub fn best_move(&self, board: &Board, side: Side) -> SearchResult {
        let moves = pseudo_moves(board, side);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: Score(root_seed(side)),
                nodes: 0,
            };
        }

        let chunk_results = thread::scope(|scope| {
            let handles: Vec<_> = split_chunks(&moves, self.config.chunks)
                .into_iter()
                .map(|chunk| {
                    scope.spawn(move || {
                        let mut working = board.clone();
                        let mut searcher = AlphaBetaSearcher::new(
                            AlphaBetaConfig {
                                depth: self.config.depth,
                            },
                            Arc::clone(&self.eval),
                        );
                        let (best_move, score) = searcher.search_root(&mut working, side, chunk);
                        (best_move, score, searcher.nodes())
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("search task panicked"))
                .collect::<Vec<_>>()
        });

        let mut best_move = None;
        let mut best = root_seed(side);
        let mut nodes = 0;

        for (chunk_move, chunk_score, chunk_nodes) in chunk_results {
            nodes += chunk_nodes;
            let Some(mv) = chunk_move else {
                continue;
            };
            let better = match side {
                Side::Upper => chunk_score <= best,
                Side::Lower => chunk_score >= best,
            };
            if better {
                best = chunk_score;
                best_move = Some(mv);
            }
        }

        SearchResult {
            best_move,
            score: Score(best),
            nodes,
        }
    }
}

impl Searcher for ParallelSearcher {
    fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        Self::best_move(self, board, side)
    }
}

const fn root_seed(side: Side) -> i32 {
    match side {
        Side::Upper => i32::MAX,
        Side::Lower => i32::MIN,
    }
}

/// Contiguous chunks of `moves.len() / chunks` entries with the remainder on
/// the last chunk; one chunk per move when the list is shorter than `chunks`.
fn split_chunks(moves: &[Move], chunks: usize) -> Vec<&[Move]> {
    let chunks = chunks.max(1);
    let chunk_len = moves.len() / chunks;
    if chunk_len == 0 {
        return moves.chunks(1).collect();
    }

    let mut split = Vec::with_capacity(chunks);
    for index in 0..chunks - 1 {
        split.push(&moves[index * chunk_len..(index + 1) * chunk_len]);
    }
    split.push(&moves[(chunks - 1) * chunk_len..]);
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnchess_core::Pos;

    fn dummy_moves(count: usize) -> Vec<Move> {
        (0..count)
            .map(|i| Move::new(Pos::new(0, i as i32), Pos::new(1, i as i32)))
            .collect()
    }

    #[test]
    fn split_covers_every_move_in_order() {
        for count in [1, 5, 31, 32, 33, 44, 100] {
            let moves = dummy_moves(count);
            let split = split_chunks(&moves, SPLIT_CHUNKS);

            let flattened: Vec<Move> = split.iter().flat_map(|chunk| chunk.iter().copied()).collect();
            assert_eq!(flattened, moves, "count = {count}");
            assert!(split.len() <= SPLIT_CHUNKS.max(count));
            assert!(split.iter().all(|chunk| !chunk.is_empty()));
        }
    }

    #[test]
    fn short_lists_get_one_chunk_per_move() {
        let moves = dummy_moves(7);
        let split = split_chunks(&moves, SPLIT_CHUNKS);
        assert_eq!(split.len(), 7);
    }
}
