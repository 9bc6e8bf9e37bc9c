pub mod alphabeta;
pub mod parallel;
pub mod session;
pub mod weights;

pub use alphabeta::{AlphaBetaConfig, AlphaBetaSearcher, DEFAULT_SEARCH_DEPTH};
pub use parallel::{ParallelConfig, ParallelSearcher, SPLIT_CHUNKS};
pub use session::{EngineReply, Hint, Session, SessionConfig, TurnOutcome};
pub use weights::{PosTable, WeightError, WeightTables};
