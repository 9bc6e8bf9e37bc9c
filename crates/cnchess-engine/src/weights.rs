use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cnchess_core::constants::{COL_BEGIN, COL_END, ROW_BEGIN, ROW_END};
use cnchess_core::{Board, Evaluator, Piece, PieceType, Pos, Score, Side};
use thiserror::Error;

/// Positional bonuses over the playable grid, indexed by interior-relative
/// `(row, col)` in storage order (Upper back rank first).
pub type PosTable = [[i32; 9]; 10];

#[derive(Debug, Error)]
pub enum WeightError {
    #[error("cannot open weight file {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("weight file {} is truncated or contains invalid data", path.display())]
    Malformed { path: PathBuf },
}

/// Material and positional weights, loaded once at startup and read-only
/// afterwards. Upper entries are conventionally negative so that the summed
/// score grows with Lower's advantage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTables {
    base: [i32; 14],
    pos: [PosTable; 14],
}

impl WeightTables {
    /// Reads `piece_value.txt` plus the fourteen per-piece positional tables
    /// from `dir`. All files are whitespace-separated decimal integers.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, WeightError> {
        let dir = dir.as_ref();
        let base = load_base_values(&dir.join("piece_value.txt"))?;

        let mut pos = [[[0; 9]; 10]; 14];
        for side in [Side::Upper, Side::Lower] {
            for piece_type in PieceType::ALL {
                let piece = Piece::new(piece_type, side);
                let path = dir.join(pos_file_name(piece));
                pos[piece.table_index()] = load_pos_table(&path)?;
            }
        }

        Ok(Self { base, pos })
    }

    pub fn from_parts(base: [i32; 14], pos: [PosTable; 14]) -> Self {
        Self { base, pos }
    }

    pub fn base_value(&self, piece: Piece) -> i32 {
        self.base[piece.table_index()]
    }

    pub fn pos_value(&self, piece: Piece, pos: Pos) -> i32 {
        self.pos[piece.table_index()][(pos.row - ROW_BEGIN) as usize][(pos.col - COL_BEGIN) as usize]
    }
}

impl Evaluator for WeightTables {
    fn evaluate(&self, board: &Board) -> Score {
        let mut total = 0;
        for row in ROW_BEGIN..=ROW_END {
            for col in COL_BEGIN..=COL_END {
                let pos = Pos::new(row, col);
                if let Some(piece) = board.get(pos).piece() {
                    total += self.base_value(piece) + self.pos_value(piece, pos);
                }
            }
        }
        Score(total)
    }
}

fn pos_file_name(piece: Piece) -> String {
    let side = match piece.side {
        Side::Upper => "up",
        Side::Lower => "down",
    };
    format!("piece_pos_value_{side}_{}.txt", piece.piece_type.name())
}

fn load_base_values(path: &Path) -> Result<[i32; 14], WeightError> {
    let text = read_weight_file(path)?;
    let mut tokens = text.split_whitespace();

    let mut base = [0; 14];
    for slot in &mut base {
        *slot = next_value(&mut tokens, path)?;
    }
    Ok(base)
}

fn load_pos_table(path: &Path) -> Result<PosTable, WeightError> {
    let text = read_weight_file(path)?;
    let mut tokens = text.split_whitespace();

    let mut table = [[0; 9]; 10];
    for row in &mut table {
        for slot in row {
            *slot = next_value(&mut tokens, path)?;
        }
    }
    Ok(table)
}

fn read_weight_file(path: &Path) -> Result<String, WeightError> {
    fs::read_to_string(path).map_err(|source| WeightError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn next_value<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
) -> Result<i32, WeightError> {
    tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| WeightError::Malformed {
            path: path.to_path_buf(),
        })
}
