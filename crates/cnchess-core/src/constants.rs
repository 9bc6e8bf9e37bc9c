use crate::types::Side;

/// Storage grid including the two-cell sentinel border on every edge.
pub const GRID_ROWS: usize = 14;
pub const GRID_COLS: usize = 13;

/// Interior (playable) bounds: 10 rows by 9 columns.
pub const ROW_BEGIN: i32 = 2;
pub const ROW_END: i32 = 11;
pub const COL_BEGIN: i32 = 2;
pub const COL_END: i32 = 10;

/// Last row of the Upper camp and first row of the Lower camp.
pub const RIVER_UP: i32 = 6;
pub const RIVER_DOWN: i32 = 7;

pub const NINE_PALACE_UPPER_TOP: i32 = 2;
pub const NINE_PALACE_UPPER_BOTTOM: i32 = 4;
pub const NINE_PALACE_LOWER_TOP: i32 = 9;
pub const NINE_PALACE_LOWER_BOTTOM: i32 = 11;
pub const NINE_PALACE_LEFT: i32 = 5;
pub const NINE_PALACE_RIGHT: i32 = 7;

pub const fn palace_row_bounds(side: Side) -> (i32, i32) {
    match side {
        Side::Upper => (NINE_PALACE_UPPER_TOP, NINE_PALACE_UPPER_BOTTOM),
        Side::Lower => (NINE_PALACE_LOWER_TOP, NINE_PALACE_LOWER_BOTTOM),
    }
}

/// Opening layout, one template row per interior row, Upper back rank first.
pub const OPENING_ROWS: [&str; 10] = [
    "RNBAGABNR",
    ".........",
    ".C.....C.",
    "P.P.P.P.P",
    ".........",
    ".........",
    "p.p.p.p.p",
    ".c.....c.",
    ".........",
    "rnbagabnr",
];
