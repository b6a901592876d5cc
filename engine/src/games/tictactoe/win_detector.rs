use super::types::{CELL_COUNT, Mark, Move};

/// Rows, then columns, then diagonals. `check_win_with_line` reports the first match.
pub const LINES: [[Move; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<(Mark, [Move; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some((mark, line));
        }
    }
    None
}
