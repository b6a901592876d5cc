use super::board::Board;
use super::types::{Move, Player};

pub const AI_WIN_SCORE: i32 = 1;
pub const HUMAN_WIN_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated below the root.
    pub nodes: u64,
    /// Deepest ply reached, counting the root move as ply 1.
    pub max_depth: usize,
}

/// Exhaustive minimax over a borrowed board.
///
/// Every branch is explored by applying a move, recursing and undoing it, so
/// the board is left exactly as it was passed in. There is no pruning and no
/// caching; the depth counter only feeds [`SearchStats`].
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent `search`, `best_move` or `evaluate` call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of `board` with the given side to move: 1 when the AI
    /// wins under perfect play, -1 when the human does, 0 for a draw.
    pub fn evaluate(&mut self, board: &mut Board, maximizing_for_ai: bool) -> i32 {
        self.stats = SearchStats::default();
        self.minimax(board, 0, maximizing_for_ai)
    }

    pub fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Scores every AI move from the root. Moves are tried in ascending order
    /// and only a strictly better score replaces the current choice, so the
    /// lowest index wins ties.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.stats = SearchStats::default();

        let mut best_score = i32::MIN;
        let mut best_move = None;

        for pos in board.available_moves() {
            board.apply_move(pos, Player::Ai);
            let score = self.minimax(board, 1, false);
            board.undo_move(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        if best_move.is_none() {
            best_score = terminal_score(board).unwrap_or(DRAW_SCORE);
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }

    fn minimax(&mut self, board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if let Some(score) = terminal_score(board) {
            return score;
        }

        let player = if is_maximizing { Player::Ai } else { Player::Human };
        let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

        for pos in board.available_moves() {
            board.apply_move(pos, player);
            let score = self.minimax(board, depth + 1, !is_maximizing);
            board.undo_move(pos);

            best_score = if is_maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }
}

/// AI win, then human win, then full board.
fn terminal_score(board: &Board) -> Option<i32> {
    match board.winner() {
        Some(Player::Ai) => Some(AI_WIN_SCORE),
        Some(Player::Human) => Some(HUMAN_WIN_SCORE),
        None if board.is_full() => Some(DRAW_SCORE),
        None => None,
    }
}

pub fn evaluate(board: &mut Board, maximizing_for_ai: bool) -> i32 {
    Searcher::new().evaluate(board, maximizing_for_ai)
}

pub fn best_move(board: &mut Board) -> Option<Move> {
    Searcher::new().best_move(board)
}
